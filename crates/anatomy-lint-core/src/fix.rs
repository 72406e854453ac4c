//! Auto-fix: rename aliased nodes to their canonical part names.
//!
//! Fixes are computed from a prior result list that the caller passes in
//! explicitly. Diagnostics are not recomputed here; lint again afterwards.

use crate::node::{Node, NodePath};
use crate::types::{LintResult, LintStatus};
use tracing::{debug, warn};

/// One planned rename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rename {
    /// Node to rename, relative to the linted root.
    pub path: NodePath,
    /// Name at lint time.
    pub from: String,
    /// Canonical part name.
    pub to: String,
}

/// Lists the renames described by `results`.
///
/// Every node of a rename result is included; a result without a node
/// collection falls back to its representative node.
#[must_use]
pub fn plan_fixes(results: &[LintResult]) -> Vec<Rename> {
    let mut renames = Vec::new();
    for result in results {
        if result.status != LintStatus::Rename {
            continue;
        }
        let Some(to) = result.suggested_name.as_deref() else {
            continue;
        };
        let targets = if result.nodes.is_empty() {
            result.node.iter().collect::<Vec<_>>()
        } else {
            result.nodes.iter().collect()
        };
        renames.extend(targets.into_iter().map(|n| Rename {
            path: n.path.clone(),
            from: n.name.clone(),
            to: to.to_string(),
        }));
    }
    renames
}

/// Applies the renames described by `results` to the tree under `root`.
///
/// Returns the number of nodes renamed. Paths that no longer resolve are
/// skipped with a warning.
pub fn apply_fixes(root: &mut Node, results: &[LintResult]) -> usize {
    let mut count = 0;
    for rename in plan_fixes(results) {
        match root.get_mut(&rename.path) {
            Some(node) => {
                debug!("Renaming {} at {}: {:?}", rename.from, rename.path, rename.to);
                node.set_name(rename.to);
                count += 1;
            }
            None => warn!("Node to rename no longer exists: {}", rename.path),
        }
    }
    count
}

/// Notification text for a fix run, e.g. `Fixed 2 nodes across all variants`.
#[must_use]
pub fn fix_summary(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("Fixed {count} node{plural} across all variants")
}
