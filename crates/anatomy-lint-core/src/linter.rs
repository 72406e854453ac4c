//! Lint orchestration for a host selection.
//!
//! [`Linter::lint_selection`] is the "run lint" command and [`Linter::fix`]
//! the "apply fixes" command. The fix step takes the previous results as an
//! argument; the linter itself holds no state between calls.

use crate::fix::{apply_fixes, fix_summary};
use crate::node::Node;
use crate::registry::Registry;
use crate::report::lint;
use crate::types::{LintReport, LintResult};
use tracing::info;

/// Outcome of the fix command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixOutcome {
    /// Number of nodes renamed.
    pub renamed: usize,
    /// Notification text for the user.
    pub summary: String,
    /// Diagnostics after the fixes were applied.
    pub report: LintReport,
}

/// Runs the lint pipeline against a rule registry.
#[derive(Debug, Clone, Default)]
pub struct Linter {
    registry: Registry,
}

impl Linter {
    /// Creates a linter over `registry`.
    #[must_use]
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    /// Returns the registry.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Lints the selected node, resolving rules by its display name.
    ///
    /// An empty selection or an unknown component yields a report with no
    /// results and an explanatory message.
    #[must_use]
    pub fn lint_selection(&self, selection: Option<&Node>) -> LintReport {
        match selection {
            Some(node) => self.lint_as(node, node.name()),
            None => LintReport::no_selection(),
        }
    }

    /// Lints `node`, resolving rules by `family` instead of the node name.
    #[must_use]
    pub fn lint_as(&self, node: &Node, family: &str) -> LintReport {
        let Some(rules) = self.registry.resolve(family) else {
            info!("No rules for {family:?}, skipping");
            return LintReport::no_rules(node.name(), family);
        };

        let results = lint(node, rules);
        LintReport {
            component: Some(node.name().to_string()),
            base_component: Some(rules.component().to_string()),
            results,
            message: None,
        }
    }

    /// Applies the renames in `previous` to `node` and lints it again.
    pub fn fix(&self, node: &mut Node, family: &str, previous: &[LintResult]) -> FixOutcome {
        let renamed = apply_fixes(node, previous);
        let summary = fix_summary(renamed);
        info!("{summary}");
        FixOutcome {
            renamed,
            summary,
            report: self.lint_as(node, family),
        }
    }
}
