//! Diagnostic reporter: turns part matches into per-part results.

use crate::matcher::{find_parts, FoundPart};
use crate::node::Node;
use crate::rules::ComponentRules;
use crate::types::{LintResult, NodeRef};
use std::collections::HashMap;
use tracing::debug;

/// Lints `root` against one rule set.
///
/// Emits at most one result per declared part, in declaration order, then
/// stable-sorts missing before rename before correct. Optional parts that
/// were not found produce no result. When some instances of a part need a
/// rename and others are correct, only the rename result is emitted; it
/// carries every node to rename and the number of correct instances.
#[must_use]
pub fn lint(root: &Node, rules: &ComponentRules) -> Vec<LintResult> {
    let found = find_parts(root, rules);

    let mut by_part: HashMap<&str, Vec<&FoundPart<'_>>> = HashMap::new();
    for part in &found {
        by_part.entry(part.part).or_default().push(part);
    }

    let mut results = Vec::new();
    for (name, rule) in rules.parts() {
        let parent = rule.parent.as_deref();
        let group = by_part.get(name).map(Vec::as_slice).unwrap_or_default();

        if group.is_empty() {
            if rule.required {
                results.push(LintResult::missing(name, parent));
            }
            continue;
        }

        let (aliased, correct): (Vec<&FoundPart<'_>>, Vec<&FoundPart<'_>>) =
            group.iter().copied().partition(|f| f.was_alias);

        let to_rename = aliased
            .iter()
            .map(|f| NodeRef::new(f.path.clone(), f.node))
            .collect();

        if let Some(mut result) = LintResult::rename(name, parent, to_rename) {
            result.correct_count = correct.len();
            results.push(result);
        } else if let Some(first) = correct.first() {
            results.push(LintResult::correct(
                name,
                parent,
                NodeRef::new(first.path.clone(), first.node),
            ));
        }
    }

    results.sort_by_key(|r| r.status);

    debug!("Linted {}: {} results", rules.component(), results.len());
    results
}
