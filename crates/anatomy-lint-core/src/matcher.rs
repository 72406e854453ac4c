//! Tree matching of document nodes against an anatomy.
//!
//! The walk is depth-first and pre-order. A node may match at most one part
//! (first in declaration order), and a part only matches below a node that
//! matched its declared parent. Component sets are fanned out so that every
//! variant is checked on its own.

use crate::node::{Node, NodePath};
use crate::rules::{match_part, ComponentRules, NameMatch};
use std::collections::HashSet;
use tracing::{debug, trace};

/// A node matched to a canonical part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundPart<'a> {
    /// The matched node.
    pub node: &'a Node,
    /// Address of the node from the linted root.
    pub path: NodePath,
    /// Canonical part name.
    pub part: &'a str,
    /// `true` when the node carries an alias and needs a rename.
    pub was_alias: bool,
}

/// Collects every part match under `root`, across all variants.
///
/// - A component set root is expanded into its variants, each walked with an
///   empty parent context.
/// - Any other container is walked itself, then each direct child that is a
///   component set (expanded into variants) or a component/instance is walked
///   again with an empty parent context.
///
/// A node matched to the same part by both passes is reported once.
#[must_use]
pub fn find_parts<'a>(root: &'a Node, rules: &'a ComponentRules) -> Vec<FoundPart<'a>> {
    let mut found = Vec::new();
    let root_path = NodePath::root();

    if root.is_component_set() {
        walk_variants(root, &root_path, rules, &mut found);
    } else if root.container_kind().is_some() {
        walk(root, root_path.clone(), rules, None, &mut found);

        for (i, child) in root.children().iter().enumerate() {
            let child_path = root_path.child(i);
            if child.is_component_set() {
                walk_variants(child, &child_path, rules, &mut found);
            } else if child.container_kind().is_some_and(|k| k.is_component_like()) {
                walk(child, child_path, rules, None, &mut found);
            }
        }
    } else {
        walk(root, root_path, rules, None, &mut found);
    }

    let mut seen = HashSet::new();
    found.retain(|f| seen.insert((f.path.clone(), f.part)));

    debug!("Collected {} part matches for {}", found.len(), rules.component());
    found
}

fn walk_variants<'a>(
    set: &'a Node,
    path: &NodePath,
    rules: &'a ComponentRules,
    found: &mut Vec<FoundPart<'a>>,
) {
    for (i, variant) in set.children().iter().enumerate() {
        trace!("Walking variant: {}", variant.name());
        walk(variant, path.child(i), rules, None, found);
    }
}

/// Matches one node and descends into its children.
///
/// Non-structural nodes are skipped entirely. An unmatched node that is in
/// the ignore list hides its whole subtree; any other unmatched node is
/// transparent and passes the parent context down unchanged.
fn walk<'a>(
    node: &'a Node,
    path: NodePath,
    rules: &'a ComponentRules,
    parent: Option<&'a str>,
    found: &mut Vec<FoundPart<'a>>,
) {
    if node.container_kind().is_none() {
        return;
    }

    let matched = rules
        .parts()
        .filter(|(_, rule)| rule.parent.as_deref() == parent)
        .find_map(|(part, rule)| match_part(node.name(), part, rule).map(|m| (part, m)));

    let child_context = match matched {
        Some((part, m)) => {
            let was_alias = m == NameMatch::Alias;
            debug!("Matched {:?} as {part} (alias: {was_alias})", node.name());
            found.push(FoundPart {
                node,
                path: path.clone(),
                part,
                was_alias,
            });
            Some(part)
        }
        None if rules.is_ignored(node.name()) => {
            trace!("Skipping ignored subtree: {:?}", node.name());
            return;
        }
        None => parent,
    };

    for (i, child) in node.children().iter().enumerate() {
        walk(child, path.child(i), rules, child_context, found);
    }
}
