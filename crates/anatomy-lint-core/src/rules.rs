//! Pure domain model for component anatomy rules.
//!
//! This module contains no serde and no I/O. Rule sets are validated at
//! construction: every `parent` must name a part of the same rule set, part
//! names are unique, and parent chains terminate at a top-level part.

use crate::normalize::{normalize_family, normalize_name};
use std::collections::{HashMap, HashSet};

/// Errors raised while constructing a rule set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// The component display name is empty.
    #[error("component name must not be empty")]
    EmptyComponentName,

    /// The rule set has no family strings to be selected by.
    #[error("{component}: `matches` must contain at least one family name")]
    NoMatches {
        /// Component display name.
        component: String,
    },

    /// A family string normalizes to nothing and would match every name.
    #[error("{component}: match string `{value}` is empty after normalization")]
    BlankMatch {
        /// Component display name.
        component: String,
        /// The offending match string.
        value: String,
    },

    /// A part has an empty name.
    #[error("{component}: part name must not be empty")]
    EmptyPartName {
        /// Component display name.
        component: String,
    },

    /// Two parts share a canonical name.
    #[error("{component}: part `{part}` is declared more than once")]
    DuplicatePart {
        /// Component display name.
        component: String,
        /// The duplicated part name.
        part: String,
    },

    /// A part's parent does not exist in the same rule set.
    #[error("{component}: part `{part}` has unknown parent `{parent}`")]
    UnknownParent {
        /// Component display name.
        component: String,
        /// The part declaring the parent.
        part: String,
        /// The dangling parent name.
        parent: String,
    },

    /// Following `parent` from a part never reaches a top-level part.
    #[error("{component}: part `{part}` has a cyclic parent chain")]
    ParentCycle {
        /// Component display name.
        component: String,
        /// The part whose chain cycles.
        part: String,
    },
}

/// Expectation for one anatomical part.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartRule {
    /// Whether absence is reported.
    pub required: bool,
    /// Canonical name of the containing part; `None` for top-level parts.
    pub parent: Option<String>,
    /// Historical names that should be renamed to the canonical name.
    pub aliases: Vec<String>,
}

impl PartRule {
    /// A required top-level part without aliases.
    #[must_use]
    pub fn required() -> Self {
        Self {
            required: true,
            ..Self::default()
        }
    }

    /// An optional top-level part without aliases.
    #[must_use]
    pub fn optional() -> Self {
        Self::default()
    }

    /// Sets the parent part.
    #[must_use]
    pub fn under(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Adds an alias.
    #[must_use]
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }
}

/// How a node name relates to a part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameMatch {
    /// The canonical name.
    Exact,
    /// One of the aliases.
    Alias,
}

/// A validated anatomy rule set for one component family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentRules {
    component: String,
    matches: Vec<String>,
    parts: Vec<(String, PartRule)>,
    ignored: Vec<String>,
}

impl ComponentRules {
    /// Creates a validated rule set. Parts keep their declaration order.
    ///
    /// # Errors
    ///
    /// Returns every invariant violation found, not only the first.
    pub fn new(
        component: impl Into<String>,
        matches: Vec<String>,
        parts: Vec<(String, PartRule)>,
        ignored: Vec<String>,
    ) -> Result<Self, Vec<ModelError>> {
        let component = component.into();
        let mut errors = Vec::new();

        if component.trim().is_empty() {
            errors.push(ModelError::EmptyComponentName);
        }
        if matches.is_empty() {
            errors.push(ModelError::NoMatches {
                component: component.clone(),
            });
        }
        for value in &matches {
            if normalize_family(value).is_empty() {
                errors.push(ModelError::BlankMatch {
                    component: component.clone(),
                    value: value.clone(),
                });
            }
        }

        let mut seen = HashSet::new();
        for (name, _) in &parts {
            if name.trim().is_empty() {
                errors.push(ModelError::EmptyPartName {
                    component: component.clone(),
                });
            } else if !seen.insert(name.as_str()) {
                errors.push(ModelError::DuplicatePart {
                    component: component.clone(),
                    part: name.clone(),
                });
            }
        }

        let parents: HashMap<&str, Option<&str>> = parts
            .iter()
            .map(|(name, rule)| (name.as_str(), rule.parent.as_deref()))
            .collect();

        for (name, rule) in &parts {
            if let Some(parent) = rule.parent.as_deref() {
                if !parents.contains_key(parent) {
                    errors.push(ModelError::UnknownParent {
                        component: component.clone(),
                        part: name.clone(),
                        parent: parent.to_string(),
                    });
                }
            }
        }

        for (name, _) in &parts {
            if on_parent_cycle(name, &parents) {
                errors.push(ModelError::ParentCycle {
                    component: component.clone(),
                    part: name.clone(),
                });
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self {
            component,
            matches,
            parts,
            ignored,
        })
    }

    /// Returns the component display name.
    #[must_use]
    pub fn component(&self) -> &str {
        &self.component
    }

    /// Returns the family strings used for resolution.
    #[must_use]
    pub fn matches(&self) -> &[String] {
        &self.matches
    }

    /// Returns the ignored node names.
    #[must_use]
    pub fn ignored(&self) -> &[String] {
        &self.ignored
    }

    /// Iterates parts in declaration order.
    pub fn parts(&self) -> impl Iterator<Item = (&str, &PartRule)> {
        self.parts.iter().map(|(name, rule)| (name.as_str(), rule))
    }

    /// Looks up a part by canonical name.
    #[must_use]
    pub fn part(&self, name: &str) -> Option<&PartRule> {
        self.parts
            .iter()
            .find(|(part, _)| part == name)
            .map(|(_, rule)| rule)
    }

    /// Returns the canonical names of the required parts, in declaration order.
    #[must_use]
    pub fn required_parts(&self) -> Vec<&str> {
        self.parts()
            .filter(|(_, rule)| rule.required)
            .map(|(name, _)| name)
            .collect()
    }

    /// Tests whether a normalized family name selects this rule set.
    ///
    /// Matches on equality or when the family starts with a match string, so
    /// `"Accordion / Item"` selects the `Accordion` rules.
    #[must_use]
    pub fn selects(&self, normalized_family: &str) -> bool {
        self.matches.iter().any(|m| {
            let m = normalize_family(m);
            normalized_family == m || normalized_family.starts_with(&m)
        })
    }

    /// Tests whether a node name is ignored.
    #[must_use]
    pub fn is_ignored(&self, node_name: &str) -> bool {
        let normalized = normalize_name(node_name);
        self.ignored.iter().any(|i| i.to_lowercase() == normalized)
    }
}

/// Compares a node name against a part's canonical name and aliases.
#[must_use]
pub fn match_part(node_name: &str, part_name: &str, rule: &PartRule) -> Option<NameMatch> {
    let normalized = normalize_name(node_name);
    if normalized == part_name.to_lowercase() {
        return Some(NameMatch::Exact);
    }
    rule.aliases
        .iter()
        .any(|alias| normalized == alias.to_lowercase())
        .then_some(NameMatch::Alias)
}

fn on_parent_cycle(start: &str, parents: &HashMap<&str, Option<&str>>) -> bool {
    let mut current = parents.get(start).copied().flatten();
    for _ in 0..parents.len() {
        match current {
            None => return false,
            Some(p) if p == start => return true,
            Some(p) => current = parents.get(p).copied().flatten(),
        }
    }
    current.is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(list: &[(&str, PartRule)]) -> Vec<(String, PartRule)> {
        list.iter()
            .map(|(n, r)| ((*n).to_string(), r.clone()))
            .collect()
    }

    fn accordion() -> ComponentRules {
        ComponentRules::new(
            "Accordion",
            vec!["Accordion".into()],
            parts(&[
                ("Root", PartRule::required()),
                ("Trigger", PartRule::required().under("Root").alias("Header")),
            ]),
            vec!["Helper Text".into()],
        )
        .unwrap()
    }

    #[test]
    fn valid_rule_set_keeps_order() {
        let rules = accordion();
        let names: Vec<_> = rules.parts().map(|(n, _)| n).collect();
        assert_eq!(names, ["Root", "Trigger"]);
        assert_eq!(rules.required_parts(), ["Root", "Trigger"]);
        assert_eq!(rules.part("Trigger").unwrap().parent.as_deref(), Some("Root"));
    }

    #[test]
    fn rejects_dangling_parent() {
        let err = ComponentRules::new(
            "Tabs",
            vec!["Tabs".into()],
            parts(&[("Tab", PartRule::required().under("List"))]),
            vec![],
        )
        .unwrap_err();
        assert_eq!(
            err,
            vec![ModelError::UnknownParent {
                component: "Tabs".into(),
                part: "Tab".into(),
                parent: "List".into(),
            }]
        );
    }

    #[test]
    fn rejects_duplicates_and_cycles() {
        let err = ComponentRules::new(
            "Loop",
            vec!["Loop".into()],
            parts(&[
                ("A", PartRule::required().under("B")),
                ("B", PartRule::required().under("A")),
                ("A", PartRule::required().under("B")),
            ]),
            vec![],
        )
        .unwrap_err();
        assert!(err
            .iter()
            .any(|e| matches!(e, ModelError::DuplicatePart { part, .. } if part == "A")));
        assert!(err
            .iter()
            .any(|e| matches!(e, ModelError::ParentCycle { part, .. } if part == "B")));
    }

    #[test]
    fn rejects_self_parent() {
        let err = ComponentRules::new(
            "Self",
            vec!["Self".into()],
            parts(&[("Root", PartRule::required().under("Root"))]),
            vec![],
        )
        .unwrap_err();
        assert!(matches!(err[0], ModelError::ParentCycle { .. }));
    }

    #[test]
    fn rejects_missing_or_blank_matches() {
        let err = ComponentRules::new("X", vec![], vec![], vec![]).unwrap_err();
        assert!(matches!(err[0], ModelError::NoMatches { .. }));

        let err = ComponentRules::new("X", vec![" / ".into()], vec![], vec![]).unwrap_err();
        assert!(matches!(err[0], ModelError::BlankMatch { .. }));
    }

    #[test]
    fn match_part_distinguishes_alias() {
        let rule = PartRule::required().alias("Icon");
        assert_eq!(match_part("ChevronIcon", "ChevronIcon", &rule), Some(NameMatch::Exact));
        assert_eq!(match_part("Item / icon", "ChevronIcon", &rule), Some(NameMatch::Alias));
        assert_eq!(match_part("Arrow", "ChevronIcon", &rule), None);
    }

    #[test]
    fn selects_by_prefix() {
        let rules = accordion();
        assert!(rules.selects(&normalize_family("Accordion")));
        assert!(rules.selects(&normalize_family("Accordion / Item")));
        assert!(!rules.selects(&normalize_family("Tabs")));
    }

    #[test]
    fn ignored_names_are_normalized() {
        let rules = accordion();
        assert!(rules.is_ignored("Field / helper text"));
        assert!(!rules.is_ignored("Helper"));
    }
}
