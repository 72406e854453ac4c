//! Rule registry: resolves a component family name to its rule set.

use crate::normalize::normalize_family;
use crate::rules::ComponentRules;
use tracing::debug;

/// An ordered collection of rule sets.
///
/// Order is priority: more specific rule sets (e.g. `CheckboxGroup`) must be
/// registered before the general ones they share a prefix with (`Checkbox`).
#[derive(Debug, Clone, Default)]
pub struct Registry {
    rules: Vec<ComponentRules>,
}

impl Registry {
    /// Creates a registry from rule sets in priority order.
    #[must_use]
    pub fn new(rules: Vec<ComponentRules>) -> Self {
        Self { rules }
    }

    /// Inserts rule sets ahead of everything already registered.
    #[must_use]
    pub fn with_priority(mut self, rules: Vec<ComponentRules>) -> Self {
        self.rules.splice(0..0, rules);
        self
    }

    /// Drops every rule set whose component name satisfies `pred`.
    #[must_use]
    pub fn without(mut self, pred: impl Fn(&str) -> bool) -> Self {
        self.rules.retain(|r| !pred(r.component()));
        self
    }

    /// Resolves the rule set for a component family name.
    ///
    /// The first rule set with a match string equal to, or a prefix of, the
    /// normalized family wins. `None` means the selection is not a known
    /// component and should not be linted.
    #[must_use]
    pub fn resolve(&self, family: &str) -> Option<&ComponentRules> {
        let normalized = normalize_family(family);
        let found = self.rules.iter().find(|r| r.selects(&normalized));
        debug!(
            "Resolved {family:?} to {}",
            found.map_or("nothing", ComponentRules::component)
        );
        found
    }

    /// Returns all rule sets in priority order.
    #[must_use]
    pub fn rules(&self) -> &[ComponentRules] {
        &self.rules
    }

    /// Returns the component names of all rule sets.
    #[must_use]
    pub fn supported_components(&self) -> Vec<&str> {
        self.rules.iter().map(ComponentRules::component).collect()
    }

    /// Returns the number of rule sets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no rule sets are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::PartRule;

    fn rules(component: &str, matches: &[&str]) -> ComponentRules {
        ComponentRules::new(
            component,
            matches.iter().map(|m| (*m).to_string()).collect(),
            vec![("Root".into(), PartRule::required())],
            vec![],
        )
        .unwrap()
    }

    fn registry() -> Registry {
        Registry::new(vec![
            rules("AlertDialog", &["AlertDialog", "Alert Dialog"]),
            rules("CheckboxGroup", &["CheckboxGroup", "Checkbox Group"]),
            rules("Checkbox", &["Checkbox"]),
            rules("Dialog", &["Dialog", "Modal"]),
        ])
    }

    #[test]
    fn resolves_exact_and_case_insensitive() {
        let reg = registry();
        assert_eq!(reg.resolve("checkbox").unwrap().component(), "Checkbox");
        assert_eq!(reg.resolve("Modal").unwrap().component(), "Dialog");
    }

    #[test]
    fn specific_rules_win_over_general_prefix() {
        let reg = registry();
        assert_eq!(
            reg.resolve("Checkbox Group").unwrap().component(),
            "CheckboxGroup"
        );
        assert_eq!(
            reg.resolve("Alert Dialog / Popup").unwrap().component(),
            "AlertDialog"
        );
    }

    #[test]
    fn resolves_path_qualified_names_by_prefix() {
        let reg = registry();
        assert_eq!(reg.resolve("Checkbox / Indicator").unwrap().component(), "Checkbox");
    }

    #[test]
    fn unknown_family_is_none() {
        let reg = registry();
        assert!(reg.resolve("Banner").is_none());
        assert!(reg.resolve("").is_none());
    }

    #[test]
    fn priority_and_disable() {
        let reg = registry()
            .with_priority(vec![rules("Custom", &["Check"])])
            .without(|c| c == "Dialog");
        assert_eq!(reg.supported_components()[0], "Custom");
        assert_eq!(reg.resolve("Checkbox").unwrap().component(), "Custom");
        assert!(reg.resolve("Modal").is_none());
        assert_eq!(reg.len(), 4);
    }
}
