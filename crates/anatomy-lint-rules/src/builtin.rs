//! Built-in Base UI rule sets.

use anatomy_lint_core::declarative::{load_rules_from_toml, LoadRulesError};
use anatomy_lint_core::{ComponentRules, Registry};
use tracing::debug;

/// Embedded rule files in priority order.
///
/// A family that shares a prefix with another must come first
/// (`CheckboxGroup` before `Checkbox`, `Fieldset` before `Field`).
const BUILTIN_SOURCES: &[(&str, &str)] = &[
    ("Accordion", include_str!("../rules/accordion.toml")),
    ("AlertDialog", include_str!("../rules/alert-dialog.toml")),
    ("Autocomplete", include_str!("../rules/autocomplete.toml")),
    ("Avatar", include_str!("../rules/avatar.toml")),
    ("Button", include_str!("../rules/button.toml")),
    ("CheckboxGroup", include_str!("../rules/checkbox-group.toml")),
    ("Checkbox", include_str!("../rules/checkbox.toml")),
    ("Collapsible", include_str!("../rules/collapsible.toml")),
    ("Combobox", include_str!("../rules/combobox.toml")),
    ("ContextMenu", include_str!("../rules/context-menu.toml")),
    ("Dialog", include_str!("../rules/dialog.toml")),
    ("Fieldset", include_str!("../rules/fieldset.toml")),
    ("Field", include_str!("../rules/field.toml")),
    ("Form", include_str!("../rules/form.toml")),
    ("Input", include_str!("../rules/input.toml")),
    ("Menubar", include_str!("../rules/menubar.toml")),
    ("Menu", include_str!("../rules/menu.toml")),
    ("Meter", include_str!("../rules/meter.toml")),
    ("NavigationMenu", include_str!("../rules/navigation-menu.toml")),
    ("NumberField", include_str!("../rules/number-field.toml")),
    ("Popover", include_str!("../rules/popover.toml")),
    ("PreviewCard", include_str!("../rules/preview-card.toml")),
    ("Progress", include_str!("../rules/progress.toml")),
    ("RadioGroup", include_str!("../rules/radio-group.toml")),
    ("Radio", include_str!("../rules/radio.toml")),
    ("ScrollArea", include_str!("../rules/scroll-area.toml")),
    ("Select", include_str!("../rules/select.toml")),
    ("Separator", include_str!("../rules/separator.toml")),
    ("Slider", include_str!("../rules/slider.toml")),
    ("Switch", include_str!("../rules/switch.toml")),
    ("Tabs", include_str!("../rules/tabs.toml")),
    ("Textarea", include_str!("../rules/textarea.toml")),
    ("Toast", include_str!("../rules/toast.toml")),
    ("ToggleGroup", include_str!("../rules/toggle-group.toml")),
    ("Toggle", include_str!("../rules/toggle.toml")),
    ("Toolbar", include_str!("../rules/toolbar.toml")),
    ("Tooltip", include_str!("../rules/tooltip.toml")),
];

/// Loads every built-in rule set in priority order.
///
/// # Errors
///
/// Returns an error if an embedded rule file is malformed.
pub fn builtin_rules() -> Result<Vec<ComponentRules>, LoadRulesError> {
    let mut rules = Vec::with_capacity(BUILTIN_SOURCES.len());
    for (name, content) in BUILTIN_SOURCES {
        let origin = format!("builtin:{name}");
        let loaded = load_rules_from_toml(&origin, content)?;
        debug!(origin, count = loaded.len(), "loaded built-in rules");
        rules.extend(loaded);
    }
    Ok(rules)
}

/// Returns a registry holding the built-in rule sets.
///
/// # Errors
///
/// Returns an error if an embedded rule file is malformed.
pub fn builtin_registry() -> Result<Registry, LoadRulesError> {
    builtin_rules().map(Registry::new)
}

/// Returns the names of the built-in component families in priority order.
#[must_use]
pub fn supported_components() -> Vec<&'static str> {
    BUILTIN_SOURCES.iter().map(|(name, _)| *name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anatomy_lint_core::{normalize_family, ContainerKind, Linter, LintStatus, Node};

    #[test]
    fn every_builtin_loads() {
        let rules = builtin_rules().unwrap();
        assert_eq!(rules.len(), BUILTIN_SOURCES.len());
        for (rule, (name, _)) in rules.iter().zip(BUILTIN_SOURCES) {
            assert_eq!(rule.component(), *name);
        }
    }

    #[test]
    fn supported_components_in_priority_order() {
        let names = supported_components().join("\n");
        insta::assert_snapshot!(names, @r"
        Accordion
        AlertDialog
        Autocomplete
        Avatar
        Button
        CheckboxGroup
        Checkbox
        Collapsible
        Combobox
        ContextMenu
        Dialog
        Fieldset
        Field
        Form
        Input
        Menubar
        Menu
        Meter
        NavigationMenu
        NumberField
        Popover
        PreviewCard
        Progress
        RadioGroup
        Radio
        ScrollArea
        Select
        Separator
        Slider
        Switch
        Tabs
        Textarea
        Toast
        ToggleGroup
        Toggle
        Toolbar
        Tooltip
        ");
    }

    #[test]
    fn no_rule_set_is_shadowed() {
        let registry = builtin_registry().unwrap();
        for rules in registry.rules() {
            for family in rules.matches() {
                let resolved = registry.resolve(family).unwrap();
                assert_eq!(
                    resolved.component(),
                    rules.component(),
                    "{family:?} resolved to {} (normalized {:?})",
                    resolved.component(),
                    normalize_family(family)
                );
            }
        }
    }

    #[test]
    fn specific_families_resolve_first() {
        let registry = builtin_registry().unwrap();
        for (family, expected) in [
            ("Checkbox Group", "CheckboxGroup"),
            ("Checkbox", "Checkbox"),
            ("Radio Group", "RadioGroup"),
            ("Radio", "Radio"),
            ("Toggle Group", "ToggleGroup"),
            ("Toggle", "Toggle"),
            ("Alert Dialog", "AlertDialog"),
            ("Dialog", "Dialog"),
            ("Menubar", "Menubar"),
            ("Menu", "Menu"),
            ("Fieldset", "Fieldset"),
            ("Field", "Field"),
        ] {
            assert_eq!(registry.resolve(family).unwrap().component(), expected);
        }
    }

    #[test]
    fn variant_qualified_names_resolve() {
        let registry = builtin_registry().unwrap();
        assert_eq!(
            registry.resolve("Accordion / Item").unwrap().component(),
            "Accordion"
        );
        assert_eq!(registry.resolve("tooltip").unwrap().component(), "Tooltip");
        assert!(registry.resolve("Banner").is_none());
    }

    #[test]
    fn builtin_accordion_end_to_end() {
        let linter = Linter::new(builtin_registry().unwrap());
        let accordion = Node::container(
            ContainerKind::ComponentSet,
            "Accordion",
            vec![Node::container(
                ContainerKind::Component,
                "State=Closed",
                vec![Node::frame(
                    "Accordion Item",
                    vec![
                        Node::frame(
                            "Header",
                            vec![Node::frame("Trigger", vec![Node::frame("Icon", vec![])])],
                        ),
                        Node::frame("Panel", vec![]),
                    ],
                )],
            )],
        );

        let report = linter.lint_selection(Some(&accordion));
        assert_eq!(report.base_component.as_deref(), Some("Accordion"));

        let item = &report.results[0];
        assert_eq!(item.status, LintStatus::Rename);
        assert_eq!(item.expected_part, "Item");
        assert_eq!(item.found_name.as_deref(), Some("Accordion Item"));

        let icon = report
            .results
            .iter()
            .find(|r| r.expected_part == "ChevronIcon")
            .unwrap();
        assert_eq!(icon.status, LintStatus::Rename);
        assert_eq!(icon.parent_part.as_deref(), Some("Trigger"));
        assert!(report.results.iter().all(|r| r.status != LintStatus::Missing));
    }
}
