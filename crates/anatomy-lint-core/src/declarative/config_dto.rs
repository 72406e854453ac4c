//! TOML deserialization types (DTO layer).
//!
//! These types exist solely for serde deserialization.
//! They are converted to domain model types via the loader.

use serde::Deserialize;

/// Raw TOML representation of anatomy rule sets.
///
/// Shares the file with the base `Config`, so unknown top-level keys are
/// accepted here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuleFileDto {
    /// Rule sets in priority order.
    #[serde(rename = "components", default)]
    pub components: Vec<ComponentDto>,
}

/// TOML representation of one component rule set.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComponentDto {
    /// Component display name (e.g., "Accordion").
    pub component: String,
    /// Family names that select this rule set.
    pub matches: Vec<String>,
    /// Node names skipped together with their subtree.
    #[serde(default)]
    pub ignored: Vec<String>,
    /// Expected parts in declaration order.
    #[serde(default)]
    pub parts: Vec<PartDto>,
}

/// TOML representation of one expected part.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartDto {
    /// Canonical part name.
    pub name: String,
    /// Whether absence is reported (default: false).
    #[serde(default)]
    pub required: bool,
    /// Canonical name of the containing part.
    #[serde(default)]
    pub parent: Option<String>,
    /// Names to be renamed to `name`.
    #[serde(default)]
    pub aliases: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_empty() {
        let dto: RuleFileDto = toml::from_str("").unwrap();
        assert!(dto.components.is_empty());
    }

    #[test]
    fn deserialize_component_with_parts() {
        let toml_str = r#"
fail_on = "missing"

[[components]]
component = "Accordion"
matches = ["Accordion"]
ignored = ["Helper Text"]

[[components.parts]]
name = "Root"
required = true

[[components.parts]]
name = "Trigger"
parent = "Root"
aliases = ["Header"]
"#;
        let dto: RuleFileDto = toml::from_str(toml_str).unwrap();
        assert_eq!(dto.components.len(), 1);
        let accordion = &dto.components[0];
        assert_eq!(accordion.parts.len(), 2);
        assert!(accordion.parts[0].required);
        assert!(!accordion.parts[1].required);
        assert_eq!(accordion.parts[1].parent.as_deref(), Some("Root"));
        assert_eq!(accordion.parts[1].aliases, vec!["Header".to_string()]);
    }

    #[test]
    fn rejects_unknown_part_fields() {
        let toml_str = r#"
[[components]]
component = "Tabs"
matches = ["Tabs"]

[[components.parts]]
name = "List"
requried = true
"#;
        assert!(toml::from_str::<RuleFileDto>(toml_str).is_err());
    }
}
