//! DTO → Domain model conversion with validation.

use super::config_dto::{ComponentDto, RuleFileDto};
use crate::rules::{ComponentRules, ModelError, PartRule};

/// Errors during DTO → Domain conversion.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// A rule set violates one or more model invariants.
    #[error("{context}:\n{}", format_errors(.errors))]
    Invalid {
        /// Where the error occurred (e.g., "components[3] (Tabs)").
        context: String,
        /// The underlying model errors.
        errors: Vec<ModelError>,
    },
}

fn format_errors(errors: &[ModelError]) -> String {
    errors
        .iter()
        .map(|e| format!("  - {e}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Converts a `RuleFileDto` to validated rule sets, keeping file order.
///
/// # Errors
///
/// Returns the first rule set that fails validation.
pub fn load(dto: RuleFileDto) -> Result<Vec<ComponentRules>, LoadError> {
    dto.components
        .into_iter()
        .enumerate()
        .map(|(i, c)| convert_component(c, i))
        .collect()
}

fn convert_component(dto: ComponentDto, index: usize) -> Result<ComponentRules, LoadError> {
    let context = format!("components[{index}] ({})", dto.component);

    let parts = dto
        .parts
        .into_iter()
        .map(|p| {
            (
                p.name,
                PartRule {
                    required: p.required,
                    parent: p.parent,
                    aliases: p.aliases,
                },
            )
        })
        .collect();

    ComponentRules::new(dto.component, dto.matches, parts, dto.ignored)
        .map_err(|errors| LoadError::Invalid { context, errors })
}
