//! Declarative anatomy rules driven by TOML.
//!
//! Built-in rule data and project configuration use the same format and go
//! through the same validation.
//!
//! # Architecture
//!
//! ```text
//! TOML text
//!   ↓ serde (DTO layer)
//! config_dto types
//!   ↓ validate + convert
//! Vec<ComponentRules> (pure domain model)
//!   ↓ Registry
//! resolve(family) -> &ComponentRules
//! ```

use miette::Diagnostic;

use crate::rules::ComponentRules;

pub mod config_dto;
pub mod loader;

/// Errors from parsing TOML and loading rule sets.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum LoadRulesError {
    /// TOML deserialization failed.
    #[error("{origin}: TOML parse error: {source}")]
    #[diagnostic(
        code(anatomy_lint::rules::parse),
        help("rule sets are `[[components]]` tables with `[[components.parts]]` entries")
    )]
    Toml {
        /// Where the TOML came from (file path or built-in name).
        origin: String,
        /// The parse error.
        source: toml::de::Error,
    },

    /// Domain model validation failed.
    #[error("{origin}: {source}")]
    #[diagnostic(
        code(anatomy_lint::rules::invalid),
        help("every `parent` must name another part of the same component")
    )]
    Load {
        /// Where the TOML came from (file path or built-in name).
        origin: String,
        /// The validation error.
        source: loader::LoadError,
    },
}

/// Parses TOML content and returns its validated rule sets in file order.
///
/// Returns `Ok(vec![])` if no `[[components]]` are present.
///
/// # Errors
///
/// Returns an error if TOML parsing or model validation fails.
pub fn load_rules_from_toml(
    origin: &str,
    content: &str,
) -> Result<Vec<ComponentRules>, LoadRulesError> {
    let dto: config_dto::RuleFileDto =
        toml::from_str(content).map_err(|source| LoadRulesError::Toml {
            origin: origin.to_string(),
            source,
        })?;
    loader::load(dto).map_err(|source| LoadRulesError::Load {
        origin: origin.to_string(),
        source,
    })
}
