//! # anatomy-lint-rules
//!
//! Built-in anatomy rule sets for the Base UI component library.
//!
//! Each family lives in its own TOML file under `rules/` and is embedded at
//! compile time. The files use the same `[[components]]` format as project
//! configuration, so a project can override any of them.
//!
//! ## Usage
//!
//! ```ignore
//! use anatomy_lint_core::Linter;
//! use anatomy_lint_rules::builtin_registry;
//!
//! let linter = Linter::new(builtin_registry()?);
//! let report = linter.lint_selection(Some(&node));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builtin;

pub use builtin::{builtin_registry, builtin_rules, supported_components};

/// Re-export core types for convenience.
pub use anatomy_lint_core::{ComponentRules, LintStatus, Registry};
