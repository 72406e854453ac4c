//! # anatomy-lint-core
//!
//! Core engine for linting design-tool component structures against an
//! expected anatomy.
//!
//! This crate provides:
//!
//! - [`ComponentRules`] and [`PartRule`], the validated anatomy model
//! - [`Registry`] for resolving a component family to its rule set
//! - [`find_parts`] and [`lint`], the tree matcher and diagnostic reporter
//! - [`apply_fixes`] for renaming aliased nodes to canonical part names
//! - [`Document`] for reading host JSON documents
//!
//! ## Example
//!
//! ```ignore
//! use anatomy_lint_core::{Linter, Registry, Document};
//!
//! let linter = Linter::new(Registry::new(rules));
//! let doc = Document::from_file("accordion.json".as_ref())?;
//! let report = linter.lint_selection(Some(doc.root()));
//! for result in &report.results {
//!     println!("{} {}", result.status, result.message());
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod document;
mod fix;
mod linter;
mod matcher;
mod node;
mod normalize;
mod registry;
mod report;
mod rules;
mod types;

/// Declarative TOML rule loading.
pub mod declarative;

pub use config::{AnalyzerConfig, Config, ConfigError, RuleConfig};
pub use document::{Document, DocumentError};
pub use fix::{apply_fixes, fix_summary, plan_fixes, Rename};
pub use linter::{FixOutcome, Linter};
pub use matcher::{find_parts, FoundPart};
pub use node::{Container, ContainerKind, Leaf, Node, NodePath};
pub use normalize::{normalize_family, normalize_name};
pub use registry::Registry;
pub use report::lint;
pub use rules::{match_part, ComponentRules, ModelError, NameMatch, PartRule};
pub use types::{LintReport, LintResult, LintStatus, NodeRef, Severity};
