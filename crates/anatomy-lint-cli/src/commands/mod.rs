//! Subcommand implementations.

pub mod check;
pub mod fix;
pub mod init;
pub mod list_rules;
pub mod output;

use anatomy_lint_core::{AnalyzerConfig, Config, Document, LintReport, Linter, Node, NodePath, Registry};
use anyhow::{anyhow, Result};
use std::path::{Path, PathBuf};

/// Loads the configuration that applies to `target`.
pub(crate) fn load_config(target: &Path, explicit: Option<&Path>) -> Result<Config> {
    let resolved = crate::config_resolver::resolve(target, explicit)?;
    match resolved.source.path() {
        Some(path) => tracing::info!("Using config: {}", path.display()),
        None => tracing::debug!("No config found for {}, using defaults", target.display()),
    }
    Ok(resolved.config)
}

/// Builds the rule registry for `config`.
///
/// Project rule sets take priority over the built-in ones; disabled rule sets
/// are dropped from both.
pub(crate) fn build_registry(config: &Config) -> Result<Registry> {
    let project = config
        .load_rules()
        .map_err(|e| anyhow!("{:?}", miette::Report::new(e)))?;

    let builtin = if config.builtin {
        anatomy_lint_rules::builtin_registry()
            .map_err(|e| anyhow!("{:?}", miette::Report::new(e)))?
    } else {
        Registry::default()
    };

    let registry = builtin
        .with_priority(project)
        .without(|component| !config.is_rule_enabled(component));
    tracing::debug!("Registered {} rule sets", registry.len());
    Ok(registry)
}

/// Builds a linter for `config`.
pub(crate) fn build_linter(config: &Config) -> Result<Linter> {
    build_registry(config).map(Linter::new)
}

/// Lints the selected node of `doc`.
///
/// A selector that matches nothing is an empty selection. Returns the path of
/// the linted node alongside the report.
pub(crate) fn lint_document(
    linter: &Linter,
    doc: &Document,
    node: Option<&str>,
    component: Option<&str>,
) -> (Option<NodePath>, LintReport) {
    match doc.select(node) {
        Some((path, selected)) => (Some(path), lint_node(linter, selected, component)),
        None => (None, linter.lint_selection(None)),
    }
}

fn lint_node(linter: &Linter, node: &Node, component: Option<&str>) -> LintReport {
    match component {
        Some(family) => linter.lint_as(node, family),
        None => linter.lint_selection(Some(node)),
    }
}

/// Finds the documents to lint under `root`.
///
/// A file is returned as-is. A directory is walked for `*.json` files,
/// respecting `.gitignore` and the configured excludes.
pub(crate) fn discover_documents(root: &Path, analyzer: &AnalyzerConfig) -> Result<Vec<PathBuf>> {
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }

    let mut builder = ignore::WalkBuilder::new(root);
    builder.hidden(false).git_ignore(true);

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }

        if analyzer.should_exclude(path) {
            tracing::debug!("Excluding: {}", path.display());
            continue;
        }

        files.push(path.to_path_buf());
    }

    files.sort();
    Ok(files)
}
