//! Check command implementation.

use anyhow::{bail, Context, Result};
use anatomy_lint_core::Document;
use std::path::Path;

use super::output::FileReport;
use crate::OutputFormat;

/// Runs the check command.
pub fn run(
    path: &Path,
    node: Option<&str>,
    component: Option<&str>,
    format: OutputFormat,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = super::load_config(path, config_path)?;
    let linter = super::build_linter(&config)?;

    let files = super::discover_documents(path, &config.analyzer)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    if files.is_empty() {
        bail!("No documents found at {}", path.display());
    }

    tracing::info!(
        "Linting {} document(s) with {} rule sets",
        files.len(),
        linter.registry().len()
    );

    let mut reports = Vec::with_capacity(files.len());
    for file in files {
        let doc = Document::from_file(&file)
            .with_context(|| format!("Failed to load document: {}", file.display()))?;
        let (_, report) = super::lint_document(&linter, &doc, node, component);
        reports.push(FileReport { file, report });
    }

    super::output::print(&reports, format)?;

    let threshold = config.fail_on();
    if reports.iter().any(|r| r.report.has_violations_at(threshold)) {
        std::process::exit(1);
    }

    Ok(())
}
