//! Fix command implementation.

use anyhow::{Context, Result};
use anatomy_lint_core::{fix_summary, plan_fixes, Document};
use std::path::Path;

use super::output::FileReport;
use crate::OutputFormat;

/// Runs the fix command.
///
/// Lints the document, renames every aliased node in the selection and
/// writes the document back, then prints the re-linted report.
pub fn run(
    path: &Path,
    node: Option<&str>,
    component: Option<&str>,
    dry_run: bool,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = super::load_config(path, config_path)?;
    let linter = super::build_linter(&config)?;

    let mut doc = Document::from_file(path)
        .with_context(|| format!("Failed to load document: {}", path.display()))?;

    let (base, report) = super::lint_document(&linter, &doc, node, component);
    let Some(base) = base else {
        println!("{}", report.message.unwrap_or_default());
        return Ok(());
    };

    let renames = plan_fixes(&report.results);
    if dry_run {
        for rename in &renames {
            println!("{}: \"{}\" -> \"{}\"", rename.path.under(&base), rename.from, rename.to);
        }
        println!("Would fix {} node(s)", renames.len());
        return Ok(());
    }

    let renamed = doc.apply_renames(&base, &renames);
    if renamed > 0 {
        doc.write_to(path)
            .with_context(|| format!("Failed to write document: {}", path.display()))?;
    }
    println!("{}", fix_summary(renamed));

    let (_, after) = super::lint_document(&linter, &doc, node, component);
    super::output::print(
        &[FileReport {
            file: path.to_path_buf(),
            report: after,
        }],
        OutputFormat::Text,
    )
}
