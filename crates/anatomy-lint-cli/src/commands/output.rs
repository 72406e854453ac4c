//! Shared output formatting for lint reports.

use anatomy_lint_core::{LintReport, LintResult, Severity};
use anyhow::Result;
use serde::Serialize;
use std::fmt::Write;
use std::path::PathBuf;

use crate::OutputFormat;

/// Lint report for one document.
#[derive(Debug, Serialize)]
pub struct FileReport {
    /// Document path.
    pub file: PathBuf,
    /// Report for the selected node.
    #[serde(flatten)]
    pub report: LintReport,
}

/// Print lint reports in the specified format.
pub fn print(reports: &[FileReport], format: OutputFormat) -> Result<()> {
    let rendered = match format {
        OutputFormat::Text => render_text(reports, true),
        OutputFormat::Json => render_json(reports)?,
        OutputFormat::Compact => render_compact(reports),
    };
    print!("{rendered}");
    Ok(())
}

/// Renders reports as human-readable text, optionally with ANSI colors.
pub fn render_text(reports: &[FileReport], color: bool) -> String {
    let mut out = String::new();
    let (mut missing, mut rename, mut correct) = (0, 0, 0);

    for FileReport { file, report } in reports {
        if let Some(message) = &report.message {
            let _ = writeln!(out, "{}: {message}\n", file.display());
            continue;
        }

        let component = report.component.as_deref().unwrap_or_default();
        let base = report.base_component.as_deref().unwrap_or_default();
        let _ = writeln!(out, "{component} ({base}) at {}", file.display());
        for result in &report.results {
            let _ = writeln!(out, "  {}: {}", status_label(result, color), result.message());
        }
        out.push('\n');

        let (m, r, c) = report.count_by_status();
        missing += m;
        rename += r;
        correct += c;
    }

    let summary = format!(
        "Found {missing} missing, {rename} rename, {correct} correct in {} file(s)",
        reports.len()
    );
    if color {
        let summary_color = if missing > 0 {
            "\x1b[31m"
        } else if rename > 0 {
            "\x1b[33m"
        } else {
            "\x1b[32m"
        };
        let _ = writeln!(out, "{summary_color}{summary}\x1b[0m");
    } else {
        let _ = writeln!(out, "{summary}");
    }
    out
}

fn status_label(result: &LintResult, color: bool) -> String {
    let severity = result.status.severity();
    let label = format!("{severity}[{}] {}", result.status, result.expected_part);
    if !color {
        return label;
    }
    let code = match severity {
        Severity::Error => "\x1b[31m",
        Severity::Warning => "\x1b[33m",
        Severity::Info => "\x1b[34m",
    };
    format!("{code}{label}\x1b[0m")
}

/// Renders reports as a JSON array of message payloads.
pub fn render_json(reports: &[FileReport]) -> Result<String> {
    Ok(serde_json::to_string_pretty(reports)? + "\n")
}

/// Renders one line per diagnostic.
pub fn render_compact(reports: &[FileReport]) -> String {
    let mut out = String::new();
    for FileReport { file, report } in reports {
        if let Some(message) = &report.message {
            let _ = writeln!(out, "{}: info {message}", file.display());
        }
        for result in &report.results {
            let _ = writeln!(
                out,
                "{}: {} [{}] {}",
                file.display(),
                result.status.severity(),
                result.expected_part,
                result.message(),
            );
        }
    }
    out
}
