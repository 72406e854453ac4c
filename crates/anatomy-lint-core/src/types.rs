//! Core types for lint diagnostics and reports.

use crate::node::{Node, NodePath};
use serde::{Deserialize, Serialize};

/// Severity level of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message, does not fail lint.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Outcome for one expected part.
///
/// Variants are declared in report order: missing parts sort first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LintStatus {
    /// A required part was not found.
    Missing,
    /// The part was found under an alias.
    Rename,
    /// The part was found under its canonical name.
    Correct,
}

impl LintStatus {
    /// Parses a status name (`missing`, `rename`, `correct`).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "missing" => Some(Self::Missing),
            "rename" => Some(Self::Rename),
            "correct" => Some(Self::Correct),
            _ => None,
        }
    }

    /// Severity used for exit status and colouring.
    #[must_use]
    pub fn severity(self) -> Severity {
        match self {
            Self::Missing => Severity::Error,
            Self::Rename => Severity::Warning,
            Self::Correct => Severity::Info,
        }
    }
}

impl std::fmt::Display for LintStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing => write!(f, "missing"),
            Self::Rename => write!(f, "rename"),
            Self::Correct => write!(f, "correct"),
        }
    }
}

/// An owned reference to a document node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRef {
    /// Address of the node from the linted root.
    pub path: NodePath,
    /// Host id, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name at lint time.
    pub name: String,
}

impl NodeRef {
    /// Captures a node at `path`.
    #[must_use]
    pub fn new(path: NodePath, node: &Node) -> Self {
        Self {
            path,
            id: node.id().map(String::from),
            name: node.name().to_string(),
        }
    }
}

/// Diagnostic for one expected part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LintResult {
    /// Canonical name of the part.
    pub expected_part: String,
    /// Outcome.
    pub status: LintStatus,
    /// Current name of the representative node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub found_name: Option<String>,
    /// Canonical name to rename to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_name: Option<String>,
    /// Human-readable fix hint for missing parts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    /// Representative node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node: Option<NodeRef>,
    /// Every node the diagnostic covers (all variants needing a rename).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<NodeRef>,
    /// Declared parent part.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_part: Option<String>,
    /// Instances already named correctly when others need a rename.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub correct_count: usize,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_zero(n: &usize) -> bool {
    *n == 0
}

impl LintResult {
    /// A required part that was not found.
    #[must_use]
    pub fn missing(part: impl Into<String>, parent: Option<&str>) -> Self {
        let part = part.into();
        let suggestion = match parent {
            Some(parent) => format!("Add a frame named \"{part}\" inside \"{parent}\""),
            None => format!("Add a frame named \"{part}\""),
        };
        Self {
            expected_part: part,
            status: LintStatus::Missing,
            found_name: None,
            suggested_name: None,
            suggestion: Some(suggestion),
            node: None,
            nodes: Vec::new(),
            parent_part: parent.map(String::from),
            correct_count: 0,
        }
    }

    /// A part found only under its canonical name.
    #[must_use]
    pub fn correct(part: impl Into<String>, parent: Option<&str>, node: NodeRef) -> Self {
        Self {
            expected_part: part.into(),
            status: LintStatus::Correct,
            found_name: Some(node.name.clone()),
            suggested_name: None,
            suggestion: None,
            node: Some(node),
            nodes: Vec::new(),
            parent_part: parent.map(String::from),
            correct_count: 0,
        }
    }

    /// A part found under an alias in one or more nodes.
    ///
    /// Returns `None` when `nodes` is empty.
    #[must_use]
    pub fn rename(part: impl Into<String>, parent: Option<&str>, nodes: Vec<NodeRef>) -> Option<Self> {
        let first = nodes.first()?.clone();
        let part = part.into();
        Some(Self {
            found_name: Some(first.name.clone()),
            suggested_name: Some(part.clone()),
            expected_part: part,
            status: LintStatus::Rename,
            suggestion: None,
            node: Some(first),
            nodes,
            parent_part: parent.map(String::from),
            correct_count: 0,
        })
    }

    /// Human-readable message for this diagnostic.
    #[must_use]
    pub fn message(&self) -> String {
        match self.status {
            LintStatus::Missing => self
                .suggestion
                .clone()
                .unwrap_or_else(|| format!("Missing part \"{}\"", self.expected_part)),
            LintStatus::Rename => {
                use std::fmt::Write;
                let found = self.found_name.as_deref().unwrap_or_default();
                let count = self.nodes.len().max(1);
                let mut msg = format!("Rename \"{found}\" to \"{}\"", self.expected_part);
                if count > 1 {
                    let _ = write!(msg, " ({count} nodes)");
                }
                msg
            }
            LintStatus::Correct => format!("\"{}\" is correct", self.expected_part),
        }
    }
}

/// Result of linting one selection.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LintReport {
    /// Display name of the selected node, or `None` without a selection.
    pub component: Option<String>,
    /// Name of the rule set that was applied.
    #[serde(rename = "baseUIComponent", default, skip_serializing_if = "Option::is_none")]
    pub base_component: Option<String>,
    /// Diagnostics, missing first, then rename, then correct.
    pub results: Vec<LintResult>,
    /// Explanation when nothing could be linted.
    pub message: Option<String>,
}

impl LintReport {
    /// Report for an empty selection.
    #[must_use]
    pub fn no_selection() -> Self {
        Self {
            message: Some("Select a component to lint".to_string()),
            ..Self::default()
        }
    }

    /// Report for a selection no rule set applies to.
    ///
    /// `component` is the selected node's name; the message names the
    /// `family` that failed to resolve.
    #[must_use]
    pub fn no_rules(component: impl Into<String>, family: &str) -> Self {
        Self {
            message: Some(format!("No Base UI rules found for \"{family}\"")),
            component: Some(component.into()),
            ..Self::default()
        }
    }

    /// Returns true if any diagnostic meets or exceeds `severity`.
    #[must_use]
    pub fn has_violations_at(&self, severity: Severity) -> bool {
        self.results
            .iter()
            .any(|r| r.status.severity() >= severity)
    }

    /// Counts diagnostics by status as `(missing, rename, correct)`.
    #[must_use]
    pub fn count_by_status(&self) -> (usize, usize, usize) {
        let count = |status: LintStatus| self.results.iter().filter(|r| r.status == status).count();
        (
            count(LintStatus::Missing),
            count(LintStatus::Rename),
            count(LintStatus::Correct),
        )
    }

    /// Returns diagnostics with the given status.
    #[must_use]
    pub fn by_status(&self, status: LintStatus) -> Vec<&LintResult> {
        self.results.iter().filter(|r| r.status == status).collect()
    }
}
