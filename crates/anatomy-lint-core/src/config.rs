//! Configuration types for anatomy-lint.

use crate::declarative::{load_rules_from_toml, LoadRulesError};
use crate::rules::ComponentRules;
use crate::types::{LintStatus, Severity};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Top-level configuration for anatomy-lint.
///
/// Project rule sets live in the same file as `[[components]]` tables and
/// are loaded separately through [`Config::load_rules`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Lowest diagnostic status that fails the run (default: "missing").
    #[serde(default)]
    pub fail_on: Option<String>,

    /// Whether the built-in Base UI rule sets are used (default: true).
    #[serde(default = "default_true")]
    pub builtin: bool,

    /// Document discovery configuration.
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// Per-rule-set configurations, keyed by component name.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,

    #[serde(skip)]
    source: Option<(String, String)>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fail_on: None,
            builtin: true,
            analyzer: AnalyzerConfig::default(),
            rules: HashMap::new(),
            source: None,
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let mut config = Self::parse(&content)?;
        config.source = Some((path.display().to_string(), content));
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid or `fail_on` is unknown.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        if let Some(value) = config.fail_on.as_deref() {
            if LintStatus::parse(value).is_none() {
                return Err(ConfigError::UnknownStatus {
                    value: value.to_string(),
                });
            }
        }
        config.source = Some(("anatomy-lint.toml".to_string(), content.to_string()));
        Ok(config)
    }

    /// Loads the project rule sets declared in this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a rule set is malformed.
    pub fn load_rules(&self) -> Result<Vec<ComponentRules>, LoadRulesError> {
        match &self.source {
            Some((origin, content)) => load_rules_from_toml(origin, content),
            None => Ok(Vec::new()),
        }
    }

    /// Severity at or above which a run fails.
    #[must_use]
    pub fn fail_on(&self) -> Severity {
        self.fail_on
            .as_deref()
            .and_then(LintStatus::parse)
            .unwrap_or(LintStatus::Missing)
            .severity()
    }

    /// Checks if a rule set is enabled.
    #[must_use]
    pub fn is_rule_enabled(&self, component: &str) -> bool {
        self.rules
            .get(component)
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }
}

/// Document discovery configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Glob patterns to exclude when a directory is linted.
    #[serde(default = "default_excludes")]
    pub exclude: Vec<String>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            exclude: default_excludes(),
        }
    }
}

impl AnalyzerConfig {
    /// Checks if a path should be excluded.
    #[must_use]
    pub fn should_exclude(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        for pattern in &self.exclude {
            if let Ok(glob_pattern) = glob::Pattern::new(pattern) {
                if glob_pattern.matches(&path_str) {
                    return true;
                }
            }

            // Also check as substring for patterns like "**/node_modules/**"
            let normalized_pattern = pattern.replace("**", "");
            if !normalized_pattern.is_empty()
                && normalized_pattern != "/"
                && path_str.contains(&normalized_pattern)
            {
                return true;
            }
        }

        false
    }
}

fn default_excludes() -> Vec<String> {
    vec!["**/node_modules/**".to_string(), "**/target/**".to_string()]
}

fn default_true() -> bool {
    true
}

/// Per-rule-set configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether this rule set is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// Unknown `fail_on` value.
    #[error("unknown fail_on `{value}`, expected: missing, rename, correct")]
    UnknownStatus {
        /// The invalid value.
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.builtin);
        assert!(config.rules.is_empty());
        assert_eq!(config.fail_on(), Severity::Error);
        assert!(config.load_rules().unwrap().is_empty());
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
fail_on = "rename"
builtin = false

[analyzer]
exclude = ["**/drafts/**"]

[rules.Tooltip]
enabled = false

[[components]]
component = "Banner"
matches = ["Banner"]

[[components.parts]]
name = "Root"
required = true
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        assert!(!config.builtin);
        assert_eq!(config.fail_on(), Severity::Warning);
        assert!(!config.is_rule_enabled("Tooltip"));
        assert!(config.is_rule_enabled("Accordion"));

        let rules = config.load_rules().unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].component(), "Banner");
    }

    #[test]
    fn test_unknown_fail_on() {
        let err = Config::parse("fail_on = \"fatal\"").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownStatus { .. }));
    }

    #[test]
    fn test_exclude_patterns() {
        let analyzer = AnalyzerConfig {
            exclude: vec!["**/drafts/**".to_string()],
        };
        assert!(analyzer.should_exclude(Path::new("/designs/drafts/menu.json")));
        assert!(!analyzer.should_exclude(Path::new("/designs/menu.json")));
        assert!(AnalyzerConfig::default().should_exclude(Path::new("/a/node_modules/x.json")));
    }
}
