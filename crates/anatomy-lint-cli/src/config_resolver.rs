//! Configuration lookup for a lint target.
//!
//! The target is a document or a directory of documents. Its configuration is
//! the first of:
//!
//! 1. `--config` flag (explicit path)
//! 2. `anatomy-lint.toml` or `.anatomy-lint.toml` in the target's directory or
//!    the nearest ancestor that has one
//! 3. `~/.anatomy-lint/config.toml` (global fallback)
//! 4. defaults

use anatomy_lint_core::Config;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Where the configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicitly specified via `--config` flag.
    Explicit(PathBuf),
    /// Found next to the target or in one of its ancestors.
    Project(PathBuf),
    /// Loaded from the global config directory.
    Global(PathBuf),
    /// No config found.
    Default,
}

impl ConfigSource {
    /// Returns the resolved path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }
}

/// A loaded configuration and where it came from.
#[derive(Debug)]
pub struct Resolved {
    /// Origin of the configuration.
    pub source: ConfigSource,
    /// The parsed configuration.
    pub config: Config,
}

const PROJECT_CONFIG_NAMES: &[&str] = &["anatomy-lint.toml", ".anatomy-lint.toml"];

const GLOBAL_CONFIG_NAME: &str = "config.toml";

/// Finds and loads the configuration for `target`.
///
/// # Errors
///
/// Returns an error if the chosen file cannot be read or parsed.
pub fn resolve(target: &Path, explicit: Option<&Path>) -> Result<Resolved> {
    resolve_inner(target, explicit, global_config_dir())
}

fn resolve_inner(
    target: &Path,
    explicit: Option<&Path>,
    global_dir: Option<PathBuf>,
) -> Result<Resolved> {
    let source = locate(target, explicit, global_dir);
    let config = match source.path() {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => Config::default(),
    };
    Ok(Resolved { source, config })
}

fn locate(target: &Path, explicit: Option<&Path>, global_dir: Option<PathBuf>) -> ConfigSource {
    if let Some(p) = explicit {
        return ConfigSource::Explicit(p.to_path_buf());
    }

    let start = search_root(target);
    for dir in start.ancestors() {
        if let Some(found) = PROJECT_CONFIG_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
        {
            tracing::debug!("Found project config: {}", found.display());
            return ConfigSource::Project(found);
        }
    }

    global_dir
        .map(|dir| dir.join(GLOBAL_CONFIG_NAME))
        .filter(|candidate| candidate.is_file())
        .map_or(ConfigSource::Default, ConfigSource::Global)
}

/// Directory the project search starts from: a document's folder, or the
/// target itself when it is a directory.
fn search_root(target: &Path) -> PathBuf {
    let dir = match target.parent() {
        Some(parent) if target.is_file() => parent,
        _ => target,
    };
    let dir = if dir.as_os_str().is_empty() { Path::new(".") } else { dir };
    std::fs::canonicalize(dir).unwrap_or_else(|_| dir.to_path_buf())
}

/// `$ANATOMY_LINT_CONFIG_DIR`, else `~/.anatomy-lint/`.
fn global_config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("ANATOMY_LINT_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }
    home::home_dir().map(|h| h.join(".anatomy-lint"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anatomy_lint_core::Severity;
    use std::fs;
    use tempfile::TempDir;

    /// `designs/` with a nested `designs/menus/menu.json` document.
    fn layout() -> (TempDir, PathBuf, PathBuf) {
        let tmp = TempDir::new().unwrap();
        let designs = tmp.path().join("designs");
        let menus = designs.join("menus");
        fs::create_dir_all(&menus).unwrap();
        let doc = menus.join("menu.json");
        fs::write(&doc, "{}").unwrap();
        (tmp, designs, doc)
    }

    #[test]
    fn document_uses_config_in_its_folder() {
        let (_tmp, designs, doc) = layout();
        let local = designs.join("menus").join("anatomy-lint.toml");
        fs::write(&local, "fail_on = \"rename\"\n").unwrap();

        let resolved = resolve_inner(&doc, None, None).unwrap();
        assert_eq!(resolved.source.path(), Some(std::fs::canonicalize(&local).unwrap().as_path()));
        assert_eq!(resolved.config.fail_on(), Severity::Warning);
    }

    #[test]
    fn nested_document_finds_ancestor_config() {
        let (_tmp, designs, doc) = layout();
        fs::write(designs.join(".anatomy-lint.toml"), "builtin = false\n").unwrap();

        let resolved = resolve_inner(&doc, None, None).unwrap();
        assert!(!resolved.config.builtin);
        assert!(resolved.source.path().unwrap().ends_with("designs/.anatomy-lint.toml"));
    }

    #[test]
    fn nearest_config_wins_over_outer_one() {
        let (_tmp, designs, doc) = layout();
        fs::write(designs.join("anatomy-lint.toml"), "builtin = false\n").unwrap();
        fs::write(designs.join("menus").join("anatomy-lint.toml"), "builtin = true\n").unwrap();

        assert!(resolve_inner(&doc, None, None).unwrap().config.builtin);
        assert!(!resolve_inner(&designs, None, None).unwrap().config.builtin);
    }

    #[test]
    fn directory_target_ignores_configs_below_it() {
        let (_tmp, designs, _doc) = layout();
        fs::write(designs.join("menus").join("anatomy-lint.toml"), "builtin = false\n").unwrap();

        let resolved = resolve_inner(&designs, None, None).unwrap();
        assert_eq!(resolved.source, ConfigSource::Default);
        assert!(resolved.config.builtin);
    }

    #[test]
    fn explicit_config_is_loaded_even_with_project_config() {
        let (tmp, designs, doc) = layout();
        fs::write(designs.join("anatomy-lint.toml"), "builtin = false\n").unwrap();
        let explicit = tmp.path().join("ci.toml");
        fs::write(&explicit, "fail_on = \"correct\"\n").unwrap();

        let resolved = resolve_inner(&doc, Some(&explicit), None).unwrap();
        assert_eq!(resolved.source, ConfigSource::Explicit(explicit));
        assert!(resolved.config.builtin);
        assert_eq!(resolved.config.fail_on(), Severity::Info);
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let (_tmp, _designs, doc) = layout();
        let err = resolve_inner(&doc, Some(Path::new("/nonexistent.toml")), None).unwrap_err();
        assert!(err.to_string().contains("/nonexistent.toml"));
    }

    #[test]
    fn invalid_project_config_names_the_file() {
        let (_tmp, designs, doc) = layout();
        fs::write(designs.join("anatomy-lint.toml"), "fail_on = \"fatal\"\n").unwrap();

        let err = resolve_inner(&doc, None, None).unwrap_err();
        assert!(err.to_string().contains("anatomy-lint.toml"));
    }

    #[test]
    fn global_config_applies_without_a_project_file() {
        let (_tmp, _designs, doc) = layout();
        let global = TempDir::new().unwrap();
        fs::write(global.path().join("config.toml"), "fail_on = \"rename\"\n").unwrap();

        let resolved = resolve_inner(&doc, None, Some(global.path().to_path_buf())).unwrap();
        assert_eq!(resolved.source, ConfigSource::Global(global.path().join("config.toml")));
        assert_eq!(resolved.config.fail_on(), Severity::Warning);
    }

    #[test]
    fn defaults_without_any_config() {
        let (_tmp, designs, _doc) = layout();
        let empty = TempDir::new().unwrap();

        let resolved = resolve_inner(&designs, None, Some(empty.path().to_path_buf())).unwrap();
        assert_eq!(resolved.source, ConfigSource::Default);
        assert!(resolved.config.builtin);
        assert_eq!(resolved.config.fail_on(), Severity::Error);
    }
}
