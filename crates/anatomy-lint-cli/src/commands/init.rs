//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# anatomy-lint configuration

# Lowest status that fails `anatomy-lint check`: "missing", "rename" or "correct"
fail_on = "missing"

# Use the built-in Base UI rule sets
builtin = true

[analyzer]
# Glob patterns to exclude when a directory is checked
exclude = [
    "**/node_modules/**",
    "**/target/**",
]

# Disable a built-in rule set by component name
# [rules.Toast]
# enabled = false

# Project rule sets are checked before the built-in ones.
# [[components]]
# component = "Banner"
# matches = ["Banner", "Announcement"]
# ignored = ["Decoration"]
#
# [[components.parts]]
# name = "Title"
# required = true
#
# [[components.parts]]
# name = "Dismiss"
# parent = "Title"
# aliases = ["Close", "X"]
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    write_config(Path::new("anatomy-lint.toml"), force)?;

    println!("Created anatomy-lint.toml");
    println!("\nNext steps:");
    println!("  1. Edit anatomy-lint.toml to add project rule sets");
    println!("  2. Run: anatomy-lint check designs/");

    Ok(())
}

fn write_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;
    Ok(())
}
