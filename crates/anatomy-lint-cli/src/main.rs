//! anatomy-lint CLI tool.
//!
//! Usage:
//! ```bash
//! anatomy-lint check [OPTIONS] [PATH]
//! anatomy-lint fix [OPTIONS] <PATH>
//! anatomy-lint list-rules
//! anatomy-lint init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Component anatomy linter for design documents
#[derive(Parser)]
#[command(name = "anatomy-lint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "ANATOMY_LINT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lint component structures
    Check {
        /// Document or directory of documents (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Node to lint, by id or name (default: document root)
        #[arg(short, long)]
        node: Option<String>,

        /// Component family to lint as, instead of the node name
        #[arg(long)]
        component: Option<String>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Rename aliased nodes to their canonical part names
    Fix {
        /// Document to fix
        path: PathBuf,

        /// Node to fix, by id or name (default: document root)
        #[arg(short, long)]
        node: Option<String>,

        /// Component family to lint as, instead of the node name
        #[arg(long)]
        component: Option<String>,

        /// Print the renames without writing the document
        #[arg(long)]
        dry_run: bool,
    },

    /// List available rule sets
    ListRules,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for lint results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-diagnostic compact format.
    Compact,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Check {
            path,
            node,
            component,
            format,
        } => commands::check::run(
            &path,
            node.as_deref(),
            component.as_deref(),
            format,
            cli.config.as_deref(),
        ),
        Commands::Fix {
            path,
            node,
            component,
            dry_run,
        } => commands::fix::run(
            &path,
            node.as_deref(),
            component.as_deref(),
            dry_run,
            cli.config.as_deref(),
        ),
        Commands::ListRules => commands::list_rules::run(cli.config.as_deref()),
        Commands::Init { force } => commands::init::run(force),
    }
}
