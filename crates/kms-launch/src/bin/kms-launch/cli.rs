//! CLI definitions for kms-launch.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Debug, Parser)]
#[command(
    name = "kms-launch",
    version,
    about = "Build and submit KMS-Tools launch requests",
    infer_subcommands = true,
    after_help = "Examples:\n  kms-launch schema launcher\n  kms-launch encode launcher --set Exec=tool.exe --flag Socket.KeepALive\n  kms-launch launch launcher --seed saved.txt --detach --dry-run"
)]
pub struct Cli {
    /// Show debug logging.
    #[arg(long, short, global = true)]
    pub verbose: bool,
    /// Configuration file (defaults to ./kms-launch.toml when present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Back-end base URL, e.g. http://127.0.0.1:8080.
    #[arg(long, global = true)]
    pub endpoint: Option<String>,
    /// Log level (trace, debug, info, warn, error, off).
    #[arg(long, global = true)]
    pub log_level: Option<String>,
    #[command(subcommand)]
    pub command: Command,
}

/// Field edits, applied in the order: seed, `--set`, `--flag`, `--push`, `--kms`.
#[derive(Debug, Clone, Default, Args)]
pub struct EditArgs {
    /// Set a scalar field (NAME=VALUE).
    #[arg(long = "set", value_name = "NAME=VALUE")]
    pub set: Vec<String>,
    /// Turn a flag on.
    #[arg(long = "flag", value_name = "NAME")]
    pub flag: Vec<String>,
    /// Append to a list field (NAME=VALUE).
    #[arg(long = "push", value_name = "NAME=VALUE")]
    pub push: Vec<String>,
    /// Edit addressed to the KMS Arguments group (NAME, NAME=VALUE or NAME+=VALUE).
    #[arg(long = "kms", value_name = "EDIT")]
    pub kms: Vec<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the pages.
    Pages,
    /// Show the field table of a page.
    Schema {
        /// Page name, or `kms` / `parameters` for the shared groups.
        page: String,
    },
    /// Print the token sequence for a set of edits.
    Encode {
        page: String,
        #[command(flatten)]
        edits: EditArgs,
    },
    /// Recover the form state from saved tokens.
    Extract {
        page: String,
        /// Read tokens from a file (one per line, or a JSON array).
        #[arg(long = "from", conflicts_with = "tokens")]
        from: Option<PathBuf>,
        /// Tokens given inline.
        #[arg(allow_hyphen_values = true)]
        tokens: Vec<String>,
    },
    /// Build the launch request and submit it.
    Launch {
        page: String,
        #[command(flatten)]
        edits: EditArgs,
        /// Pre-populate the form from saved tokens.
        #[arg(long)]
        seed: Option<PathBuf>,
        /// Do not wait for the launched process.
        #[arg(long)]
        detach: bool,
        /// Stop the back-end after the launch.
        #[arg(long)]
        exit: bool,
        /// Working directory for the launched process.
        #[arg(long)]
        working_directory: Option<String>,
        /// Print the payload instead of sending it.
        #[arg(long)]
        dry_run: bool,
    },
    /// Ask the back-end to shut down.
    Exit,
    /// Generate shell completions.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
