//! CLI argument definitions for buildlint.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "buildlint")]
#[command(version)]
#[command(about = "Check Dockerfiles for production image anti-patterns", long_about = None)]
#[command(
    after_help = "EXAMPLES:\n    buildlint check                      Lint ./Dockerfile\n    buildlint check services/*/Dockerfile Lint several manifests\n    cat Dockerfile | buildlint check -    Lint from stdin\n    buildlint rules                      Show the active rules"
)]
pub struct Cli {
    /// Suppress all non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Emit debug tracing on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Read configuration from this file (layered over global and project config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Lint one or more manifests
    ///
    /// Exits 0 when every manifest passes, 1 when any rule fired, and 2 when a
    /// manifest or the configuration could not be read.
    Check {
        /// Manifest paths or glob patterns; '-' reads stdin (default: ./Dockerfile)
        #[arg(value_name = "PATH")]
        paths: Vec<String>,
        /// Output format (text or json)
        #[arg(short, long)]
        format: Option<String>,
        /// Skip a rule by name (can be specified multiple times)
        #[arg(long, value_name = "RULE")]
        disable: Vec<String>,
    },
    /// List the active rules in evaluation order
    Rules,
    /// Print the bundled sample Dockerfile
    Template {
        /// Lint the template instead of printing it
        #[arg(long)]
        check: bool,
        /// Output format for --check (text or json)
        #[arg(short, long, requires = "check")]
        format: Option<String>,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Show version information (with --verbose, build details too)
    Version,
}
