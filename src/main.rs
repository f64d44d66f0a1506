//! CLI entry point and command dispatch for buildlint.

mod cli;
mod cmd;
mod exit_codes;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::Colorize;
use std::io;
use std::process::ExitCode;

use buildlint::logging;

use cli::{Cli, Commands};
use cmd::Session;

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(err) => {
            eprintln!("{} {:#}", "Error:".red(), err);
            ExitCode::from(exit_codes::ERROR as u8)
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let disable: &[String] = match &cli.command {
        Commands::Check { disable, .. } => disable,
        _ => &[],
    };

    match &cli.command {
        Commands::Completions { shell } => {
            let mut command = Cli::command();
            generate(*shell, &mut command, "buildlint", &mut io::stdout());
            return Ok(exit_codes::OK);
        }
        Commands::Version => return cmd_version(cli.verbose),
        _ => {}
    }

    let session = Session::load(cli.config.as_deref(), disable, cli.quiet)?;
    configure_color(cli.no_color || !session.config.output.color);

    match &cli.command {
        Commands::Check { paths, format, .. } => {
            cmd::check::cmd_check(&session, paths, format.as_deref())
        }
        Commands::Rules => cmd::rules::cmd_rules(&session),
        Commands::Template { check, format } => {
            cmd::template::cmd_template(&session, *check, format.as_deref())
        }
        Commands::Completions { .. } | Commands::Version => Ok(exit_codes::OK),
    }
}

/// Colors are off when disabled by flag or config, or when stdout is piped.
fn configure_color(disabled: bool) {
    if disabled || !atty::is(atty::Stream::Stdout) {
        colored::control::set_override(false);
    }
}

fn cmd_version(verbose: bool) -> Result<i32> {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    println!("buildlint {}", VERSION);

    if verbose {
        const GIT_SHA: &str = env!("BUILDLINT_GIT_SHA");
        const BUILD_DATE: &str = env!("BUILDLINT_BUILD_DATE");
        println!("commit: {}", GIT_SHA);
        println!("built: {}", BUILD_DATE);
    }

    Ok(exit_codes::OK)
}
