//! Prereqs CLI - course dependents from the command line.
//!
//! Parses a plain-text course catalog and lists every course that
//! transitively requires a given course.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use prereqs::{MatchMode, Settings, TraversalMode};
use tracing_subscriber::EnvFilter;

mod cli;

/// Prereqs: course prerequisite graphs and dependents queries.
#[derive(Parser)]
#[command(name = "prereqs")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Settings file (YAML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every course that transitively requires a course
    Dependents {
        /// Course abbreviation (e.g., "MATH 124")
        course: String,

        /// Catalog file to parse
        #[arg(long)]
        catalog: PathBuf,

        /// Write the sorted result to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// How prerequisite text is matched against abbreviations
        #[arg(long = "match", value_enum)]
        match_mode: Option<MatchMode>,

        /// Traversal used to collect dependents
        #[arg(long, value_enum)]
        traversal: Option<TraversalMode>,

        /// Fail on the first malformed catalog block
        #[arg(long)]
        strict: bool,

        /// Print the result as a JSON array
        #[arg(long, conflicts_with = "output")]
        json: bool,
    },

    /// Parse a catalog and report what was found
    Check {
        /// Catalog file to parse
        #[arg(long)]
        catalog: PathBuf,

        /// How prerequisite text is matched against abbreviations
        #[arg(long = "match", value_enum)]
        match_mode: Option<MatchMode>,

        /// Fail on the first malformed catalog block
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let base = match cli.config.as_deref().map(Settings::load).transpose() {
        Ok(settings) => settings.unwrap_or_default(),
        Err(e) => return report(&e),
    };

    let result = match cli.command {
        Commands::Dependents {
            course,
            catalog,
            output,
            match_mode,
            traversal,
            strict,
            json,
        } => {
            let settings = base.with_overrides(match_mode, traversal, strict);
            cli::dependents::run(&course, &catalog, output.as_deref(), settings, json)
        }
        Commands::Check {
            catalog,
            match_mode,
            strict,
        } => {
            let settings = base.with_overrides(match_mode, None, strict);
            cli::check::run(&catalog, settings)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e),
    }
}

/// Print an error and its cause chain to stderr.
fn report(e: &prereqs::Error) -> ExitCode {
    eprintln!("{}: {e}", "error".red().bold());
    let mut source = std::error::Error::source(e);
    while let Some(cause) = source {
        eprintln!("  {}: {cause}", "caused by".dimmed());
        source = std::error::Error::source(cause);
    }
    ExitCode::FAILURE
}
