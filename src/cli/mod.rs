//! Command-line interface for open-airport-config
//!
//! Provides `show`, `get`, `check`, `summary` and `list` subcommands over the
//! composed configuration.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod check;
mod get;
mod info;
mod list;
mod show;
mod utils;

/// Compose agency, app, and environment configuration for the airport console
#[derive(Parser)]
#[command(name = "open-airport-config")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the merged configuration
    Show(show::ShowArgs),

    /// Print one value by dotted key path
    Get(get::GetArgs),

    /// Validate override documents against the base documents
    Check(check::CheckArgs),

    /// Print a typed summary of the composed configuration
    Summary(info::SummaryArgs),

    /// List registered agencies, apps and environments
    List,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Show(args) => show::run(args),
        Commands::Get(args) => get::run(args),
        Commands::Check(args) => check::run(args),
        Commands::Summary(args) => info::run(args),
        Commands::List => list::run(),
    }
}
