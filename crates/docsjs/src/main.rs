//! docsjs CLI.
//!
//! Provides commands for:
//! - `serve`: Start the JSON API server
//! - `routes`: Print the flattened page list
//! - `check`: Resolve every routed document and report failures

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, RoutesArgs, ServeArgs};
use error::CliError;
use output::Output;

/// Application version from Cargo.toml.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// docsjs - Spanish documentation for JavaScript technologies.
#[derive(Parser)]
#[command(name = "docsjs", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the documentation API server.
    Serve(ServeArgs),
    /// Print the flattened page list.
    Routes(RoutesArgs),
    /// Compile every routed document and report failures.
    Check(CheckArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = match &cli.command {
        Commands::Serve(args) => args.verbose,
        Commands::Check(args) => args.verbose,
        Commands::Routes(_) => false,
    };

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Serve(args) => tokio::runtime::Runtime::new()
            .map_err(CliError::from)
            .and_then(|rt| rt.block_on(args.execute(VERSION))),
        Commands::Routes(args) => args.execute(),
        Commands::Check(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
