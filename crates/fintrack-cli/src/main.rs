//! Fintrack CLI binary entry point.

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use fintrack_cli::{
    cli::{Cli, Commands},
    commands,
    error::{CliError, CliResult},
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging based on --verbose flag or RUST_LOG env var
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if cli.verbose || has_rust_log {
        let filter = if cli.verbose {
            EnvFilter::from_default_env().add_directive("fintrack=debug".parse().unwrap())
        } else {
            EnvFilter::from_default_env()
        };
        // Logs go to stderr; stdout carries the MCP protocol stream
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .init();
    }

    // Run the command
    if let Err(e) = run(cli).await {
        print_error(&e);
        std::process::exit(e.exit_code());
    }
}

/// Print a user-friendly error message.
fn print_error(e: &CliError) {
    eprintln!("{}: {}", "Error".red().bold(), e);
}

async fn run(cli: Cli) -> CliResult<()> {
    // Dispatch command
    let output = match cli.command {
        Commands::Serve => commands::serve().await?,

        Commands::Categories { format } => commands::categories(format)?,
    };

    // Print output
    println!("{}", output);

    Ok(())
}
