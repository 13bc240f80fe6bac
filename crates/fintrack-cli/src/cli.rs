//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};

/// Fintrack CLI.
#[derive(Parser, Debug)]
#[command(name = "fintrack")]
#[command(version)]
#[command(about = "Command-line interface for the fintrack transaction ledger")]
#[command(
    long_about = "Fintrack records income and expense transactions in an in-memory ledger\nand serves them to MCP clients over stdio.\n\nRun 'fintrack serve' to start the server."
)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Output format argument for clap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

/// CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the MCP server on stdio.
    ///
    /// Exposes the add_transaction, get_balance, get_category_breakdown,
    /// and list_transactions tools until the client disconnects.
    Serve,

    /// List the categories a transaction can use.
    Categories {
        /// Output format (human or json).
        #[arg(short, long, default_value = "human")]
        format: OutputFormat,
    },
}
