//! Command-line interface for the fintrack transaction ledger.
//!
//! This crate provides the `fintrack` binary. It includes commands for:
//!
//! - **Serving**: Run the MCP server on stdio for AI assistant integration
//! - **Categories**: List the categories a transaction can use
//!
//! # Quick Start
//!
//! ```bash
//! # Start the MCP server
//! fintrack serve
//!
//! # See the available categories
//! fintrack categories
//!
//! # Same list as JSON
//! fintrack categories --format json
//! ```
//!
//! # Output Formats
//!
//! The `categories` command supports `--format` for output control:
//!
//! - `human` (default): plain text, one name per line
//! - `json`: machine-readable JSON
//!
//! # Logging
//!
//! Diagnostics go to stderr so stdout stays reserved for the MCP protocol
//! stream. Enable with `--verbose` or the `RUST_LOG` env var.

pub mod cli;
pub mod commands;
pub mod error;

// Re-export main types
pub use cli::{Cli, Commands, OutputFormat};
pub use error::{CliError, CliResult};
