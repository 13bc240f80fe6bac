//! MCP server command implementation.
//!
//! Starts an MCP server on stdio for AI assistant integration.

use tracing::info;

use crate::error::{CliError, CliResult};

/// Start the MCP server.
///
/// This runs an MCP server on stdio that AI assistants like Claude
/// can use to record and query transactions. The call blocks until
/// the client disconnects.
pub async fn serve() -> CliResult<String> {
    info!("Starting MCP server on stdio");

    fintrack_mcp::run_server()
        .await
        .map_err(|e| CliError::server(format!("MCP server error: {}", e)))?;

    // This line is only reached if the server exits cleanly
    Ok("MCP server stopped.".to_string())
}
