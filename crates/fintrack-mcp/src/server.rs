//! MCP server implementation for fintrack.
//!
//! Uses the RMCP SDK to expose the transaction ledger to AI assistants.

use std::sync::Arc;

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    tool, tool_handler, tool_router, ErrorData as McpError,
};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use fintrack_ledger::{
    cents_to_dollars, dollars_to_cents, Category, Ledger, LedgerError, TransactionKind,
};

use crate::tools::{
    AddTransactionInput, BalanceOutput, CategoryBreakdownOutput, ListTransactionsInput,
    ListTransactionsOutput, TransactionRecord,
};

/// Build the error response for a rejected input.
///
/// Rejections are part of the conversation, not protocol failures: the
/// client gets the error message as tool output and can correct itself,
/// so these return `Ok(CallToolResult::error(..))` rather than `Err`.
fn rejection(error: &LedgerError) -> CallToolResult {
    CallToolResult::error(vec![Content::text(error.to_string())])
}

/// Serialize a tool output as pretty-printed JSON text content.
fn json_content<T: serde::Serialize>(output: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(output)
        .map_err(|e| McpError::internal_error(e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

/// fintrack MCP server.
///
/// Exposes the in-memory ledger through the `add_transaction`,
/// `get_balance`, `get_category_breakdown`, and `list_transactions`
/// tools. The ledger lives behind an `RwLock` so queries can run
/// concurrently while appends are serialized; each query sees a
/// consistent snapshot of the appends that completed before it.
#[derive(Clone)]
pub struct FintrackMcpServer {
    /// Shared ledger state.
    ledger: Arc<RwLock<Ledger>>,
    /// Tool router for MCP.
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl FintrackMcpServer {
    /// Create a server with a fresh, empty ledger.
    pub fn new() -> Self {
        Self::with_ledger(Arc::new(RwLock::new(Ledger::new())))
    }

    /// Create a server around an existing ledger handle.
    ///
    /// The caller keeps its clone of the handle, which is how tests
    /// observe state changes made through the tools.
    pub fn with_ledger(ledger: Arc<RwLock<Ledger>>) -> Self {
        Self {
            ledger,
            tool_router: Self::tool_router(),
        }
    }

    /// Record a transaction in the ledger.
    ///
    /// Parses the loosely-typed input, converts dollars to cents, and
    /// appends to the ledger. Any rejected value comes back as a tool
    /// error carrying the reason.
    #[tool(
        description = "Record a financial transaction. The type is \"income\" or \"expense\", the amount is in dollars and must be positive, and the category is one of: Income, Food, Transportation, Utilities, Entertainment, Other. Returns the recorded transaction with its assigned id and timestamp."
    )]
    pub async fn add_transaction(
        &self,
        Parameters(input): Parameters<AddTransactionInput>,
    ) -> Result<CallToolResult, McpError> {
        debug!(
            kind = %input.kind,
            amount = input.amount,
            category = %input.category,
            "Processing add_transaction request"
        );

        let kind = match input.kind.parse::<TransactionKind>() {
            Ok(kind) => kind,
            Err(e) => {
                warn!(kind = %input.kind, "Rejected transaction type");
                return Ok(rejection(&e));
            }
        };

        let category = match input.category.parse::<Category>() {
            Ok(category) => category,
            Err(e) => {
                warn!(category = %input.category, "Rejected category");
                return Ok(rejection(&e));
            }
        };

        let cents = match dollars_to_cents(input.amount) {
            Ok(cents) => cents,
            Err(e) => {
                warn!(amount = input.amount, "Rejected amount");
                return Ok(rejection(&e));
            }
        };

        let mut ledger = self.ledger.write().await;
        let tx = match ledger.add(kind, cents, category, input.description.unwrap_or_default()) {
            Ok(tx) => tx,
            Err(e) => {
                warn!(amount = input.amount, error = %e, "Transaction rejected");
                return Ok(rejection(&e));
            }
        };
        drop(ledger);

        info!(id = tx.id, kind = %tx.kind, category = %tx.category, "Transaction recorded");
        json_content(&TransactionRecord::from(&tx))
    }

    /// Get the current net balance.
    #[tool(
        description = "Get the current balance in dollars: total income minus total expenses across every recorded transaction. Returns 0 when nothing has been recorded."
    )]
    pub async fn get_balance(&self) -> Result<CallToolResult, McpError> {
        debug!("Processing get_balance request");

        let ledger = self.ledger.read().await;
        let balance = cents_to_dollars(ledger.balance());
        drop(ledger);

        info!(balance = balance, "Balance computed");
        json_content(&BalanceOutput { balance })
    }

    /// Get the signed net total per category.
    #[tool(
        description = "Get the signed net total in dollars for each category. Income counts positive and expenses negative; categories with no transactions are omitted."
    )]
    pub async fn get_category_breakdown(&self) -> Result<CallToolResult, McpError> {
        debug!("Processing get_category_breakdown request");

        let ledger = self.ledger.read().await;
        let output = CategoryBreakdownOutput::from_totals(ledger.category_breakdown());
        drop(ledger);

        info!(categories = output.totals.len(), "Breakdown computed");
        json_content(&output)
    }

    /// List recorded transactions.
    ///
    /// Returns everything in insertion order, or just the entries filed
    /// under the requested category.
    #[tool(
        description = "List recorded transactions in the order they were recorded, optionally filtered to a single category. Returns an empty list when nothing matches."
    )]
    pub async fn list_transactions(
        &self,
        Parameters(input): Parameters<ListTransactionsInput>,
    ) -> Result<CallToolResult, McpError> {
        debug!(category = ?input.category, "Processing list_transactions request");

        let filter = match input.category.as_deref() {
            None => None,
            Some(raw) => match raw.parse::<Category>() {
                Ok(category) => Some(category),
                Err(e) => {
                    warn!(category = %raw, "Rejected category filter");
                    return Ok(rejection(&e));
                }
            },
        };

        let ledger = self.ledger.read().await;
        let transactions: Vec<TransactionRecord> = ledger
            .transactions(filter)
            .iter()
            .map(TransactionRecord::from)
            .collect();
        drop(ledger);

        info!(count = transactions.len(), "Transactions listed");
        json_content(&ListTransactionsOutput { transactions })
    }
}

impl Default for FintrackMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_handler]
impl rmcp::ServerHandler for FintrackMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "fintrack MCP server - track income and expenses in an in-memory ledger. \
                 Use `add_transaction` to record a transaction, `get_balance` for the net \
                 balance, `get_category_breakdown` for signed per-category totals, and \
                 `list_transactions` to review what was recorded (optionally filtered by \
                 category). Amounts are in dollars and must be positive; the transaction \
                 type (\"income\" or \"expense\") carries the direction. Valid categories: \
                 Income, Food, Transportation, Utilities, Entertainment, Other. The ledger \
                 lives in memory and is lost when the session ends."
                    .into(),
            ),
        }
    }
}

/// Run the MCP server on stdio transport.
///
/// Returns when the client disconnects cleanly; a transport that fails
/// to initialize or a service that dies mid-session comes back as the
/// error, so the caller can exit nonzero.
pub async fn run_server() -> Result<(), Box<dyn std::error::Error>> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting fintrack MCP server");

    let server = FintrackMcpServer::new();
    let service = server.serve(stdio()).await?;
    service.waiting().await?;

    Ok(())
}
