//! MCP (Model Context Protocol) server for fintrack.
//!
//! This crate exposes the in-memory transaction ledger to AI assistants
//! like Claude, so a conversation can record spending and ask questions
//! about it.
//!
//! # Overview
//!
//! The server exposes four tools:
//!
//! - **add_transaction**: Record an income or expense transaction
//! - **get_balance**: Net balance over everything recorded
//! - **get_category_breakdown**: Signed net total per category
//! - **list_transactions**: Review transactions, optionally by category
//!
//! # Usage
//!
//! The server is typically started via the CLI:
//!
//! ```bash
//! fintrack serve
//! ```
//!
//! Or configured in Claude Desktop's MCP config:
//!
//! ```json
//! {
//!   "mcpServers": {
//!     "fintrack": {
//!       "command": "fintrack",
//!       "args": ["serve"]
//!     }
//!   }
//! }
//! ```
//!
//! # State
//!
//! The ledger lives in memory for the lifetime of the server process.
//! Nothing is persisted: when the client disconnects and the process
//! exits, the recorded transactions are gone.

pub mod server;
pub mod tools;

pub use server::{run_server, FintrackMcpServer};
pub use tools::{
    AddTransactionInput, BalanceOutput, CategoryBreakdownOutput, ListTransactionsInput,
    ListTransactionsOutput, TransactionRecord,
};
