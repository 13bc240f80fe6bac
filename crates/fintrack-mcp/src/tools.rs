//! MCP tool input/output types.
//!
//! Defines the request and response types for the ledger tools. Inputs
//! take loosely-typed strings and dollar floats, because that is what a
//! conversational client sends; the server parses them into the core
//! ledger types and rejects anything that does not fit. Outputs convert
//! back to dollars and canonical names.

use std::collections::BTreeMap;

use rmcp::schemars;
use rmcp::schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use fintrack_ledger::{cents_to_dollars, Category, Cents, Transaction};

// ============================================================================
// add_transaction Tool
// ============================================================================

/// Input for the `add_transaction` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddTransactionInput {
    /// Transaction type: "income" or "expense".
    #[serde(rename = "type")]
    pub kind: String,

    /// Amount in dollars. Must be positive; the type carries the direction.
    pub amount: f64,

    /// Category name. One of: Income, Food, Transportation, Utilities,
    /// Entertainment, Other.
    pub category: String,

    /// Optional free-form description.
    #[serde(default)]
    pub description: Option<String>,
}

/// A recorded transaction, as returned to clients.
///
/// Mirrors [`Transaction`] with the amount converted back to dollars and
/// the enums rendered as their wire names.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct TransactionRecord {
    /// Ledger-assigned sequence number, starting at 1.
    pub id: u64,

    /// "income" or "expense".
    #[serde(rename = "type")]
    pub kind: String,

    /// Amount in dollars, always positive.
    pub amount: f64,

    /// Category name.
    pub category: String,

    /// Free-form description; empty if none was given.
    pub description: String,

    /// Creation time in Unix epoch milliseconds.
    pub timestamp: u64,
}

impl From<&Transaction> for TransactionRecord {
    fn from(tx: &Transaction) -> Self {
        Self {
            id: tx.id,
            kind: tx.kind.as_str().to_string(),
            amount: cents_to_dollars(tx.amount),
            category: tx.category.as_str().to_string(),
            description: tx.description.clone(),
            timestamp: tx.timestamp,
        }
    }
}

// ============================================================================
// get_balance Tool
// ============================================================================

/// Output from the `get_balance` tool.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct BalanceOutput {
    /// Net balance in dollars: total income minus total expenses.
    pub balance: f64,
}

// ============================================================================
// get_category_breakdown Tool
// ============================================================================

/// Output from the `get_category_breakdown` tool.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct CategoryBreakdownOutput {
    /// Signed net total in dollars per category. Income counts positive,
    /// expenses negative; categories with no transactions are omitted.
    pub totals: BTreeMap<String, f64>,
}

impl CategoryBreakdownOutput {
    /// Build the output from the ledger's cent-denominated totals.
    ///
    /// Keys become canonical category names; the `BTreeMap` keeps them
    /// alphabetically ordered so responses are stable across calls.
    pub fn from_totals(totals: impl IntoIterator<Item = (Category, Cents)>) -> Self {
        Self {
            totals: totals
                .into_iter()
                .map(|(category, cents)| {
                    (category.as_str().to_string(), cents_to_dollars(cents))
                })
                .collect(),
        }
    }
}

// ============================================================================
// list_transactions Tool
// ============================================================================

/// Input for the `list_transactions` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListTransactionsInput {
    /// Optional category filter. When omitted, every transaction is
    /// returned.
    #[serde(default)]
    pub category: Option<String>,
}

/// Output from the `list_transactions` tool.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct ListTransactionsOutput {
    /// Matching transactions in the order they were recorded.
    pub transactions: Vec<TransactionRecord>,
}
