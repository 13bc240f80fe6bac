//! The append-only transaction ledger.

use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::category::Category;
use crate::error::{LedgerError, LedgerResult};
use crate::money::Cents;
use crate::transaction::{Transaction, TransactionKind};
use crate::{Timestamp, TxId};

/// In-memory, append-only transaction ledger.
///
/// Transactions are assigned sequential ids starting at 1 and are never
/// mutated or removed once recorded. All queries are derived from the
/// recorded list on demand; nothing is cached, so every answer reflects
/// exactly the appends that succeeded before it.
///
/// The ledger itself is not thread-safe. Callers that share one across
/// tasks wrap it in a lock; the MCP server uses `Arc<tokio::sync::RwLock>`
/// so reads can proceed concurrently while appends are serialized.
#[derive(Debug, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transaction and return the recorded entry.
    ///
    /// The amount is in cents and must be positive; `kind` carries the
    /// direction. On rejection the ledger is unchanged and no id is
    /// consumed.
    pub fn add(
        &mut self,
        kind: TransactionKind,
        amount: Cents,
        category: Category,
        description: impl Into<String>,
    ) -> LedgerResult<Transaction> {
        if amount <= 0 {
            return Err(LedgerError::NonPositiveAmount { cents: amount });
        }

        let tx = Transaction {
            // Ids are 1-based and dense: id == position in the list + 1.
            id: self.transactions.len() as TxId + 1,
            kind,
            amount,
            category,
            description: description.into(),
            timestamp: self.next_timestamp(),
        };
        self.transactions.push(tx.clone());
        Ok(tx)
    }

    /// Net balance in cents: income minus expenses over every recorded
    /// transaction. Zero for an empty ledger. The sum saturates at the
    /// `i64` range, so the query stays total no matter what amounts
    /// were recorded.
    pub fn balance(&self) -> Cents {
        self.transactions
            .iter()
            .fold(0, |total, tx| total.saturating_add(tx.signed_cents()))
    }

    /// Signed net total in cents per category.
    ///
    /// Income and expenses filed under the same category offset each
    /// other. Categories with no transactions are absent from the map,
    /// so an empty ledger yields an empty map. Per-category sums
    /// saturate at the `i64` range like [`balance`](Self::balance).
    pub fn category_breakdown(&self) -> HashMap<Category, Cents> {
        let mut totals: HashMap<Category, Cents> = HashMap::new();
        for tx in &self.transactions {
            let total = totals.entry(tx.category).or_insert(0);
            *total = total.saturating_add(tx.signed_cents());
        }
        totals
    }

    /// Recorded transactions in insertion order, optionally filtered to
    /// a single category.
    pub fn transactions(&self, category: Option<Category>) -> Vec<Transaction> {
        match category {
            None => self.transactions.clone(),
            Some(wanted) => self
                .transactions
                .iter()
                .filter(|tx| tx.category == wanted)
                .cloned()
                .collect(),
        }
    }

    /// Number of recorded transactions.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Whether the ledger has no transactions.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Timestamp for the next append: wall-clock time, clamped so it
    /// never runs behind the previous entry. Keeps timestamps as
    /// non-decreasing as the ids even if the system clock steps back.
    fn next_timestamp(&self) -> Timestamp {
        let now = now_millis();
        match self.transactions.last() {
            Some(last) => now.max(last.timestamp),
            None => now,
        }
    }
}

/// Current wall-clock time in Unix epoch milliseconds.
fn now_millis() -> Timestamp {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as Timestamp
}
