//! Transaction records and their direction.

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::error::LedgerError;
use crate::money::Cents;
use crate::{Timestamp, TxId};

/// Direction of a transaction: money in or money out.
///
/// Serialized in lowercase (`"income"` / `"expense"`), matching the
/// strings accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    /// Money coming in; counts positive toward the balance.
    Income,
    /// Money going out; counts negative toward the balance.
    Expense,
}

impl TransactionKind {
    /// The wire name, as serialized and as accepted on input.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            _ => Err(LedgerError::UnknownKind(s.to_string())),
        }
    }
}

/// A single recorded transaction.
///
/// Immutable once appended to the ledger. The `amount` is always
/// positive; `kind` carries the direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Ledger-assigned sequence number, starting at 1.
    pub id: TxId,
    /// Whether this is income or an expense.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Amount in cents, always positive.
    pub amount: Cents,
    /// Category the transaction is filed under.
    pub category: Category,
    /// Free-form description; may be empty.
    pub description: String,
    /// Creation time in Unix epoch milliseconds.
    pub timestamp: Timestamp,
}

impl Transaction {
    /// The amount with the direction applied: positive for income,
    /// negative for expenses.
    pub fn signed_cents(&self) -> Cents {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}
