//! Error types for ledger operations.

use thiserror::Error;

use crate::category::Category;
use crate::money::Cents;

/// Errors produced by ledger operations.
///
/// Every variant describes a rejected input; the ledger itself is
/// append-only and has no internal failure modes. Messages are written
/// for the client that sent the bad value, so they name what was sent
/// and what would have been accepted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LedgerError {
    /// Amount was zero or negative after conversion to cents.
    #[error("amount must be positive, got {} dollars", crate::money::format_cents(*cents))]
    NonPositiveAmount {
        /// The rejected amount in cents.
        cents: Cents,
    },

    /// Amount was NaN or infinite.
    #[error("amount must be a finite number")]
    AmountNotFinite,

    /// Transaction type string was neither `income` nor `expense`.
    #[error("unknown transaction type '{0}', expected 'income' or 'expense'")]
    UnknownKind(String),

    /// Category string did not name one of the fixed categories.
    #[error("unknown category '{0}', expected one of: {}", Category::valid_names())]
    UnknownCategory(String),
}

/// Result type alias for ledger operations.
pub type LedgerResult<T> = std::result::Result<T, LedgerError>;
