//! In-memory transaction ledger for fintrack.
//!
//! This crate holds the core bookkeeping model: an append-only [`Ledger`]
//! of income and expense transactions, plus the types and conversions the
//! API boundary needs. It has no I/O and no async; serving the ledger over
//! a protocol is the `fintrack-mcp` crate's job.
//!
//! # Module Organization
//!
//! - [`money`] - Cent-denominated amounts and dollar conversions
//! - [`category`] - The fixed category set
//! - [`transaction`] - Transaction records and their direction
//! - [`error`] - Error type for rejected inputs
//! - [`ledger`] - The append-only ledger and its queries
//!
//! # Example
//!
//! ```
//! use fintrack_ledger::{Category, Ledger, TransactionKind};
//!
//! let mut ledger = Ledger::new();
//!
//! let salary = ledger
//!     .add(TransactionKind::Income, 100_000, Category::Income, "salary")
//!     .unwrap();
//! assert_eq!(salary.id, 1);
//!
//! ledger
//!     .add(TransactionKind::Expense, 5_000, Category::Food, "dinner")
//!     .unwrap();
//!
//! assert_eq!(ledger.balance(), 95_000);
//! assert_eq!(ledger.transactions(Some(Category::Food)).len(), 1);
//! ```
//!
//! # Type Conventions
//!
//! - Monetary values are integer cents ([`Cents`], signed); floats appear
//!   only in the boundary conversions in [`money`]
//! - Small types derive `Copy`; everything derives `Debug` and `Clone`
//! - Everything that crosses the wire derives `Serialize`/`Deserialize`

/// Crate version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod category;
pub mod error;
pub mod ledger;
pub mod money;
pub mod transaction;

// Re-export the public types at the crate root for convenience

// Core model
pub use category::Category;
pub use ledger::Ledger;
pub use transaction::{Transaction, TransactionKind};

// Money helpers
pub use money::{cents_to_dollars, dollars_to_cents, format_cents, Cents, CENTS_PER_DOLLAR};

// Error types
pub use error::{LedgerError, LedgerResult};

/// Ledger-assigned transaction id. Sequential, starting at 1.
pub type TxId = u64;

/// Unix epoch milliseconds.
pub type Timestamp = u64;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_query_through_the_crate_api() {
        let mut ledger = Ledger::new();

        let cents = dollars_to_cents(1000.0).unwrap();
        let tx = ledger
            .add(TransactionKind::Income, cents, Category::Income, "salary")
            .unwrap();

        assert_eq!(tx.id, 1);
        assert_eq!(cents_to_dollars(ledger.balance()), 1000.0);

        let breakdown = ledger.category_breakdown();
        assert_eq!(breakdown[&Category::Income], 100_000);
    }

    #[test]
    fn test_boundary_strings_parse_into_core_types() {
        let kind: TransactionKind = "expense".parse().unwrap();
        let category: Category = "Utilities".parse().unwrap();

        let mut ledger = Ledger::new();
        let tx = ledger.add(kind, 9_900, category, "electricity").unwrap();

        assert_eq!(tx.signed_cents(), -9_900);
        assert_eq!(format_cents(tx.signed_cents()), "-99.00");
    }

    #[test]
    fn test_rejections_surface_as_ledger_errors() {
        let mut ledger = Ledger::new();

        let err = ledger
            .add(TransactionKind::Income, 0, Category::Income, "")
            .unwrap_err();
        assert!(matches!(err, LedgerError::NonPositiveAmount { .. }));

        let err = "Vacation".parse::<Category>().unwrap_err();
        assert!(matches!(err, LedgerError::UnknownCategory(_)));
    }

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
