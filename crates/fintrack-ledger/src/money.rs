//! Monetary amounts as integer cents.
//!
//! All ledger arithmetic runs on whole cents so that sums and per-category
//! totals are exact. Floating-point dollar values exist only at the API
//! boundary and are converted here.

use crate::error::{LedgerError, LedgerResult};

/// Monetary amount in cents. Signed so that derived values
/// (balances, per-category totals) can go negative.
pub type Cents = i64;

/// Cents per dollar (10^2).
pub const CENTS_PER_DOLLAR: i64 = 100;

/// Convert a dollar amount to cents, rounding to the nearest cent.
///
/// Rejects NaN and infinite inputs; everything else is representable
/// (casts saturate at the `i64` range).
pub fn dollars_to_cents(dollars: f64) -> LedgerResult<Cents> {
    if !dollars.is_finite() {
        return Err(LedgerError::AmountNotFinite);
    }
    Ok((dollars * CENTS_PER_DOLLAR as f64).round() as Cents)
}

/// Convert cents back to a dollar amount.
pub fn cents_to_dollars(cents: Cents) -> f64 {
    cents as f64 / CENTS_PER_DOLLAR as f64
}

/// Format cents as a plain decimal dollar string, e.g. `-12.05`.
pub fn format_cents(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!(
        "{}{}.{:02}",
        sign,
        abs / CENTS_PER_DOLLAR as u64,
        abs % CENTS_PER_DOLLAR as u64
    )
}
