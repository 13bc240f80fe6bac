//! The fixed category set for transactions.

use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

/// Category a transaction is filed under.
///
/// The set is closed: clients pick from these six names and anything
/// else is rejected at the boundary. Names are matched case-sensitively
/// and serialized exactly as written here (`"Food"`, not `"food"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Salary, refunds, and other money coming in.
    Income,
    /// Groceries and eating out.
    Food,
    /// Transit, fuel, vehicle costs.
    Transportation,
    /// Recurring household bills.
    Utilities,
    /// Leisure spending.
    Entertainment,
    /// Anything that fits nowhere else.
    Other,
}

impl Category {
    /// All categories, in declaration order.
    pub const ALL: [Category; 6] = [
        Category::Income,
        Category::Food,
        Category::Transportation,
        Category::Utilities,
        Category::Entertainment,
        Category::Other,
    ];

    /// The canonical name, as serialized and as accepted on input.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Income => "Income",
            Category::Food => "Food",
            Category::Transportation => "Transportation",
            Category::Utilities => "Utilities",
            Category::Entertainment => "Entertainment",
            Category::Other => "Other",
        }
    }

    /// Comma-separated list of all valid names, for error messages.
    pub fn valid_names() -> String {
        Self::ALL.map(|c| c.as_str()).join(", ")
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Income" => Ok(Category::Income),
            "Food" => Ok(Category::Food),
            "Transportation" => Ok(Category::Transportation),
            "Utilities" => Ok(Category::Utilities),
            "Entertainment" => Ok(Category::Entertainment),
            "Other" => Ok(Category::Other),
            _ => Err(LedgerError::UnknownCategory(s.to_string())),
        }
    }
}
