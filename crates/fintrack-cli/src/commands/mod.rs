//! CLI command implementations.

pub mod categories;
pub mod serve;

// Re-export command handlers
pub use categories::categories;
pub use serve::serve;
