//! Category listing command implementation.

use fintrack_ledger::Category;

use crate::cli::OutputFormat;
use crate::error::CliResult;

/// List the categories a transaction can use, one per line or as JSON.
pub fn categories(format: OutputFormat) -> CliResult<String> {
    let names = Category::ALL.map(|c| c.as_str());

    match format {
        OutputFormat::Human => Ok(names.join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&names)?),
    }
}
