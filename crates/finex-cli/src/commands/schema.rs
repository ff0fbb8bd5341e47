//! Schema command implementation.

use crate::cli::SchemaArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use finex_domain::SummarySchema;

/// Execute the schema command.
pub fn execute_schema(args: SchemaArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let output = if args.summary {
        formatter.format_summary_schema(&SummarySchema::earnings_call())?
    } else {
        formatter.format_line_item_schema(&config.line_item_schema()?)?
    };
    println!("{}", output);
    Ok(())
}
