//! Summarize command implementation.

use super::{source_name, write_artifact};
use crate::cli::SummarizeArgs;
use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::Formatter;
use finex_domain::traits::LlmProvider;
use finex_domain::AnnotatedSummary;
use finex_export::ExportDocument;
use finex_extractor::{extract_file, DocumentRequest, Extractor};
use tracing::{info, warn};

/// Execute the summarize command.
///
/// Files are processed one at a time. Any failure aborts the run before the
/// document is written.
pub async fn execute_summarize<L>(
    args: SummarizeArgs,
    extractor: &Extractor<L>,
    formatter: &Formatter,
) -> Result<ExportDocument<AnnotatedSummary>>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    let mut document = ExportDocument::new();

    for file in &args.files {
        let name = source_name(file);
        let text = extract_file(file)?;
        info!("Read {} chars from {}", text.chars().count(), file.display());

        let result = extractor
            .summarize_call(DocumentRequest::new(name.clone(), text))
            .await?;

        if formatter.format() == OutputFormat::Table {
            println!("{}", formatter.format_summary(&name, &result.summary)?);
            if result.summary.degraded {
                println!(
                    "{}",
                    formatter.warning(&format!("No text could be extracted from {}", name))
                );
            }
            if result.metadata.truncated {
                println!(
                    "{}",
                    formatter.warning(&format!(
                        "{} was truncated to {} of {} characters",
                        name, result.metadata.submitted_chars, result.metadata.input_chars
                    ))
                );
            }
            if !result.summary.issues.is_empty() {
                println!("{}", formatter.format_issues(&result.summary.issues));
            }
        }

        if document.insert(name.clone(), result.summary).is_some() {
            if let Some(notice) = duplicate_notice(formatter, &name) {
                println!("{}", notice);
            }
        }
    }

    let json = document.to_json()?;
    write_artifact(&args.output, &json)?;

    match formatter.format() {
        OutputFormat::Json => println!("{}", json),
        OutputFormat::Quiet => println!("{}", args.output.display()),
        OutputFormat::Table => println!(
            "{}",
            formatter.success(&format!(
                "{} summary(ies) written to {}",
                document.len(),
                args.output.display()
            ))
        ),
    }

    Ok(document)
}

/// Stdout notice for a repeated file name
///
/// Only the table view gets one; JSON and quiet output stay machine-readable
/// and the notice goes to the log on stderr instead.
fn duplicate_notice(formatter: &Formatter, name: &str) -> Option<String> {
    let message = format!("Duplicate file name {}, keeping the last one", name);
    if formatter.format() == OutputFormat::Table {
        Some(formatter.warning(&message))
    } else {
        warn!("{}", message);
        None
    }
}
