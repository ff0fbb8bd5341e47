//! Statement command implementation.

use super::{source_name, write_artifact};
use crate::cli::StatementArgs;
use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::Formatter;
use finex_domain::traits::LlmProvider;
use finex_domain::AnnotatedStatement;
use finex_export::{statement_to_xlsx, ExportDocument};
use finex_extractor::{extract_file, DocumentRequest, Extractor};
use tracing::info;

/// Execute the statement command.
pub async fn execute_statement<L>(
    args: StatementArgs,
    extractor: &Extractor<L>,
    formatter: &Formatter,
) -> Result<AnnotatedStatement>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    let name = source_name(&args.file);
    let text = extract_file(&args.file)?;
    info!("Read {} chars from {}", text.chars().count(), args.file.display());

    let result = extractor
        .extract_statement(DocumentRequest::new(name.clone(), text))
        .await?;
    let statement = result.statement;

    // Render everything before touching the file system
    let workbook = statement_to_xlsx(&statement)?;
    let document = match &args.json {
        Some(_) => {
            let mut doc = ExportDocument::new();
            doc.insert(name, statement.clone());
            Some(doc.to_json()?)
        }
        None => None,
    };

    write_artifact(&args.output, workbook)?;
    if let (Some(path), Some(json)) = (&args.json, document) {
        write_artifact(path, json)?;
    }

    if formatter.format() == OutputFormat::Quiet {
        println!("{}", args.output.display());
        if let Some(path) = &args.json {
            println!("{}", path.display());
        }
        return Ok(statement);
    }

    println!("{}", formatter.format_statement(&statement)?);

    if formatter.format() == OutputFormat::Table {
        if result.metadata.truncated {
            println!(
                "{}",
                formatter.warning(&format!(
                    "Text was truncated to {} of {} characters",
                    result.metadata.submitted_chars, result.metadata.input_chars
                ))
            );
        }
        if !statement.issues.is_empty() {
            println!("{}", formatter.format_issues(&statement.issues));
        }
        println!(
            "{}",
            formatter.success(&format!("Statement written to {}", args.output.display()))
        );
        if let Some(path) = &args.json {
            println!("{}", formatter.success(&format!("Document written to {}", path.display())));
        }
    }

    Ok(statement)
}
