//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use finex_domain::{
    AnnotatedStatement, AnnotatedSummary, CellStatus, FieldKind, FieldValue, LineItemSchema,
    SummarySchema, ValidationIssue,
};
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// The active output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format an annotated statement.
    pub fn format_statement(&self, statement: &AnnotatedStatement) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(statement)?),
            OutputFormat::Table => Ok(self.format_statement_table(statement)),
            OutputFormat::Quiet => Ok(String::new()),
        }
    }

    /// Format a statement as a status-colored table.
    fn format_statement_table(&self, statement: &AnnotatedStatement) -> String {
        let caption = format!("Currency: {}, Units: {}", statement.currency, statement.units);
        if statement.rows.is_empty() {
            return format!("{}\n{}", caption, self.colorize("No line items found.", "yellow"));
        }

        let mut builder = Builder::default();
        let mut header = vec!["Line Item".to_string()];
        header.extend(statement.periods.iter().cloned());
        header.push("Notes".to_string());
        builder.push_record(header);

        for row in &statement.rows {
            let mut record = vec![row.name.clone()];
            record.extend(row.cells.iter().map(|cell| self.status_colored(&cell.value, cell.status)));
            record.push(row.notes.clone());
            builder.push_record(record);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        format!("{}\n{}", caption, table)
    }

    /// Format one file's summary.
    pub fn format_summary(&self, source_name: &str, summary: &AnnotatedSummary) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(summary)?),
            OutputFormat::Table => Ok(self.format_summary_table(source_name, summary)),
            OutputFormat::Quiet => Ok(String::new()),
        }
    }

    fn format_summary_table(&self, source_name: &str, summary: &AnnotatedSummary) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);

        for field in &summary.fields {
            let value = match &field.value {
                FieldValue::Text(text) => text.clone(),
                FieldValue::List(items) => items
                    .iter()
                    .map(|item| format!("• {}", item))
                    .collect::<Vec<_>>()
                    .join("\n"),
            };
            builder.push_record([field.name.clone(), value]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        format!("{}\n{}", self.colorize(source_name, "cyan"), table)
    }

    /// Format validation issues, one warning per line.
    pub fn format_issues(&self, issues: &[ValidationIssue]) -> String {
        issues
            .iter()
            .map(|issue| self.warning(&issue.to_string()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format the line item table.
    pub fn format_line_item_schema(&self, schema: &LineItemSchema) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(schema.items())?),
            OutputFormat::Quiet => Ok(schema.names().collect::<Vec<_>>().join("\n")),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Line Item", "Synonyms"]);
                for item in schema.items() {
                    builder.push_record([item.name.clone(), item.synonyms.join(", ")]);
                }
                let mut table = builder.build();
                table.with(Style::rounded());
                Ok(table.to_string())
            }
        }
    }

    /// Format the summary field table.
    pub fn format_summary_schema(&self, schema: &SummarySchema) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let fields: Vec<serde_json::Value> = schema
                    .fields()
                    .iter()
                    .map(|field| {
                        let mut value = serde_json::json!({
                            "name": field.name,
                            "kind": field.kind.as_str(),
                            "description": field.description,
                        });
                        if let FieldKind::Enum(choices) = &field.kind {
                            value["choices"] = serde_json::json!(choices);
                        }
                        value
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&fields)?)
            }
            OutputFormat::Quiet => Ok(schema
                .fields()
                .iter()
                .map(|f| f.name.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Field", "Kind", "Description"]);
                for field in schema.fields() {
                    let kind = match &field.kind {
                        FieldKind::Enum(choices) => choices.join(" | "),
                        other => other.as_str().to_string(),
                    };
                    builder.push_record([field.name.clone(), kind, field.description.clone()]);
                }
                let mut table = builder.build();
                table.with(Style::rounded());
                Ok(table.to_string())
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn status_colored(&self, value: &str, status: CellStatus) -> String {
        match status {
            CellStatus::Ok => value.to_string(),
            CellStatus::Missing => self.colorize(value, "red"),
            CellStatus::Ambiguous => self.colorize(value, "yellow"),
        }
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use finex_domain::{AnnotatedCell, LineItemRow, SummaryField};

    fn statement() -> AnnotatedStatement {
        AnnotatedStatement {
            currency: "USD".to_string(),
            units: "in thousands".to_string(),
            periods: vec!["2023".to_string(), "2022".to_string()],
            rows: vec![LineItemRow {
                name: "Revenue".to_string(),
                cells: vec![AnnotatedCell::classified("1,000", ""), AnnotatedCell::missing()],
                notes: String::new(),
            }],
            issues: vec![ValidationIssue::MissingPeriods],
        }
    }

    #[test]
    fn test_statement_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_statement(&statement()).unwrap();
        assert!(output.starts_with("Currency: USD, Units: in thousands"));
        assert!(output.contains("Line Item"));
        assert!(output.contains("1,000"));
        assert!(output.contains("N/A"));
    }

    #[test]
    fn test_statement_json() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_statement(&statement()).unwrap();
        let parsed: AnnotatedStatement = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, statement());
    }

    #[test]
    fn test_quiet_statement_is_empty() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        assert!(formatter.format_statement(&statement()).unwrap().is_empty());
    }

    #[test]
    fn test_summary_table_lists() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let summary = AnnotatedSummary {
            fields: vec![SummaryField {
                name: "key_positives".to_string(),
                value: FieldValue::List(vec!["Strong margins".to_string(), "Exports".to_string()]),
            }],
            issues: Vec::new(),
            degraded: false,
        };
        let output = formatter.format_summary("call.pdf", &summary).unwrap();
        assert!(output.starts_with("call.pdf"));
        assert!(output.contains("• Strong margins"));
        assert!(output.contains("• Exports"));
    }

    #[test]
    fn test_schema_formats() {
        let schema = LineItemSchema::standard();

        let quiet = Formatter::new(OutputFormat::Quiet, false);
        assert!(quiet.format_line_item_schema(&schema).unwrap().starts_with("Revenue\n"));

        let json = Formatter::new(OutputFormat::Json, false)
            .format_summary_schema(&SummarySchema::earnings_call())
            .unwrap();
        assert!(json.contains("\"choices\""));
    }

    #[test]
    fn test_messages() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("done"), "✓ done");
        assert_eq!(formatter.warning("careful"), "⚠ careful");
    }
}
