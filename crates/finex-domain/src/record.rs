//! Annotated records produced by validation
//!
//! These are the validated, status-tagged versions of a model reply. They are
//! created fresh per request and discarded once the export artifact exists.

use crate::cell::{AnnotatedCell, CellStatus};
use crate::issue::ValidationIssue;
use serde::{Deserialize, Serialize};

/// One line item across all reporting periods
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItemRow {
    /// Canonical line item name (or the raw name for a kept unknown field)
    pub name: String,

    /// One cell per reporting period, in period order
    pub cells: Vec<AnnotatedCell>,

    /// Free-text note returned with the row
    #[serde(default)]
    pub notes: String,
}

impl LineItemRow {
    /// Whether any cell in the row carries the given status
    pub fn has_status(&self, status: CellStatus) -> bool {
        self.cells.iter().any(|cell| cell.status == status)
    }
}

/// Annotated income statement: line items × reporting periods
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedStatement {
    /// Reporting currency (e.g., "USD")
    pub currency: String,

    /// Units the figures are stated in (e.g., "in millions")
    pub units: String,

    /// Period labels in the order the model emitted them
    pub periods: Vec<String>,

    /// Rows in schema order
    pub rows: Vec<LineItemRow>,

    /// Problems found while annotating
    #[serde(default)]
    pub issues: Vec<ValidationIssue>,
}

impl AnnotatedStatement {
    /// Find a row by name
    pub fn row(&self, name: &str) -> Option<&LineItemRow> {
        self.rows.iter().find(|row| row.name == name)
    }

    /// Cell for a line item in a given period
    pub fn cell(&self, name: &str, period: &str) -> Option<&AnnotatedCell> {
        let idx = self.periods.iter().position(|p| p == period)?;
        self.row(name)?.cells.get(idx)
    }

    /// Count cells with the given status
    pub fn count_status(&self, status: CellStatus) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.cells.iter())
            .filter(|cell| cell.status == status)
            .count()
    }
}

/// Value of a summary field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Text or enum value
    Text(String),

    /// List value (never empty after normalization)
    List(Vec<String>),
}

impl FieldValue {
    /// Borrow as text, if the value is text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            FieldValue::List(_) => None,
        }
    }

    /// Borrow as a list, if the value is a list
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::List(items) => Some(items),
            FieldValue::Text(_) => None,
        }
    }
}

/// A named summary field and its normalized value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryField {
    /// Field name
    pub name: String,

    /// Normalized value
    pub value: FieldValue,
}

/// Annotated analyst-style summary of one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedSummary {
    /// Fields in schema order
    pub fields: Vec<SummaryField>,

    /// Problems found while normalizing
    #[serde(default)]
    pub issues: Vec<ValidationIssue>,

    /// Set when the source document yielded no usable text
    #[serde(default)]
    pub degraded: bool,
}

impl AnnotatedSummary {
    /// Look up a field value by name
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| &field.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_statement() -> AnnotatedStatement {
        AnnotatedStatement {
            currency: "USD".to_string(),
            units: "in millions".to_string(),
            periods: vec!["2023".to_string(), "2022".to_string()],
            rows: vec![LineItemRow {
                name: "Revenue".to_string(),
                cells: vec![
                    AnnotatedCell::classified("1,000", ""),
                    AnnotatedCell::missing(),
                ],
                notes: String::new(),
            }],
            issues: vec![],
        }
    }

    #[test]
    fn test_cell_lookup_by_period() {
        let statement = sample_statement();
        assert_eq!(statement.cell("Revenue", "2023").unwrap().value, "1,000");
        assert!(statement.cell("Revenue", "2022").unwrap().is_missing());
        assert!(statement.cell("Revenue", "2021").is_none());
        assert!(statement.cell("Net Income", "2023").is_none());
    }

    #[test]
    fn test_count_status() {
        let statement = sample_statement();
        assert_eq!(statement.count_status(CellStatus::Ok), 1);
        assert_eq!(statement.count_status(CellStatus::Missing), 1);
        assert!(statement.rows[0].has_status(CellStatus::Missing));
    }

    #[test]
    fn test_field_value_untagged_json() {
        let text: FieldValue = serde_json::from_str("\"Cautious\"").unwrap();
        assert_eq!(text.as_text(), Some("Cautious"));

        let list: FieldValue = serde_json::from_str("[\"a\", \"b\"]").unwrap();
        assert_eq!(list.as_list().unwrap().len(), 2);
    }

    #[test]
    fn test_statement_json_round_trip() {
        let statement = sample_statement();
        let json = serde_json::to_string(&statement).unwrap();
        let parsed: AnnotatedStatement = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, statement);
    }
}
