//! Tabular layout of an annotated statement
//!
//! The grid is a plain value: rows of text cells, some with a fill. Writers
//! turn it into bytes without making layout decisions of their own.
//!
//! ```text
//! row 0   Currency: USD, Units: in thousands
//! row 1   (blank)
//! row 2   Line Item | 2023  | 2022 | Notes
//! row 3+  Revenue   | 1,000 | N/A  | ...
//! ```

use finex_domain::{AnnotatedStatement, CellStatus};

/// Header of the line item column
pub const LINE_ITEM_HEADER: &str = "Line Item";

/// Header of the trailing notes column
pub const NOTES_HEADER: &str = "Notes";

/// Index of the first line item row
pub const FIRST_DATA_ROW: usize = 3;

/// Background fill for a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    /// Missing value (red)
    Warning,

    /// Ambiguous value (yellow)
    Caution,
}

impl Fill {
    /// The fill a cell status calls for, if any
    pub fn for_status(status: CellStatus) -> Option<Fill> {
        match status {
            CellStatus::Ok => None,
            CellStatus::Missing => Some(Fill::Warning),
            CellStatus::Ambiguous => Some(Fill::Caution),
        }
    }

    /// RGB color as `0xRRGGBB`
    pub fn rgb(&self) -> u32 {
        match self {
            Fill::Warning => 0xFF0000,
            Fill::Caution => 0xFFFF00,
        }
    }
}

/// A single grid cell
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GridCell {
    /// Displayed text
    pub text: String,

    /// Background fill
    pub fill: Option<Fill>,
}

impl GridCell {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            fill: None,
        }
    }
}

/// A statement laid out as rows and columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementGrid {
    rows: Vec<Vec<GridCell>>,
}

impl StatementGrid {
    /// Lay out an annotated statement
    pub fn from_statement(statement: &AnnotatedStatement) -> Self {
        let mut rows = Vec::with_capacity(FIRST_DATA_ROW + statement.rows.len());

        rows.push(vec![GridCell::plain(format!(
            "Currency: {}, Units: {}",
            statement.currency, statement.units
        ))]);
        rows.push(Vec::new());

        let mut header = Vec::with_capacity(statement.periods.len() + 2);
        header.push(GridCell::plain(LINE_ITEM_HEADER));
        header.extend(statement.periods.iter().map(GridCell::plain));
        header.push(GridCell::plain(NOTES_HEADER));
        rows.push(header);

        for item in &statement.rows {
            let mut row = Vec::with_capacity(item.cells.len() + 2);
            row.push(GridCell::plain(&item.name));
            row.extend(item.cells.iter().map(|cell| GridCell {
                text: cell.value.clone(),
                fill: Fill::for_status(cell.status),
            }));
            row.push(GridCell::plain(&item.notes));
            rows.push(row);
        }

        Self { rows }
    }

    /// All rows, top to bottom
    pub fn rows(&self) -> &[Vec<GridCell>] {
        &self.rows
    }

    /// Cell at a zero-based position
    pub fn cell(&self, row: usize, col: usize) -> Option<&GridCell> {
        self.rows.get(row)?.get(col)
    }

    /// Widest row
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }
}
