//! Error types for exporters

use thiserror::Error;

/// Errors that can occur while rendering an artifact
#[derive(Error, Debug)]
pub enum ExportError {
    /// Spreadsheet writer failed
    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// Grid does not fit the worksheet address space
    #[error("Grid of {rows} row(s) by {columns} column(s) does not fit a worksheet")]
    GridTooLarge {
        /// Row count
        rows: usize,
        /// Column count
        columns: usize,
    },

    /// JSON document could not be written or read
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
