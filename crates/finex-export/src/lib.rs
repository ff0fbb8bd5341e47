//! Finex Export
//!
//! Renders annotated records into artifacts. Exporters only return bytes or
//! strings; writing files is left to the caller.
//!
//! - [`StatementGrid`] lays a statement out as rows with status fills
//! - [`render_xlsx`] turns a grid into a color-coded workbook
//! - [`ExportDocument`] collects records from many files into one JSON document
//!
//! # Example
//!
//! ```
//! use finex_domain::{AnnotatedCell, AnnotatedStatement, LineItemRow};
//! use finex_export::{statement_to_xlsx, StatementGrid};
//!
//! let statement = AnnotatedStatement {
//!     currency: "USD".to_string(),
//!     units: "in thousands".to_string(),
//!     periods: vec!["2023".to_string()],
//!     rows: vec![LineItemRow {
//!         name: "Revenue".to_string(),
//!         cells: vec![AnnotatedCell::classified("1,000", "")],
//!         notes: String::new(),
//!     }],
//!     issues: Vec::new(),
//! };
//!
//! let grid = StatementGrid::from_statement(&statement);
//! assert_eq!(grid.rows().len(), 4);
//!
//! let bytes = statement_to_xlsx(&statement).unwrap();
//! assert!(!bytes.is_empty());
//! ```

#![warn(missing_docs)]

mod document;
mod error;
pub mod grid;
mod xlsx;

pub use document::ExportDocument;
pub use error::ExportError;
pub use grid::{Fill, GridCell, StatementGrid};
pub use xlsx::{render_xlsx, statement_to_xlsx, SHEET_NAME};
