//! Finex Domain Layer
//!
//! This crate contains the core domain model for Finex. It defines the
//! canonical schemas that extracted financial data is mapped into, the
//! annotated record shapes produced by validation, and the trait interfaces
//! for the two external collaborators (text extraction and the remote model).
//!
//! ## Key Concepts
//!
//! - **Line item schema**: Ordered canonical line items, each with synonyms
//! - **Summary schema**: Named analyst fields tagged text / enum / list
//! - **Annotated cell**: A value plus its status (ok, missing, ambiguous)
//! - **Annotated record**: The validated, status-tagged version of a model reply
//! - **Sentinels**: `N/A` and `Not mentioned` stand in for absent data
//!
//! ## Architecture
//!
//! - Only `serde` as an external dependency
//! - Pure data and lookups, no I/O
//! - Collaborator traits are implemented in `finex-llm` and `finex-extractor`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cell;
pub mod issue;
pub mod record;
pub mod schema;
pub mod traits;

// Re-exports for convenience
pub use cell::{AnnotatedCell, CellStatus, AMBIGUITY_MARKER, NOT_AVAILABLE, NOT_MENTIONED};
pub use issue::ValidationIssue;
pub use record::{AnnotatedStatement, AnnotatedSummary, FieldValue, LineItemRow, SummaryField};
pub use schema::{
    FieldKind, FieldSpec, LineItem, LineItemSchema, Resolution, SchemaError, SummarySchema,
};
