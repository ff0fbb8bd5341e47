//! Request and response types for extraction

use finex_domain::{AnnotatedStatement, AnnotatedSummary};
use serde::{Deserialize, Serialize};

/// A document whose text has already been extracted
#[derive(Debug, Clone)]
pub struct DocumentRequest {
    /// Source file name, used as the key in exported documents
    pub source_name: String,

    /// Extracted plain text
    pub text: String,
}

impl DocumentRequest {
    /// Create a request from a source name and its text
    pub fn new(source_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
            text: text.into(),
        }
    }
}

/// Result of a statement extraction
#[derive(Debug, Clone)]
pub struct StatementExtraction {
    /// The annotated statement
    pub statement: AnnotatedStatement,

    /// Metadata about the extraction
    pub metadata: ExtractionMetadata,
}

/// Result of a call-summary extraction
#[derive(Debug, Clone)]
pub struct SummaryExtraction {
    /// The normalized summary
    pub summary: AnnotatedSummary,

    /// Metadata about the extraction
    pub metadata: ExtractionMetadata,
}

/// Metadata about an extraction operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionMetadata {
    /// Source file name
    pub source_name: String,

    /// Timestamp when extraction occurred (seconds since the Unix epoch)
    pub timestamp: u64,

    /// Name of the LLM model used (`none` when the model was not called)
    pub model_name: String,

    /// Characters of text extracted from the document
    pub input_chars: usize,

    /// Characters actually sent to the model
    pub submitted_chars: usize,

    /// Whether the text was cut off at the character budget
    pub truncated: bool,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}
