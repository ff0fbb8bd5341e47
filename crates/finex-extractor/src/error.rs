//! Error types for the Extractor

use finex_gatekeeper::GatekeeperError;
use thiserror::Error;

/// Errors that can occur during extraction
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Text extraction produced no usable text
    #[error("No usable text extracted from '{0}'")]
    EmptyInput(String),

    /// The model reply could not be parsed as a structured record
    #[error("Malformed extraction output: {0}")]
    MalformedExtractionOutput(String),

    /// LLM provider error
    #[error("LLM error: {0}")]
    Llm(String),

    /// Document could not be read
    #[error("Text extraction error: {0}")]
    TextExtraction(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for ExtractorError {
    fn from(e: serde_json::Error) -> Self {
        ExtractorError::MalformedExtractionOutput(format!("JSON parse error: {}", e))
    }
}

impl From<GatekeeperError> for ExtractorError {
    fn from(e: GatekeeperError) -> Self {
        match e {
            GatekeeperError::MalformedRecord(msg) => ExtractorError::MalformedExtractionOutput(msg),
        }
    }
}
