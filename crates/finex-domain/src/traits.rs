//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and the two external
//! collaborators. Implementations live in other crates.

/// Trait for LLM provider operations
///
/// Implemented by the infrastructure layer (finex-llm)
pub trait LlmProvider {
    /// Error type for LLM operations
    type Error;

    /// Generate a JSON reply under the given system instructions
    ///
    /// Providers that support a JSON response mode should enable it here. The
    /// reply is still untrusted text; callers parse it strictly.
    fn generate_structured(&self, instructions: &str, prompt: &str) -> Result<String, Self::Error>;

    /// Name of the model answering requests
    fn model_name(&self) -> &str;
}

/// Trait for pulling plain text out of a document blob
///
/// Implemented by the application layer (finex-extractor). A document with no
/// extractable text yields an empty string rather than an error.
pub trait TextExtractor {
    /// Error type for extraction operations
    type Error;

    /// Extract UTF-8 text from raw document bytes
    fn extract(&self, document: &[u8]) -> Result<String, Self::Error>;
}
