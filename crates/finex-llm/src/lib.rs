//! Finex LLM Provider Layer
//!
//! Implementations of the `LlmProvider` trait from `finex-domain`. The remote
//! model is treated as an opaque extraction requester: it receives system
//! instructions plus a prompt and returns untrusted text that callers parse
//! strictly.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `OpenAiProvider`: OpenAI-compatible chat completions API
//!
//! # Examples
//!
//! ```
//! use finex_llm::MockProvider;
//! use finex_domain::traits::LlmProvider;
//!
//! let provider = MockProvider::new("{\"line_items\": {}}");
//! let result = provider.generate_structured("You are a financial extractor.", "Revenue 1,000").unwrap();
//! assert_eq!(result, "{\"line_items\": {}}");
//! ```

#![warn(missing_docs)]

pub mod openai;

use finex_domain::traits::LlmProvider as LlmProviderTrait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;

pub use openai::{OpenAiConfig, OpenAiProvider};

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Credential rejected or missing
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// Mock LLM provider for deterministic testing
///
/// Replies are keyed by the system instructions of a request, so one mock can
/// answer the statement and the summary prompts differently. Requests under
/// any other instructions get the default reply. Every request is recorded;
/// clones share the record.
///
/// # Examples
///
/// ```
/// use finex_llm::MockProvider;
/// use finex_domain::traits::LlmProvider;
///
/// let provider = MockProvider::new("{}")
///     .with_reply("Extract the statement.", "{\"line_items\": {}}")
///     .with_failure("Summarize the call.", "service unavailable");
///
/// assert_eq!(
///     provider.generate_structured("Extract the statement.", "Revenue 1,000").unwrap(),
///     "{\"line_items\": {}}"
/// );
/// assert!(provider.generate_structured("Summarize the call.", "Operator: hello").is_err());
/// assert_eq!(provider.generate_structured("Anything else.", "text").unwrap(), "{}");
/// assert_eq!(provider.call_count(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_reply: String,
    replies: HashMap<String, MockReply>,
    requests: Arc<Mutex<Vec<MockRequest>>>,
}

#[derive(Debug, Clone)]
enum MockReply {
    Text(String),
    Failure(String),
}

/// One request seen by a [`MockProvider`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockRequest {
    /// System instructions
    pub instructions: String,
    /// User prompt
    pub prompt: String,
}

impl MockProvider {
    /// Mock that answers every request with the same reply
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            default_reply: reply.into(),
            replies: HashMap::new(),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Answer requests under these instructions with `reply`
    pub fn with_reply(mut self, instructions: impl Into<String>, reply: impl Into<String>) -> Self {
        self.replies
            .insert(instructions.into(), MockReply::Text(reply.into()));
        self
    }

    /// Fail requests under these instructions with a communication error
    pub fn with_failure(mut self, instructions: impl Into<String>, message: impl Into<String>) -> Self {
        self.replies
            .insert(instructions.into(), MockReply::Failure(message.into()));
        self
    }

    /// Number of requests received
    pub fn call_count(&self) -> usize {
        self.recorded().len()
    }

    /// All requests received, oldest first
    pub fn requests(&self) -> Vec<MockRequest> {
        self.recorded().clone()
    }

    /// The most recent prompt received
    pub fn last_prompt(&self) -> Option<String> {
        self.recorded().last().map(|request| request.prompt.clone())
    }

    fn recorded(&self) -> MutexGuard<'_, Vec<MockRequest>> {
        // A panicking test thread cannot leave the log half-written
        self.requests.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("{}")
    }
}

impl LlmProviderTrait for MockProvider {
    type Error = LlmError;

    fn generate_structured(&self, instructions: &str, prompt: &str) -> Result<String, Self::Error> {
        self.recorded().push(MockRequest {
            instructions: instructions.to_string(),
            prompt: prompt.to_string(),
        });

        match self.replies.get(instructions) {
            Some(MockReply::Text(reply)) => Ok(reply.clone()),
            Some(MockReply::Failure(message)) => Err(LlmError::Communication(message.clone())),
            None => Ok(self.default_reply.clone()),
        }
    }

    fn model_name(&self) -> &str {
        "mock"
    }
}
