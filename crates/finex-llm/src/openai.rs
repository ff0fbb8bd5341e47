//! OpenAI-compatible Provider Implementation
//!
//! Talks to any endpoint that implements the `/chat/completions` API.
//!
//! # Features
//!
//! - Explicit configuration object, fixed at construction
//! - Every request carries system instructions and asks for a JSON object
//! - Client-level request timeout
//!
//! The provider makes exactly one request per call. Retry and backoff are left
//! to whoever wraps the provider.
//!
//! # Examples
//!
//! ```no_run
//! use finex_llm::{OpenAiConfig, OpenAiProvider};
//!
//! let config = OpenAiConfig::new("sk-...").with_model("gpt-4o-mini");
//! let provider = OpenAiProvider::new(config).unwrap();
//! ```

use crate::LlmError;
use finex_domain::traits::LlmProvider as LlmProviderTrait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default model
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Default timeout for LLM requests (120 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Provider configuration
///
/// Built once by the caller and handed to [`OpenAiProvider::new`]; the provider
/// never mutates it.
#[derive(Clone)]
pub struct OpenAiConfig {
    /// API credential
    pub api_key: String,

    /// Base URL, without the trailing `/chat/completions`
    pub base_url: String,

    /// Model identifier
    pub model: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl OpenAiConfig {
    /// Configuration with default endpoint, model and timeout
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Override the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the request timeout
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

impl std::fmt::Debug for OpenAiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Chat-completions provider
pub struct OpenAiProvider {
    config: OpenAiConfig,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    response_format: ResponseFormat,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Deserialize)]
struct ChatReply {
    content: Option<String>,
}

impl OpenAiProvider {
    /// Create a provider from an explicit configuration
    ///
    /// # Errors
    ///
    /// Returns `Authentication` if the key is blank, or `Other` if the HTTP
    /// client cannot be built.
    pub fn new(config: OpenAiConfig) -> Result<Self, LlmError> {
        if config.api_key.trim().is_empty() {
            return Err(LlmError::Authentication("API key is empty".to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LlmError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// The configuration this provider was built with
    pub fn config(&self) -> &OpenAiConfig {
        &self.config
    }

    /// Send one JSON-mode chat request and return the assistant message text
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The endpoint cannot be reached
    /// - The credential is rejected
    /// - The model does not exist
    /// - The reply has no message content
    pub async fn chat(&self, instructions: &str, prompt: &str) -> Result<String, LlmError> {
        let body = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: instructions,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            response_format: ResponseFormat {
                kind: "json_object",
            },
        };

        debug!(
            model = %self.config.model,
            prompt_chars = prompt.chars().count(),
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(self.config.completions_url())
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(map_status(status, &self.config.model, error_text));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        first_message(parsed)
    }

    fn block_on_chat(&self, instructions: &str, prompt: &str) -> Result<String, LlmError> {
        // Blocking wrapper for async function
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| LlmError::Other(format!("Failed to start runtime: {}", e)))?;
        runtime.block_on(self.chat(instructions, prompt))
    }
}

fn map_status(status: reqwest::StatusCode, model: &str, body: String) -> LlmError {
    match status {
        reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
            LlmError::Authentication(format!("HTTP {}", status))
        }
        reqwest::StatusCode::NOT_FOUND => LlmError::ModelNotAvailable(model.to_string()),
        reqwest::StatusCode::TOO_MANY_REQUESTS => LlmError::RateLimitExceeded,
        _ => LlmError::Communication(format!("HTTP {}: {}", status, body)),
    }
}

fn first_message(response: ChatResponse) -> Result<String, LlmError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| LlmError::InvalidResponse("Reply has no message content".to_string()))
}

impl LlmProviderTrait for OpenAiProvider {
    type Error = LlmError;

    fn generate_structured(&self, instructions: &str, prompt: &str) -> Result<String, Self::Error> {
        self.block_on_chat(instructions, prompt)
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}
