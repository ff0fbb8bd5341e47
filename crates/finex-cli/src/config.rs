//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use finex_domain::{LineItem, LineItemSchema};
use finex_extractor::ExtractorConfig;
use finex_gatekeeper::ValidationConfig;
use finex_llm::openai::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS};
use finex_llm::OpenAiConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Model endpoint settings
    #[serde(default)]
    pub llm: LlmSettings,

    /// Extraction pipeline settings
    #[serde(default)]
    pub extraction: ExtractorConfig,

    /// Validation settings
    #[serde(default)]
    pub validation: ValidationConfig,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Replacement line item table; the standard table when empty
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub line_items: Vec<LineItem>,
}

/// Model endpoint settings.
#[derive(Clone, Serialize, Deserialize)]
pub struct LlmSettings {
    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of an OpenAI-compatible API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// API key; `--api-key` and `OPENAI_API_KEY` take precedence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".finex").join("config.toml"))
    }

    /// Resolve an explicit path or fall back to the default one.
    pub fn resolve_path(path: Option<&Path>) -> Result<PathBuf> {
        match path {
            Some(path) => Ok(path.to_path_buf()),
            None => Self::path(),
        }
    }

    /// Load configuration from file, or defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file.
    pub fn save(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Serialize to TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Check the sections that carry their own rules.
    pub fn validate(&self) -> Result<()> {
        self.extraction.validate().map_err(CliError::Config)?;
        self.line_item_schema()?;
        if self.llm.timeout_secs == 0 {
            return Err(CliError::Config("llm.timeout_secs must be greater than 0".into()));
        }
        Ok(())
    }

    /// The line item table to extract against.
    pub fn line_item_schema(&self) -> Result<LineItemSchema> {
        if self.line_items.is_empty() {
            return Ok(LineItemSchema::standard());
        }
        LineItemSchema::new(self.line_items.clone())
            .map_err(|e| CliError::Config(format!("Invalid line item table: {}", e)))
    }

    /// Provider configuration for the given credential and model override.
    pub fn openai_config(&self, api_key: Option<&str>, model: Option<&str>) -> Result<OpenAiConfig> {
        let api_key = api_key
            .or(self.llm.api_key.as_deref())
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                CliError::Config("No API key. Pass --api-key or set OPENAI_API_KEY".into())
            })?;

        Ok(OpenAiConfig::new(api_key)
            .with_base_url(&self.llm.base_url)
            .with_model(model.unwrap_or(&self.llm.model))
            .with_timeout_secs(self.llm.timeout_secs))
    }
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            api_key: None,
        }
    }
}

impl std::fmt::Debug for LlmSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmSettings")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}
