//! Configuration for the Extractor

use serde::{Deserialize, Serialize};

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Character budget for text sent to the model; longer text is cut off
    pub max_text_chars: usize,

    /// Fewer non-whitespace characters than this counts as empty input
    pub min_text_chars: usize,

    /// Fill blank currency/units from patterns found in the document text
    pub detect_units: bool,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_text_chars == 0 {
            return Err("max_text_chars must be greater than 0".to_string());
        }
        if self.min_text_chars == 0 {
            return Err("min_text_chars must be greater than 0".to_string());
        }
        if self.min_text_chars > self.max_text_chars {
            return Err("min_text_chars cannot exceed max_text_chars".to_string());
        }
        Ok(())
    }
}

impl Default for ExtractorConfig {
    /// Default configuration with balanced settings
    fn default() -> Self {
        Self {
            max_text_chars: 20_000,
            min_text_chars: 1,
            detect_units: true,
        }
    }
}

impl ExtractorConfig {
    /// Aggressive preset: small budget for cheap, fast requests
    pub fn aggressive() -> Self {
        Self {
            max_text_chars: 8_000,
            min_text_chars: 1,
            detect_units: true,
        }
    }

    /// Lenient preset: large budget for long transcripts
    pub fn lenient() -> Self {
        Self {
            max_text_chars: 100_000,
            min_text_chars: 1,
            detect_units: true,
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
