//! Gatekeeper configuration

use serde::{Deserialize, Serialize};

/// What to do with a returned field that the schema does not know
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownFieldPolicy {
    /// Remove the field and record an issue
    #[default]
    Drop,

    /// Keep the field after the canonical ones and record an issue
    Flag,
}

/// Configuration for validation rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Handling of field names outside the schema
    pub unknown_fields: UnknownFieldPolicy,

    /// Map synonym field names onto their canonical line item
    pub remap_synonyms: bool,

    /// Emit an all-`N/A` row for canonical items the model left out
    pub fill_absent_items: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            unknown_fields: UnknownFieldPolicy::Drop,
            remap_synonyms: true,
            fill_absent_items: false,
        }
    }
}

impl ValidationConfig {
    /// Create a permissive configuration (keep everything the model returned)
    pub fn permissive() -> Self {
        Self {
            unknown_fields: UnknownFieldPolicy::Flag,
            remap_synonyms: true,
            fill_absent_items: false,
        }
    }

    /// Create a strict configuration (canonical names only, full grid)
    pub fn strict() -> Self {
        Self {
            unknown_fields: UnknownFieldPolicy::Drop,
            remap_synonyms: false,
            fill_absent_items: true,
        }
    }
}
