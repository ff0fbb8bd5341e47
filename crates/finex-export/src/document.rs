//! JSON document export keyed by source filename

use crate::error::ExportError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Annotated records from several input files, collected into one artifact
///
/// Entries are keyed by source filename and serialize in key order, so the
/// same inputs always produce the same bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExportDocument<T> {
    entries: BTreeMap<String, T>,
}

impl<T> ExportDocument<T> {
    /// Create an empty document
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Add a record; a later record for the same file replaces the earlier one
    pub fn insert(&mut self, source_name: impl Into<String>, record: T) -> Option<T> {
        self.entries.insert(source_name.into(), record)
    }

    /// Record for a file
    pub fn get(&self, source_name: &str) -> Option<&T> {
        self.entries.get(source_name)
    }

    /// Number of files in the document
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the document is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in filename order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(name, record)| (name.as_str(), record))
    }
}

impl<T> Default for ExportDocument<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<(String, T)> for ExportDocument<T> {
    fn from_iter<I: IntoIterator<Item = (String, T)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<T: Serialize> ExportDocument<T> {
    /// Pretty-printed JSON
    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl<T: DeserializeOwned> ExportDocument<T> {
    /// Parse a previously exported document
    pub fn from_json(json: &str) -> Result<Self, ExportError> {
        Ok(serde_json::from_str(json)?)
    }
}
