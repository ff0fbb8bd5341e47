//! Cell module - per-period values and their status

use serde::{Deserialize, Serialize};

/// Sentinel for a value the source document does not provide
pub const NOT_AVAILABLE: &str = "N/A";

/// Placeholder for a summary field the source document never touches on
pub const NOT_MENTIONED: &str = "Not mentioned";

/// Marker a note must contain (any letter case) for its row to be ambiguous
pub const AMBIGUITY_MARKER: &str = "ambiguous";

/// Status of a single annotated cell
///
/// Drives presentation: missing and ambiguous cells are highlighted in the
/// exported spreadsheet, ok cells are left plain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellStatus {
    /// Value was extracted without caveats
    Ok,

    /// Value is the `N/A` sentinel
    Missing,

    /// Value is present but the row's note flags it as ambiguous
    Ambiguous,
}

impl CellStatus {
    /// Get the status name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            CellStatus::Ok => "ok",
            CellStatus::Missing => "missing",
            CellStatus::Ambiguous => "ambiguous",
        }
    }

    /// Classify a cell value given the free-text note of its row
    ///
    /// The sentinel check wins: an `N/A` cell in an ambiguous row is missing.
    pub fn classify(value: &str, notes: &str) -> Self {
        if is_not_available(value) {
            CellStatus::Missing
        } else if notes_flag_ambiguity(notes) {
            CellStatus::Ambiguous
        } else {
            CellStatus::Ok
        }
    }
}

impl std::fmt::Display for CellStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value for one line item in one reporting period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedCell {
    /// Displayed value, verbatim from the model (or `N/A`)
    pub value: String,

    /// Status derived from the value and the row note
    pub status: CellStatus,
}

impl AnnotatedCell {
    /// Create a cell, deriving its status from the row note
    pub fn classified(value: impl Into<String>, notes: &str) -> Self {
        let value = value.into();
        let status = CellStatus::classify(&value, notes);
        Self { value, status }
    }

    /// A missing cell carrying the `N/A` sentinel
    pub fn missing() -> Self {
        Self {
            value: NOT_AVAILABLE.to_string(),
            status: CellStatus::Missing,
        }
    }

    /// Whether the cell is tagged missing
    pub fn is_missing(&self) -> bool {
        self.status == CellStatus::Missing
    }
}

/// Whether a raw value is the `N/A` sentinel (surrounding whitespace and case ignored)
pub fn is_not_available(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case(NOT_AVAILABLE)
}

/// Whether a note contains the ambiguity marker in any letter case
pub fn notes_flag_ambiguity(notes: &str) -> bool {
    notes.to_lowercase().contains(AMBIGUITY_MARKER)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: any note containing the marker flags a non-sentinel value
        #[test]
        fn test_marker_anywhere_flags_ambiguity(
            prefix in "[a-z ]{0,12}",
            suffix in "[a-z ]{0,12}",
            upper in any::<bool>(),
            value in "[0-9,()]{1,10}",
        ) {
            let marker = if upper { "AMBIGUOUS" } else { "Ambiguous" };
            let notes = format!("{}{}{}", prefix, marker, suffix);
            prop_assert_eq!(CellStatus::classify(&value, &notes), CellStatus::Ambiguous);
        }

        /// Property: the sentinel is always missing regardless of the note
        #[test]
        fn test_sentinel_always_missing(notes in ".{0,40}") {
            prop_assert_eq!(CellStatus::classify("N/A", &notes), CellStatus::Missing);
        }
    }
}
