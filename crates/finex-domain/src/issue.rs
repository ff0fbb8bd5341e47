//! Issues recorded while validating a model reply

use serde::{Deserialize, Serialize};

/// A non-fatal problem found while annotating a candidate record
///
/// Issues travel with the annotated record so that an exported document still
/// shows what was corrected, dropped or left unverified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationIssue {
    /// Field name is neither canonical nor a known synonym
    UnknownField {
        /// Name as returned by the model
        field: String,
        /// Whether the field was kept in the record
        kept: bool,
    },

    /// Field name was a synonym and was mapped onto its canonical item
    SynonymRemapped {
        /// Name as returned by the model
        from: String,
        /// Canonical name it was mapped onto
        to: String,
    },

    /// A row's value count did not match the number of reporting periods
    PeriodCountMismatch {
        /// Canonical field name
        field: String,
        /// Number of periods
        expected: usize,
        /// Number of values returned
        actual: usize,
    },

    /// An enum field held a value outside its declared choices
    UnrecognizedChoice {
        /// Field name
        field: String,
        /// Value as returned
        value: String,
    },

    /// The reply carried no period labels; placeholders were generated
    MissingPeriods,

    /// One period label was blank; a positional placeholder stands in for it
    UnlabeledPeriod {
        /// One-based column position of the period
        position: usize,
        /// Placeholder label written in its place
        label: String,
    },
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationIssue::UnknownField { field, kept: true } => {
                write!(f, "unknown field '{}' kept", field)
            }
            ValidationIssue::UnknownField { field, kept: false } => {
                write!(f, "unknown field '{}' dropped", field)
            }
            ValidationIssue::SynonymRemapped { from, to } => {
                write!(f, "'{}' mapped to '{}'", from, to)
            }
            ValidationIssue::PeriodCountMismatch {
                field,
                expected,
                actual,
            } => write!(
                f,
                "'{}' has {} value(s) for {} period(s)",
                field, actual, expected
            ),
            ValidationIssue::UnrecognizedChoice { field, value } => {
                write!(f, "'{}' has unrecognized value '{}'", field, value)
            }
            ValidationIssue::MissingPeriods => write!(f, "no period labels returned"),
            ValidationIssue::UnlabeledPeriod { position, label } => {
                write!(f, "period {} has no label, shown as '{}'", position, label)
            }
        }
    }
}
