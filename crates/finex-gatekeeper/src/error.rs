//! Gatekeeper error types

use thiserror::Error;

/// Errors that can occur during gatekeeper operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatekeeperError {
    /// Candidate record does not have the expected top-level shape
    #[error("Malformed record: {0}")]
    MalformedRecord(String),
}
