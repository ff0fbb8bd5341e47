//! Finex Gatekeeper
//!
//! Validates and annotates candidate records returned by the remote model.
//!
//! The Gatekeeper provides:
//! - Strict shape checks (a reply that is not a JSON object fails closed)
//! - Field-name validation against the canonical schema, with synonym remapping
//! - Per-cell status tagging (ok / missing / ambiguous)
//! - List coercion and placeholder filling for summary fields
//!
//! Annotation is a pure function of the candidate, the schema and the config:
//! running it twice on the same input yields identical records.
//!
//! # Examples
//!
//! ```
//! use finex_gatekeeper::Gatekeeper;
//! use finex_domain::CellStatus;
//!
//! let gatekeeper = Gatekeeper::default_config();
//! let candidate = serde_json::json!({
//!     "currency": "USD",
//!     "units": "in millions",
//!     "years": ["2023", "2022"],
//!     "line_items": {
//!         "Revenue": {"values": ["1,000", "N/A"], "notes": ""}
//!     }
//! });
//!
//! let statement = gatekeeper.annotate_statement(&candidate).unwrap();
//! assert_eq!(statement.cell("Revenue", "2022").unwrap().status, CellStatus::Missing);
//! ```

#![warn(missing_docs)]

mod annotator;
mod config;
mod error;
mod summary;
mod value;

pub use annotator::{Gatekeeper, UNKNOWN_CURRENCY, UNSPECIFIED_UNITS};
pub use config::{UnknownFieldPolicy, ValidationConfig};
pub use error::GatekeeperError;
