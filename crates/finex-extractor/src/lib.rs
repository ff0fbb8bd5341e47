//! Finex Extractor
//!
//! Turns financial documents into annotated records using an LLM.
//!
//! # Overview
//!
//! The Extractor drives both use cases: income-statement extraction from
//! filings and summaries of earnings-call transcripts. It never trusts the
//! model: replies are parsed strictly and pass through the gatekeeper before
//! anything reaches an exporter.
//!
//! # Architecture
//!
//! ```text
//! Document → TextExtractor → truncate → prompt → LLM → parse → Gatekeeper → record
//! ```
//!
//! # Key Features
//!
//! - **Text backends**: PDF via `pdf-extract`, plain text for transcripts
//! - **Bounded input**: text is cut to a character budget, and the cut is reported
//! - **Strict parsing**: anything that is not a JSON object is rejected
//! - **Unit detection**: currency and units fall back to what the text mentions
//!
//! # Example Usage
//!
//! ```no_run
//! use finex_extractor::{DocumentRequest, Extractor, ExtractorConfig};
//! use finex_gatekeeper::Gatekeeper;
//! use finex_llm::MockProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let llm = MockProvider::new(r#"{"years": ["2023"], "line_items": {}}"#);
//! let extractor = Extractor::new(llm, Gatekeeper::default_config(), ExtractorConfig::default())?;
//!
//! let request = DocumentRequest::new("10-K.pdf", "Revenue 1,000 (in thousands, USD)");
//! let result = extractor.extract_statement(request).await?;
//!
//! println!("Rows: {}", result.statement.rows.len());
//! println!("Truncated: {}", result.metadata.truncated);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod error;
mod config;
mod types;
mod prompt;
mod parser;
mod truncate;
mod units;
mod text;
mod extractor;

#[cfg(test)]
mod tests;

pub use error::ExtractorError;
pub use config::ExtractorConfig;
pub use types::{DocumentRequest, ExtractionMetadata, StatementExtraction, SummaryExtraction};
pub use prompt::{PromptBuilder, STATEMENT_SYSTEM_PROMPT, SUMMARY_SYSTEM_PROMPT};
pub use parser::parse_llm_response;
pub use truncate::truncate_chars;
pub use units::{detect_currency, detect_units};
pub use text::{extract_file, DocumentKind, PdfTextExtractor, PlainTextExtractor};
pub use extractor::Extractor;
