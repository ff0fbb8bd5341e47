//! Core Extractor implementation

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::parser::parse_llm_response;
use crate::prompt::{PromptBuilder, STATEMENT_SYSTEM_PROMPT, SUMMARY_SYSTEM_PROMPT};
use crate::truncate::truncate_chars;
use crate::types::{DocumentRequest, ExtractionMetadata, StatementExtraction, SummaryExtraction};
use crate::units::{detect_currency, detect_units};
use finex_domain::traits::LlmProvider;
use finex_domain::AnnotatedStatement;
use finex_gatekeeper::{Gatekeeper, UNKNOWN_CURRENCY, UNSPECIFIED_UNITS};
use std::sync::Arc;
use std::time::{Instant, SystemTime, UNIX_EPOCH};
use tracing::{debug, info, warn};

/// The Extractor turns document text into annotated records
///
/// It owns no mutable state between requests; one `Extractor` can serve any
/// number of sequential documents.
pub struct Extractor<L>
where
    L: LlmProvider,
{
    llm_provider: Arc<L>,
    gatekeeper: Gatekeeper,
    config: ExtractorConfig,
}

/// Text prepared for submission
struct Submission {
    text: String,
    input_chars: usize,
    submitted_chars: usize,
    truncated: bool,
}

impl<L> Extractor<L>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    /// Create a new Extractor
    ///
    /// # Errors
    ///
    /// `Config` if the configuration does not validate.
    pub fn new(
        llm_provider: L,
        gatekeeper: Gatekeeper,
        config: ExtractorConfig,
    ) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;

        Ok(Self {
            llm_provider: Arc::new(llm_provider),
            gatekeeper,
            config,
        })
    }

    /// The gatekeeper used to annotate replies
    pub fn gatekeeper(&self) -> &Gatekeeper {
        &self.gatekeeper
    }

    /// The active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract an annotated income statement
    ///
    /// # Errors
    ///
    /// - `EmptyInput` if the document has no usable text; the model is not called
    /// - `Llm` if the provider fails
    /// - `MalformedExtractionOutput` if the reply is not a valid statement record
    pub async fn extract_statement(
        &self,
        request: DocumentRequest,
    ) -> Result<StatementExtraction, ExtractorError> {
        let started = Instant::now();

        if !self.has_usable_text(&request.text) {
            warn!("No usable text in '{}'", request.source_name);
            return Err(ExtractorError::EmptyInput(request.source_name));
        }

        info!(
            "Extracting statement from '{}', {} chars",
            request.source_name,
            request.text.chars().count()
        );

        let submission = self.prepare(&request);
        let prompt = PromptBuilder::new(&submission.text).statement(self.gatekeeper.line_items());
        debug!("Prompt length: {} chars", prompt.len());

        let reply = self.call_llm(STATEMENT_SYSTEM_PROMPT, prompt).await?;
        debug!("LLM response length: {} chars", reply.len());

        let candidate = parse_llm_response(&reply)?;
        let mut statement = self.gatekeeper.annotate_statement(&candidate)?;

        if self.config.detect_units {
            fill_from_text(&mut statement, &request.text);
        }

        info!(
            "Annotated {} line items over {} periods ({} missing, {} ambiguous cells, {} issues)",
            statement.rows.len(),
            statement.periods.len(),
            statement.count_status(finex_domain::CellStatus::Missing),
            statement.count_status(finex_domain::CellStatus::Ambiguous),
            statement.issues.len()
        );

        Ok(StatementExtraction {
            statement,
            metadata: self.metadata(&request, &submission, self.llm_provider.model_name(), started),
        })
    }

    /// Summarize an earnings-call transcript
    ///
    /// A document with no usable text yields a degraded placeholder summary
    /// without calling the model.
    ///
    /// # Errors
    ///
    /// - `Llm` if the provider fails
    /// - `MalformedExtractionOutput` if the reply is not a JSON object
    pub async fn summarize_call(
        &self,
        request: DocumentRequest,
    ) -> Result<SummaryExtraction, ExtractorError> {
        let started = Instant::now();

        if !self.has_usable_text(&request.text) {
            warn!(
                "No usable text in '{}', producing placeholder summary",
                request.source_name
            );
            let submission = Submission {
                text: String::new(),
                input_chars: request.text.chars().count(),
                submitted_chars: 0,
                truncated: false,
            };
            return Ok(SummaryExtraction {
                summary: self.gatekeeper.placeholder_summary(),
                metadata: self.metadata(&request, &submission, "none", started),
            });
        }

        info!("Summarizing '{}'", request.source_name);

        let submission = self.prepare(&request);
        let prompt = PromptBuilder::new(&submission.text).summary(self.gatekeeper.summary_schema());

        let reply = self.call_llm(SUMMARY_SYSTEM_PROMPT, prompt).await?;
        let candidate = parse_llm_response(&reply)?;
        let summary = self.gatekeeper.normalize_summary(&candidate)?;

        if !summary.issues.is_empty() {
            debug!("Summary recorded {} issues", summary.issues.len());
        }

        Ok(SummaryExtraction {
            summary,
            metadata: self.metadata(&request, &submission, self.llm_provider.model_name(), started),
        })
    }

    fn has_usable_text(&self, text: &str) -> bool {
        text.chars().filter(|c| !c.is_whitespace()).count() >= self.config.min_text_chars
    }

    fn prepare(&self, request: &DocumentRequest) -> Submission {
        let input_chars = request.text.chars().count();
        let (kept, truncated) = truncate_chars(&request.text, self.config.max_text_chars);

        if truncated {
            warn!(
                "Text of '{}' truncated from {} to {} chars",
                request.source_name, input_chars, self.config.max_text_chars
            );
        }

        Submission {
            text: kept.to_string(),
            input_chars,
            submitted_chars: kept.chars().count(),
            truncated,
        }
    }

    fn metadata(
        &self,
        request: &DocumentRequest,
        submission: &Submission,
        model_name: &str,
        started: Instant,
    ) -> ExtractionMetadata {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        ExtractionMetadata {
            source_name: request.source_name.clone(),
            timestamp,
            model_name: model_name.to_string(),
            input_chars: submission.input_chars,
            submitted_chars: submission.submitted_chars,
            truncated: submission.truncated,
            processing_time_ms: started.elapsed().as_millis() as u64,
        }
    }

    /// Call LLM provider
    async fn call_llm(&self, instructions: &'static str, prompt: String) -> Result<String, ExtractorError> {
        let llm = Arc::clone(&self.llm_provider);

        // Call in a blocking context since LlmProvider is not async
        tokio::task::spawn_blocking(move || {
            llm.generate_structured(instructions, &prompt)
                .map_err(|e| ExtractorError::Llm(e.to_string()))
        })
        .await
        .map_err(|e| ExtractorError::Llm(format!("Task join error: {}", e)))?
    }
}

/// Replace unknown currency/units with what the document text mentions
fn fill_from_text(statement: &mut AnnotatedStatement, text: &str) {
    if is_unknown(&statement.currency, UNKNOWN_CURRENCY) {
        if let Some(currency) = detect_currency(text) {
            debug!("Currency detected from text: {}", currency);
            statement.currency = currency;
        }
    }
    if is_unknown(&statement.units, UNSPECIFIED_UNITS) {
        if let Some(units) = detect_units(text) {
            debug!("Units detected from text: {}", units);
            statement.units = units;
        }
    }
}

fn is_unknown(value: &str, placeholder: &str) -> bool {
    value.eq_ignore_ascii_case(placeholder) || value.eq_ignore_ascii_case("unknown")
}

#[cfg(test)]
mod tests {
    use super::*;
    use finex_llm::MockProvider;

    fn statement(currency: &str, units: &str) -> AnnotatedStatement {
        AnnotatedStatement {
            currency: currency.to_string(),
            units: units.to_string(),
            periods: Vec::new(),
            rows: Vec::new(),
            issues: Vec::new(),
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ExtractorConfig {
            max_text_chars: 0,
            ..ExtractorConfig::default()
        };
        let result = Extractor::new(MockProvider::default(), Gatekeeper::default_config(), config);
        assert!(matches!(result, Err(ExtractorError::Config(_))));
    }

    #[test]
    fn test_usable_text_ignores_whitespace() {
        let config = ExtractorConfig {
            min_text_chars: 3,
            ..ExtractorConfig::default()
        };
        let extractor =
            Extractor::new(MockProvider::default(), Gatekeeper::default_config(), config).unwrap();

        assert!(!extractor.has_usable_text(" \n\t a b "));
        assert!(extractor.has_usable_text("a b c"));
    }

    #[test]
    fn test_fill_from_text_replaces_unknowns() {
        let mut s = statement(UNKNOWN_CURRENCY, UNSPECIFIED_UNITS);
        fill_from_text(&mut s, "Figures in USD, in millions");
        assert_eq!(s.currency, "USD");
        assert_eq!(s.units, "in millions");
    }

    #[test]
    fn test_fill_from_text_keeps_model_values() {
        let mut s = statement("EUR", "in thousands");
        fill_from_text(&mut s, "Figures in USD, in millions");
        assert_eq!(s.currency, "EUR");
        assert_eq!(s.units, "in thousands");
    }

    #[test]
    fn test_fill_from_text_without_mentions() {
        let mut s = statement("unknown", UNSPECIFIED_UNITS);
        fill_from_text(&mut s, "Revenue 1,000");
        assert_eq!(s.currency, "unknown");
        assert_eq!(s.units, UNSPECIFIED_UNITS);
    }
}
