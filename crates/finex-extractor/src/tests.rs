//! Integration tests for the Extractor

#[cfg(test)]
mod tests {
    use crate::{
        DocumentRequest, Extractor, ExtractorConfig, ExtractorError, STATEMENT_SYSTEM_PROMPT,
        SUMMARY_SYSTEM_PROMPT,
    };
    use finex_domain::{CellStatus, FieldValue, ValidationIssue, NOT_MENTIONED};
    use finex_gatekeeper::{Gatekeeper, UnknownFieldPolicy, ValidationConfig};
    use finex_llm::MockProvider;

    const STATEMENT_REPLY: &str = r#"{
        "currency": "USD",
        "units": "in thousands",
        "years": ["2023", "2022"],
        "line_items": {
            "Revenue": {"values": ["1,000", "N/A"], "notes": ""},
            "Net Income": {"values": ["(120)", "80"], "notes": "Ambiguous: restated"},
            "EBITDA": {"values": ["300", "250"], "notes": ""}
        }
    }"#;

    fn extractor(llm: MockProvider) -> Extractor<MockProvider> {
        Extractor::new(llm, Gatekeeper::default_config(), ExtractorConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_full_statement_flow() {
        let extractor = extractor(MockProvider::new(STATEMENT_REPLY));

        let request = DocumentRequest::new("10-K.pdf", "Total revenue 1,000 ...");
        let result = extractor.extract_statement(request).await.unwrap();
        let statement = &result.statement;

        assert_eq!(statement.currency, "USD");
        assert_eq!(statement.periods, vec!["2023", "2022"]);

        let revenue = statement.cell("Revenue", "2023").unwrap();
        assert_eq!((revenue.value.as_str(), revenue.status), ("1,000", CellStatus::Ok));
        assert_eq!(statement.cell("Revenue", "2022").unwrap().status, CellStatus::Missing);

        let net_income = statement.cell("Net Income", "2023").unwrap();
        assert_eq!(net_income.value, "(120)");
        assert_eq!(net_income.status, CellStatus::Ambiguous);

        // Unknown fields are dropped by default, but recorded
        assert!(statement.row("EBITDA").is_none());
        assert!(statement.issues.contains(&ValidationIssue::UnknownField {
            field: "EBITDA".to_string(),
            kept: false,
        }));

        assert_eq!(result.metadata.source_name, "10-K.pdf");
        assert_eq!(result.metadata.model_name, "mock");
        assert!(!result.metadata.truncated);
    }

    #[tokio::test]
    async fn test_flag_policy_keeps_unknown_rows() {
        let config = ValidationConfig {
            unknown_fields: UnknownFieldPolicy::Flag,
            ..ValidationConfig::default()
        };
        let gatekeeper = Gatekeeper::new(
            config,
            finex_domain::LineItemSchema::standard(),
            finex_domain::SummarySchema::earnings_call(),
        );
        let extractor = Extractor::new(
            MockProvider::new(STATEMENT_REPLY),
            gatekeeper,
            ExtractorConfig::default(),
        )
        .unwrap();

        let result = extractor
            .extract_statement(DocumentRequest::new("10-K.pdf", "text"))
            .await
            .unwrap();

        assert!(result.statement.row("EBITDA").is_some());
    }

    #[tokio::test]
    async fn test_statement_with_invalid_json() {
        let extractor = extractor(MockProvider::new("Sure! Here is the data you asked for."));

        let result = extractor
            .extract_statement(DocumentRequest::new("10-K.pdf", "Revenue 1,000"))
            .await;
        assert!(matches!(result, Err(ExtractorError::MalformedExtractionOutput(_))));
    }

    #[tokio::test]
    async fn test_statement_without_line_items() {
        let extractor = extractor(MockProvider::new(r#"{"currency": "USD"}"#));

        let result = extractor
            .extract_statement(DocumentRequest::new("10-K.pdf", "Revenue 1,000"))
            .await;
        assert!(matches!(result, Err(ExtractorError::MalformedExtractionOutput(_))));
    }

    #[tokio::test]
    async fn test_empty_input_aborts_statement() {
        let llm = MockProvider::new(STATEMENT_REPLY);
        let extractor = extractor(llm.clone());

        let result = extractor
            .extract_statement(DocumentRequest::new("scan.pdf", "  \n\t "))
            .await;

        assert!(matches!(result, Err(ExtractorError::EmptyInput(name)) if name == "scan.pdf"));
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_empty_input_degrades_summary() {
        let llm = MockProvider::new("{}");
        let extractor = extractor(llm.clone());

        let result = extractor
            .summarize_call(DocumentRequest::new("call.pdf", ""))
            .await
            .unwrap();

        assert!(result.summary.degraded);
        assert_eq!(result.metadata.model_name, "none");
        assert_eq!(
            result.summary.get("executive_summary"),
            Some(&FieldValue::Text(NOT_MENTIONED.to_string()))
        );
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_summary_flow() {
        let extractor = extractor(MockProvider::new(
            r#"```json
            {
                "executive_summary": "Volumes grew 12% on export demand.",
                "management_tone": "optimistic",
                "confidence_level": "High",
                "key_positives": "Strong margins",
                "key_concerns": []
            }
            ```"#,
        ));

        let result = extractor
            .summarize_call(DocumentRequest::new("q3-call.txt", "Operator: welcome..."))
            .await
            .unwrap();
        let summary = &result.summary;

        assert!(!summary.degraded);
        assert_eq!(
            summary.get("key_positives"),
            Some(&FieldValue::List(vec!["Strong margins".to_string()]))
        );
        assert_eq!(
            summary.get("key_concerns"),
            Some(&FieldValue::List(vec![NOT_MENTIONED.to_string()]))
        );
        assert_eq!(
            summary.get("management_tone"),
            Some(&FieldValue::Text("Optimistic".to_string()))
        );
    }

    #[tokio::test]
    async fn test_long_text_is_truncated() {
        let llm = MockProvider::new(STATEMENT_REPLY);
        let config = ExtractorConfig {
            max_text_chars: 10,
            ..ExtractorConfig::default()
        };
        let extractor = Extractor::new(llm.clone(), Gatekeeper::default_config(), config).unwrap();

        let text = "Revenue 1,000; Net Income 200; Gross Profit 400";
        let result = extractor
            .extract_statement(DocumentRequest::new("10-K.pdf", text))
            .await
            .unwrap();

        assert!(result.metadata.truncated);
        assert_eq!(result.metadata.input_chars, text.chars().count());
        assert_eq!(result.metadata.submitted_chars, 10);

        let prompt = llm.last_prompt().unwrap();
        assert!(prompt.contains("---\nRevenue 1,\n---"));
        assert!(!prompt.contains("Gross Profit 400"));
    }

    #[tokio::test]
    async fn test_units_detected_from_text() {
        let extractor = extractor(MockProvider::new(
            r#"{"currency": "", "years": ["2023"], "line_items": {"Revenue": {"values": ["5"], "notes": ""}}}"#,
        ));

        let result = extractor
            .extract_statement(DocumentRequest::new(
                "10-K.pdf",
                "(INR in millions) Revenue from operations 5",
            ))
            .await
            .unwrap();

        assert_eq!(result.statement.currency, "INR");
        assert_eq!(result.statement.units, "in millions");
    }

    #[tokio::test]
    async fn test_llm_error_is_reported() {
        let llm = MockProvider::new(STATEMENT_REPLY)
            .with_failure(STATEMENT_SYSTEM_PROMPT, "service unavailable");
        let extractor = extractor(llm);

        let result = extractor
            .extract_statement(DocumentRequest::new("10-K.pdf", "Revenue 1,000"))
            .await;
        assert!(matches!(result, Err(ExtractorError::Llm(_))));
    }

    #[tokio::test]
    async fn test_one_provider_serves_both_operations() {
        let llm = MockProvider::default()
            .with_reply(STATEMENT_SYSTEM_PROMPT, STATEMENT_REPLY)
            .with_reply(
                SUMMARY_SYSTEM_PROMPT,
                r#"{"executive_summary": "Flat quarter.", "management_tone": "Neutral"}"#,
            );
        let extractor = extractor(llm.clone());

        let statement = extractor
            .extract_statement(DocumentRequest::new("10-K.pdf", "Revenue 1,000"))
            .await
            .unwrap();
        let summary = extractor
            .summarize_call(DocumentRequest::new("call.txt", "Operator: welcome"))
            .await
            .unwrap();

        assert_eq!(statement.statement.cell("Revenue", "2023").unwrap().value, "1,000");
        assert_eq!(
            summary.summary.get("executive_summary"),
            Some(&FieldValue::Text("Flat quarter.".to_string()))
        );

        let requests = llm.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].instructions, STATEMENT_SYSTEM_PROMPT);
        assert_eq!(requests[1].instructions, SUMMARY_SYSTEM_PROMPT);
    }
}
