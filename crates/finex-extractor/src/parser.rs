//! Parse LLM output into candidate records
//!
//! The reply is parsed with `serde_json` and nothing else. Anything that is not
//! a JSON object fails closed.

use crate::error::ExtractorError;
use serde_json::Value;

/// Parse an LLM reply into an untyped candidate record
pub fn parse_llm_response(response: &str) -> Result<Value, ExtractorError> {
    // LLMs sometimes wrap JSON in markdown code blocks
    let json_str = extract_json(response)?;

    let json: Value = serde_json::from_str(json_str)?;

    if !json.is_object() {
        return Err(ExtractorError::MalformedExtractionOutput(
            "Expected a JSON object".to_string(),
        ));
    }

    Ok(json)
}

/// Extract JSON from response, handling markdown code blocks
fn extract_json(response: &str) -> Result<&str, ExtractorError> {
    let trimmed = response.trim();

    if trimmed.is_empty() {
        return Err(ExtractorError::MalformedExtractionOutput(
            "Empty reply".to_string(),
        ));
    }

    let Some(fenced) = trimmed.strip_prefix("```") else {
        return Ok(trimmed);
    };

    // Skip the fence line (``` or ```json) and the closing fence
    let body = match fenced.find('\n') {
        Some(idx) => &fenced[idx + 1..],
        None => {
            return Err(ExtractorError::MalformedExtractionOutput(
                "Empty code block".to_string(),
            ))
        }
    };
    let body = body.trim_end();
    Ok(body.strip_suffix("```").unwrap_or(body).trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_json() {
        let response = r#"{"currency": "USD", "line_items": {}}"#;
        let value = parse_llm_response(response).unwrap();
        assert_eq!(value["currency"], "USD");
    }

    #[test]
    fn test_parse_json_with_markdown_wrapper() {
        let response = "```json\n{\"units\": \"in millions\"}\n```";
        let value = parse_llm_response(response).unwrap();
        assert_eq!(value["units"], "in millions");
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = parse_llm_response("This is not JSON");
        assert!(matches!(result, Err(ExtractorError::MalformedExtractionOutput(_))));
    }

    #[test]
    fn test_python_literals_rejected() {
        // Single quotes and None are not JSON
        let result = parse_llm_response("{'currency': 'USD', 'units': None}");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_json_not_object() {
        let result = parse_llm_response(r#"["Revenue", "Net Income"]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_reply() {
        assert!(parse_llm_response("   ").is_err());
        assert!(parse_llm_response("```").is_err());
    }

    #[test]
    fn test_extract_json_from_plain_json() {
        let json = r#"{"key": "value"}"#;
        assert_eq!(extract_json(json).unwrap(), json);
    }

    #[test]
    fn test_extract_json_from_markdown_without_language() {
        let response = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(extract_json(response).unwrap(), r#"{"key": "value"}"#);
    }

    #[test]
    fn test_trailing_text_rejected() {
        let result = parse_llm_response("{\"a\": 1} and some commentary");
        assert!(result.is_err());
    }
}
