//! LLM prompt engineering for statement extraction and call summaries

use finex_domain::{LineItemSchema, SummarySchema};

/// System instructions for statement extraction
pub const STATEMENT_SYSTEM_PROMPT: &str = "You are a financial extractor.";

/// System instructions for call summaries
pub const SUMMARY_SYSTEM_PROMPT: &str =
    "You are an equity research analyst summarizing earnings calls.";

/// Builds prompts for the LLM
pub struct PromptBuilder<'a> {
    text: &'a str,
}

impl<'a> PromptBuilder<'a> {
    /// Create a new prompt builder over already-truncated text
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    /// Build the income-statement extraction prompt
    pub fn statement(&self, schema: &LineItemSchema) -> String {
        let names: Vec<&str> = schema.names().collect();
        let mut prompt = String::new();

        // 1. Instructions, with the canonical table embedded verbatim
        prompt.push_str("Extract income statement line items from the following text.\n");
        prompt.push_str(&format!("Map to these standard items: {}.\n", names.join(", ")));
        prompt.push_str("Use these synonyms to match variations:\n");
        prompt.push_str(&schema.describe());
        prompt.push('\n');
        prompt.push_str(STATEMENT_RULES);
        prompt.push_str("\n\n");

        // 2. Output shape
        prompt.push_str(STATEMENT_FORMAT);
        prompt.push_str("\n\n");

        // 3. The text to analyze
        push_text(&mut prompt, self.text);
        prompt.push_str(OUTPUT_FORMAT_REMINDER);

        prompt
    }

    /// Build the earnings-call summary prompt
    pub fn summary(&self, schema: &SummarySchema) -> String {
        let mut prompt = String::new();

        prompt.push_str("Analyze the following earnings call transcript.\n");
        prompt.push_str("Return a JSON object with exactly these fields:\n");
        prompt.push_str(&schema.describe());
        prompt.push('\n');
        prompt.push_str(SUMMARY_RULES);
        prompt.push_str("\n\n");

        push_text(&mut prompt, self.text);
        prompt.push_str(OUTPUT_FORMAT_REMINDER);

        prompt
    }
}

fn push_text(prompt: &mut String, text: &str) {
    prompt.push_str("Text to analyze:\n");
    prompt.push_str("---\n");
    prompt.push_str(text);
    prompt.push_str("\n---\n\n");
}

const STATEMENT_RULES: &str = r#"Rules:
- Output only what's present; do not hallucinate or infer missing data
- Handle multiple years if present (e.g., identify years like 2023, 2022)
- Extract exact numeric values (keep commas, negatives in parentheses)
- Use "N/A" for a year where an item has no value
- If a value is ambiguous, say so in 'notes' using the word "ambiguous"
- Detect currency/units from the text if mentioned"#;

const STATEMENT_FORMAT: &str = r#"Output as JSON:
{
  "currency": "str",
  "units": "str",
  "years": ["year1", "year2", ...],
  "line_items": {
    "Standard Item": {"values": [val1, val2, ...], "notes": "str"}
  }
}"#;

const SUMMARY_RULES: &str = r#"Rules:
- Base every statement on the transcript; do not speculate
- List fields must be JSON arrays of short strings
- Use "Not mentioned" when the transcript does not cover a field
- Enum fields must use one of the listed values"#;

const OUTPUT_FORMAT_REMINDER: &str =
    "Remember: Return ONLY valid JSON, no markdown code blocks, no explanations.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statement_prompt_embeds_schema() {
        let prompt = PromptBuilder::new("Net Sales 1,000").statement(&LineItemSchema::standard());

        assert!(prompt.contains("Map to these standard items: Revenue, Cost of Goods Sold"));
        assert!(prompt.contains("- Cost of Goods Sold: Cost of Sales, COGS, Cost of Revenue"));
        assert!(prompt.contains("\"line_items\""));
        assert!(prompt.contains("ambiguous"));
    }

    #[test]
    fn test_prompt_includes_text() {
        let prompt = PromptBuilder::new("Total revenue rose to $1.2bn").statement(&LineItemSchema::standard());
        assert!(prompt.contains("---\nTotal revenue rose to $1.2bn\n---"));
    }

    #[test]
    fn test_summary_prompt_embeds_fields() {
        let prompt = PromptBuilder::new("Good morning everyone").summary(&SummarySchema::earnings_call());

        assert!(prompt.contains("management_tone (one of: Optimistic, Cautious, Neutral, Pessimistic)"));
        assert!(prompt.contains("key_positives (list of strings)"));
        assert!(prompt.contains("Good morning everyone"));
        assert!(prompt.ends_with(OUTPUT_FORMAT_REMINDER));
    }
}
