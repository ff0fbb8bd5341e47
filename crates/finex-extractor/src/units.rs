//! Currency and unit detection from document text

use regex::Regex;
use std::sync::LazyLock;

static CURRENCY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(USD|EUR|INR|GBP)\b").expect("valid currency regex"));

static UNITS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(in thousands|in millions|in billions|000s)\b").expect("valid units regex")
});

/// First currency code mentioned in the text, as written
pub fn detect_currency(text: &str) -> Option<String> {
    first_match(&CURRENCY_PATTERN, text)
}

/// First unit phrase mentioned in the text, as written
pub fn detect_units(text: &str) -> Option<String> {
    first_match(&UNITS_PATTERN, text)
}

fn first_match(pattern: &Regex, text: &str) -> Option<String> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patterns_compile() {
        assert_eq!(CURRENCY_PATTERN.captures_len(), 2);
        assert_eq!(UNITS_PATTERN.captures_len(), 2);
    }

    #[test]
    fn test_detect_currency() {
        assert_eq!(detect_currency("Amounts in INR crore").as_deref(), Some("INR"));
        assert_eq!(detect_currency("No currency here"), None);
    }

    #[test]
    fn test_match_keeps_source_case() {
        assert_eq!(detect_currency("All figures in usd unless noted").as_deref(), Some("usd"));
        assert_eq!(
            detect_units("(In Millions, except per share data)").as_deref(),
            Some("In Millions")
        );
    }

    #[test]
    fn test_currency_needs_word_boundary() {
        assert_eq!(detect_currency("FUSDX fund"), None);
    }

    #[test]
    fn test_detect_units() {
        assert_eq!(detect_units("(INR in millions)").as_deref(), Some("in millions"));
        assert_eq!(detect_units("$ 000s").as_deref(), Some("000s"));
        assert_eq!(detect_units("Revenue 1,000"), None);
    }

    #[test]
    fn test_first_mention_wins() {
        assert_eq!(detect_currency("EUR 10 vs USD 12").as_deref(), Some("EUR"));
    }
}
