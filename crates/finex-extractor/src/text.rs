//! Text extraction backends
//!
//! A document with no extractable text yields an empty string. The pipeline
//! decides what an empty string means for each use case.

use crate::error::ExtractorError;
use finex_domain::traits::TextExtractor;
use std::path::Path;
use tracing::{debug, warn};

/// Pulls text out of PDF documents with `pdf-extract`
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    type Error = ExtractorError;

    fn extract(&self, document: &[u8]) -> Result<String, Self::Error> {
        match pdf_extract::extract_text_from_mem(document) {
            Ok(text) => {
                let cleaned = clean_pdf_text(&text);
                debug!("Extracted {} chars from PDF", cleaned.chars().count());
                Ok(cleaned)
            }
            Err(e) => {
                // Scanned or corrupt PDFs have no text layer we can use
                warn!("PDF text extraction failed: {}", e);
                Ok(String::new())
            }
        }
    }
}

/// Reads plain-text transcripts, replacing invalid UTF-8
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    type Error = ExtractorError;

    fn extract(&self, document: &[u8]) -> Result<String, Self::Error> {
        Ok(String::from_utf8_lossy(document).into_owned())
    }
}

/// Backend chosen for a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// PDF document
    Pdf,
    /// Anything else, read as text
    PlainText,
}

impl DocumentKind {
    /// Pick the backend from the file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("pdf") => DocumentKind::Pdf,
            _ => DocumentKind::PlainText,
        }
    }

    /// Extract text from raw bytes with the matching backend
    pub fn extract(&self, document: &[u8]) -> Result<String, ExtractorError> {
        match self {
            DocumentKind::Pdf => PdfTextExtractor.extract(document),
            DocumentKind::PlainText => PlainTextExtractor.extract(document),
        }
    }
}

/// Read a file and extract its text
pub fn extract_file(path: &Path) -> Result<String, ExtractorError> {
    let bytes = std::fs::read(path).map_err(|e| {
        ExtractorError::TextExtraction(format!("Failed to read {}: {}", path.display(), e))
    })?;
    DocumentKind::from_path(path).extract(&bytes)
}

fn clean_pdf_text(text: &str) -> String {
    text.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
        .replace(['\u{0}', '\u{FEFF}'], "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_clean_pdf_text() {
        let raw = "  Revenue    1,000  \n\n\n   Net Income\t(200)\n\u{FEFF}";
        assert_eq!(clean_pdf_text(raw), "Revenue 1,000\nNet Income (200)");
    }

    #[test]
    fn test_unreadable_pdf_yields_empty_text() {
        let text = PdfTextExtractor.extract(b"not a pdf at all").unwrap();
        assert!(text.is_empty());
    }

    #[test]
    fn test_plain_text_is_lossy() {
        let text = PlainTextExtractor.extract(b"Revenue \xFF up").unwrap();
        assert_eq!(text, "Revenue \u{FFFD} up");
    }

    #[test]
    fn test_kind_from_extension() {
        assert_eq!(DocumentKind::from_path(Path::new("q3.PDF")), DocumentKind::Pdf);
        assert_eq!(DocumentKind::from_path(Path::new("call.txt")), DocumentKind::PlainText);
        assert_eq!(DocumentKind::from_path(Path::new("notes")), DocumentKind::PlainText);
    }

    #[test]
    fn test_extract_file() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        write!(file, "Operator: welcome to the call").unwrap();

        let text = extract_file(file.path()).unwrap();
        assert_eq!(text, "Operator: welcome to the call");
    }

    #[test]
    fn test_extract_missing_file() {
        let result = extract_file(Path::new("/nonexistent/finex/report.pdf"));
        assert!(matches!(result, Err(ExtractorError::TextExtraction(_))));
    }
}
