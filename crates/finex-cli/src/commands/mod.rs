//! Command implementations.

pub mod config;
pub mod schema;
pub mod statement;
pub mod summarize;

pub use self::config::execute_config;
pub use self::schema::execute_schema;
pub use self::statement::execute_statement;
pub use self::summarize::execute_summarize;

use crate::config::Config;
use crate::error::Result;
use finex_domain::SummarySchema;
use finex_extractor::Extractor;
use finex_gatekeeper::Gatekeeper;
use finex_llm::OpenAiProvider;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Build the extraction pipeline from the loaded configuration.
pub fn build_extractor(
    config: &Config,
    api_key: Option<&str>,
    model: Option<&str>,
) -> Result<Extractor<OpenAiProvider>> {
    let provider = OpenAiProvider::new(config.openai_config(api_key, model)?)?;
    let gatekeeper = Gatekeeper::new(
        config.validation.clone(),
        config.line_item_schema()?,
        SummarySchema::earnings_call(),
    );
    Ok(Extractor::new(provider, gatekeeper, config.extraction.clone())?)
}

/// Key used for a file in exported documents.
pub(crate) fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Write an artifact, creating parent directories as needed.
pub(crate) fn write_artifact(path: &Path, contents: impl AsRef<[u8]>) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    debug!("Wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_name() {
        assert_eq!(source_name(Path::new("/data/filings/10-K.pdf")), "10-K.pdf");
        assert_eq!(source_name(Path::new("call.txt")), "call.txt");
    }

    #[test]
    fn test_build_extractor_needs_key() {
        let result = build_extractor(&Config::default(), None, None);
        assert!(matches!(result, Err(crate::CliError::Config(_))));
    }

    #[test]
    fn test_build_extractor() {
        let extractor = build_extractor(&Config::default(), Some("sk-test"), Some("gpt-4o")).unwrap();
        assert_eq!(extractor.config().max_text_chars, 20_000);
    }

    #[test]
    fn test_write_artifact_creates_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("summaries.json");
        write_artifact(&path, "{}").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "{}");
    }
}
