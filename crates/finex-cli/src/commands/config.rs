//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::{Config, OutputFormat};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::Path;

/// Execute the config command.
pub fn execute_config(
    args: ConfigArgs,
    config: &Config,
    path: &Path,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ConfigAction::Show => {
            let contents = match formatter.format() {
                OutputFormat::Json => serde_json::to_string_pretty(&redacted(config))?,
                _ => redacted(config).to_toml()?,
            };
            if formatter.format() == OutputFormat::Table {
                println!("{}", formatter.info(&format!("Configuration file: {}", path.display())));
            }
            println!("{}", contents);
        }
        ConfigAction::Init { force } => {
            if path.exists() && !force {
                return Err(CliError::InvalidInput(format!(
                    "{} already exists; use --force to overwrite",
                    path.display()
                )));
            }
            Config::default().save(path)?;
            println!(
                "{}",
                formatter.success(&format!("Wrote default configuration to {}", path.display()))
            );
        }
    }
    Ok(())
}

fn redacted(config: &Config) -> Config {
    let mut shown = config.clone();
    if shown.llm.api_key.is_some() {
        shown.llm.api_key = Some("<redacted>".to_string());
    }
    shown
}
