//! Finex CLI - Command-line interface for financial document extraction.

use clap::Parser;
use finex_cli::cli::{ConfigAction, ConfigArgs};
use finex_cli::commands;
use finex_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing (log to stderr); `RUST_LOG` overrides the verbosity flag
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> finex_cli::Result<()> {
    let config_path = Config::resolve_path(cli.config.as_deref())?;
    // `config init` never reads the existing file
    let config = match &cli.command {
        Command::Config(ConfigArgs {
            action: ConfigAction::Init { .. },
        }) => Config::default(),
        _ => Config::load(&config_path)?,
    };

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Schema(args) => commands::execute_schema(args, &config, &formatter)?,
        Command::Config(args) => {
            commands::execute_config(args, &config, &config_path, &formatter)?
        }
        Command::Statement(args) => {
            let extractor =
                commands::build_extractor(&config, cli.api_key.as_deref(), cli.model.as_deref())?;
            commands::execute_statement(args, &extractor, &formatter).await?;
        }
        Command::Summarize(args) => {
            let extractor =
                commands::build_extractor(&config, cli.api_key.as_deref(), cli.model.as_deref())?;
            commands::execute_summarize(args, &extractor, &formatter).await?;
        }
    }

    Ok(())
}
