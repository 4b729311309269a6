//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `mail_posture` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Choosing between a one-shot analysis and the HTTP adapter
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use mail_posture::initialization::{init_analyzer, init_logger_with};
use mail_posture::server::{build_router, start_server};
use mail_posture::{AnalysisError, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let analyzer = init_analyzer(&config).context("Failed to initialize analyzer")?;

    if config.serve {
        let router = build_router(analyzer, &config.allowed_origins)
            .context("Failed to build HTTP router")?;
        start_server(config.port, router)
            .await
            .context("HTTP adapter stopped")?;
        return Ok(());
    }

    // clap enforces a domain unless --serve is given
    let domain = config.domain.as_deref().unwrap_or_default();

    match analyzer.analyze(domain, config.ip.as_deref()).await {
        Ok(report) => {
            let json = if config.pretty {
                serde_json::to_string_pretty(&report)
            } else {
                serde_json::to_string(&report)
            }
            .context("Failed to serialize report")?;
            println!("{}", json);
            Ok(())
        }
        Err(AnalysisError::InvalidInput(message)) => {
            eprintln!("mail_posture error: {}", message);
            process::exit(1);
        }
    }
}
