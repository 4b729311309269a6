//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::DEFAULT_PORT;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Application configuration.
///
/// Parsed from the command line by the binary, or constructed directly.
///
/// # Examples
///
/// ```no_run
/// use mail_posture::Config;
///
/// let config = Config {
///     domain: Some("example.com".to_string()),
///     ip: Some("192.0.2.10".to_string()),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "mail_posture",
    about = "Inspect a domain's MX, SPF, DKIM, DMARC and PTR records and score its spoofing risk"
)]
pub struct Config {
    /// Domain to analyze (e.g. example.com or https://example.com/)
    #[arg(required_unless_present = "serve")]
    pub domain: Option<String>,

    /// Sending IP to check for forward-confirmed reverse DNS
    #[arg(long)]
    pub ip: Option<String>,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// DKIM selector to probe (repeatable; replaces the built-in list)
    #[arg(long = "dkim-selector")]
    pub dkim_selectors: Vec<String>,

    /// Run the HTTP adapter instead of a one-shot analysis
    #[arg(long)]
    pub serve: bool,

    /// Port for the HTTP adapter
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Origin allowed to call the HTTP adapter cross-origin (repeatable)
    #[arg(long = "allowed-origin")]
    pub allowed_origins: Vec<String>,

    /// Pretty-print the JSON report
    #[arg(long)]
    pub pretty: bool,

    /// Answer DNS queries from a captured records JSON file instead of the network
    #[arg(long, value_name = "PATH")]
    pub records: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domain: None,
            ip: None,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            dkim_selectors: Vec::new(),
            serve: false,
            port: DEFAULT_PORT,
            allowed_origins: Vec::new(),
            pretty: false,
            records: None,
        }
    }
}
