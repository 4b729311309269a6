//! mail_posture library: email-authentication posture analysis
//!
//! This library inspects a domain's MX, SPF, DKIM, DMARC and (optionally) PTR
//! records over DNS, grades each protocol, and derives a spoofing-risk score.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use mail_posture::initialization::init_resolver;
//! use mail_posture::Analyzer;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let analyzer = Analyzer::new(Arc::new(init_resolver()));
//! let report = analyzer.analyze("example.com", Some("203.0.113.7")).await?;
//! println!("{}: {} ({:?})", report.domain, report.reputation.score, report.reputation.level);
//! # Ok(())
//! # }
//! ```
//!
//! # Offline analysis
//!
//! `dns::StaticDns` answers from in-memory tables, so the whole engine can be
//! driven without network access.
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod analysis;
pub mod checks;
pub mod config;
pub mod dns;
mod domain;
mod error_handling;
pub mod extract;
pub mod initialization;
pub mod provider;
pub mod reputation;
pub mod server;

// Re-export public API
pub use analysis::{AnalysisReport, Analyzer};
pub use checks::{CheckResult, CheckStatus};
pub use config::{Config, LogFormat, LogLevel};
pub use domain::normalize_domain;
pub use error_handling::{AnalysisError, InitializationError, ProbeMiss, ResolutionError};
pub use reputation::{Reputation, ReputationLevel};
