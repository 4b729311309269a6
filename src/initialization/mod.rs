//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources:
//! - Logger
//! - DNS resolver, or captured records for offline analysis
//! - Analyzer (DNS capability plus configured selector list)

mod logger;
mod records;
mod resolver;

use std::sync::Arc;

use crate::analysis::Analyzer;
use crate::config::Config;
use crate::dns::DnsCapability;
use crate::error_handling::InitializationError;

// Re-export public API
pub use logger::init_logger_with;
pub use records::load_records;
pub use resolver::{init_resolver, resolver_opts};

/// Initializes the analyzer from the application configuration.
///
/// Queries go to the system resolver unless `--records` names a captured
/// records file. `--dkim-selector` replaces the built-in selector list.
///
/// # Errors
///
/// Returns `InitializationError::RecordsError` if the records file is unusable.
pub fn init_analyzer(config: &Config) -> Result<Analyzer, InitializationError> {
    let dns: Arc<dyn DnsCapability> = match &config.records {
        Some(path) => Arc::new(load_records(path)?),
        None => Arc::new(init_resolver()),
    };
    Ok(Analyzer::new(dns).with_selectors(config.dkim_selectors.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::CheckStatus;
    use std::io::Write;

    #[tokio::test]
    async fn test_init_analyzer_with_captured_records() {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        let records = r#"{"txt": {"_dmarc.example.com": [["v=DMARC1; p=reject; rua=d@x"]]}}"#;
        file.write_all(records.as_bytes()).expect("Failed to write temp file");
        let config = Config {
            domain: Some("example.com".to_string()),
            records: Some(file.path().to_path_buf()),
            dkim_selectors: vec!["corp".to_string()],
            ..Default::default()
        };

        let analyzer = init_analyzer(&config).unwrap();
        assert_eq!(analyzer.selectors(), ["corp".to_string()]);
        let report = analyzer.analyze("example.com", None).await.unwrap();
        assert_eq!(report.dmarc.status, CheckStatus::Pass);
        assert_eq!(report.mx.status, CheckStatus::Fail);
    }

    #[test]
    fn test_init_analyzer_unreadable_records_is_an_error() {
        let config = Config {
            records: Some("/nonexistent/records.json".into()),
            ..Default::default()
        };
        assert!(matches!(
            init_analyzer(&config),
            Err(InitializationError::RecordsError(_))
        ));
    }
}
