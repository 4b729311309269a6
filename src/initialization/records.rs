//! Captured records loading.
//!
//! This module reads a JSON file of captured DNS answers so an analysis can
//! be reproduced offline.

use std::path::Path;

use crate::dns::{CapturedRecords, StaticDns};
use crate::error_handling::InitializationError;

/// Loads captured records from `path` into a `StaticDns`.
///
/// # Errors
///
/// Returns `InitializationError::RecordsError` if the file cannot be read, is
/// not valid JSON in the `CapturedRecords` shape, or holds an invalid PTR key.
pub fn load_records(path: &Path) -> Result<StaticDns, InitializationError> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        InitializationError::RecordsError(format!("Failed to read {}: {}", path.display(), e))
    })?;
    let captured: CapturedRecords = serde_json::from_str(&raw).map_err(|e| {
        InitializationError::RecordsError(format!("Failed to parse {}: {}", path.display(), e))
    })?;

    log::info!(
        "Loaded captured records from {} ({} MX, {} TXT, {} PTR, {} address names)",
        path.display(),
        captured.mx.len(),
        captured.txt.len(),
        captured.ptr.len(),
        captured.addrs.len()
    );

    StaticDns::from_captured(captured)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dns::DnsCapability;
    use std::io::Write;
    use std::net::IpAddr;
    use tempfile::NamedTempFile;

    fn write_records(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(contents.as_bytes()).expect("Failed to write temp file");
        file
    }

    #[tokio::test]
    async fn test_load_records_answers_from_file() {
        let file = write_records(
            r#"{
                "mx": {"Example.com.": [{"exchange": "aspmx.l.google.com", "priority": 1}]},
                "txt": {"example.com": [["v=spf1 ", "-all"]]},
                "ptr": {"198.51.100.25": ["mail.example.com"]},
                "addrs": {"mail.example.com": ["198.51.100.25"]}
            }"#,
        );
        let dns = load_records(file.path()).unwrap();
        let ip: IpAddr = "198.51.100.25".parse().unwrap();

        let mx = dns.resolve_mx("example.com").await.unwrap();
        assert_eq!(mx[0].exchange, "aspmx.l.google.com");
        let txt = dns.resolve_txt("example.com").await.unwrap();
        assert_eq!(txt, vec![vec!["v=spf1 ".to_string(), "-all".to_string()]]);
        assert_eq!(dns.reverse(ip).await.unwrap(), vec!["mail.example.com"]);
        assert_eq!(dns.resolve_ip("mail.example.com").await.unwrap(), vec![ip]);
        // Names missing from the capture behave like NXDOMAIN
        assert!(dns.resolve_txt("_dmarc.example.com").await.is_err());
    }

    #[test]
    fn test_load_records_sections_are_optional() {
        let file = write_records("{}");
        assert!(load_records(file.path()).is_ok());
    }

    #[test]
    fn test_load_records_rejects_bad_ptr_key() {
        let file = write_records(r#"{"ptr": {"mail.example.com": ["x"]}}"#);
        let err = load_records(file.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid PTR address 'mail.example.com'"));
    }

    #[test]
    fn test_load_records_rejects_malformed_json() {
        let file = write_records("{not json");
        let err = load_records(file.path()).unwrap_err();
        assert!(matches!(err, InitializationError::RecordsError(_)));
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_load_records_missing_file() {
        let err = load_records(Path::new("/nonexistent/records.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
