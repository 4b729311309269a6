// Domain module tests.

use super::*;

#[test]
fn test_normalize_domain_scheme_case_and_slash() {
    assert_eq!(normalize_domain("HTTPS://Example.COM/").unwrap(), "example.com");
}

#[test]
fn test_normalize_domain_http_scheme() {
    assert_eq!(normalize_domain("http://mail.example.org").unwrap(), "mail.example.org");
}

#[test]
fn test_normalize_domain_surrounding_whitespace() {
    assert_eq!(normalize_domain("  example.net \n").unwrap(), "example.net");
}

#[test]
fn test_normalize_domain_bare_domain_unchanged() {
    assert_eq!(normalize_domain("example.com").unwrap(), "example.com");
}

#[test]
fn test_normalize_domain_multiple_trailing_slashes_and_root_dot() {
    assert_eq!(normalize_domain("https://example.com.//").unwrap(), "example.com");
}

#[test]
fn test_normalize_domain_empty_input() {
    assert!(matches!(
        normalize_domain(""),
        Err(AnalysisError::InvalidInput(_))
    ));
    assert!(matches!(
        normalize_domain("   "),
        Err(AnalysisError::InvalidInput(_))
    ));
}

#[test]
fn test_normalize_domain_scheme_only() {
    assert!(matches!(
        normalize_domain("https://"),
        Err(AnalysisError::InvalidInput(_))
    ));
    assert!(matches!(
        normalize_domain("http:///"),
        Err(AnalysisError::InvalidInput(_))
    ));
}

#[test]
fn test_normalize_domain_rejects_paths_and_inner_whitespace() {
    assert!(matches!(
        normalize_domain("https://example.com/login"),
        Err(AnalysisError::InvalidInput(_))
    ));
    assert!(matches!(
        normalize_domain("exa mple.com"),
        Err(AnalysisError::InvalidInput(_))
    ));
}
