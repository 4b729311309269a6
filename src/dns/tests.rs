//! DNS module tests.

use super::*;
use std::net::IpAddr;

#[test]
fn test_join_txt_segments_concatenates_each_record() {
    let records = vec![
        vec!["v=DKIM1; k=rsa; p=MIIB".to_string(), "IjANBgkq".to_string()],
        vec!["v=spf1 -all".to_string()],
    ];
    let joined = join_txt_segments(records);
    assert_eq!(
        joined,
        vec!["v=DKIM1; k=rsa; p=MIIBIjANBgkq", "v=spf1 -all"]
    );
}

#[tokio::test]
async fn test_static_dns_answers_mx_in_resolver_order() {
    let dns = StaticDns::new().with_mx(
        "example.com",
        &[("mx2.example.com", 20), ("mx1.example.com", 10)],
    );
    let records = dns.resolve_mx("example.com").await.unwrap();
    assert_eq!(records[0], MxRecord::new("mx2.example.com", 20));
    assert_eq!(records[1], MxRecord::new("mx1.example.com", 10));
}

#[tokio::test]
async fn test_static_dns_names_are_case_and_root_insensitive() {
    let dns = StaticDns::new().with_txt("Example.COM", &["v=spf1 -all"]);
    let records = dns.resolve_txt("example.com.").await.unwrap();
    assert_eq!(records, vec![vec!["v=spf1 -all".to_string()]]);
}

#[tokio::test]
async fn test_static_dns_unknown_name_is_nxdomain() {
    let dns = StaticDns::new();
    let err = dns.resolve_txt("missing.example").await.unwrap_err();
    assert!(err.message.contains("NXDOMAIN"));
    assert!(err.message.contains("missing.example"));
}

#[tokio::test]
async fn test_static_dns_configured_failure() {
    let ip: IpAddr = "192.0.2.7".parse().unwrap();
    let dns = StaticDns::new()
        .fail_mx("example.com", "request timed out")
        .fail_ptr(ip, "connection refused");
    assert_eq!(
        dns.resolve_mx("example.com").await.unwrap_err().message,
        "request timed out"
    );
    assert_eq!(dns.reverse(ip).await.unwrap_err().message, "connection refused");
}

#[tokio::test]
async fn test_static_dns_counts_queries() {
    let ip: IpAddr = "192.0.2.7".parse().unwrap();
    let dns = StaticDns::new()
        .with_ptr(ip, &["mail.example.com"])
        .with_addrs("mail.example.com", &[ip]);
    assert_eq!(dns.queries(), 0);
    let _ = dns.reverse(ip).await;
    let _ = dns.resolve_ip("mail.example.com").await;
    let _ = dns.resolve_mx("example.com").await;
    assert_eq!(dns.queries(), 3);
}
