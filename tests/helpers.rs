// Shared test helpers for building DNS fixtures.
//
// This module provides common domains used across multiple test files to reduce duplication.

use std::net::IpAddr;
use std::sync::Arc;

use mail_posture::dns::StaticDns;
use mail_posture::Analyzer;

/// Sending IP with a forward-confirmed PTR in `protected_dns`.
#[allow(dead_code)] // Used by other test files
pub const SENDER_IP: &str = "198.51.100.25";

/// A base64 `p=` value long enough to be graded as 2048-bit.
#[allow(dead_code)]
pub fn rsa_2048_key() -> String {
    "A".repeat(392)
}

/// A base64 `p=` value graded as 1024-bit.
#[allow(dead_code)]
pub fn rsa_1024_key() -> String {
    "B".repeat(216)
}

/// `example.com` with every protocol configured strictly.
#[allow(dead_code)]
pub fn protected_dns() -> StaticDns {
    let ip: IpAddr = SENDER_IP.parse().expect("valid test ip");
    StaticDns::new()
        .with_mx(
            "example.com",
            &[("alt1.aspmx.l.google.com", 5), ("aspmx.l.google.com", 1)],
        )
        .with_txt(
            "example.com",
            &[
                "google-site-verification=abc123",
                "v=spf1 include:_spf.google.com -all",
            ],
        )
        .with_txt(
            "google._domainkey.example.com",
            &[format!("v=DKIM1; k=rsa; p={}", rsa_2048_key()).as_str()],
        )
        .with_txt(
            "_dmarc.example.com",
            &["v=DMARC1; p=reject; rua=mailto:dmarc@example.com; adkim=s"],
        )
        .with_ptr(ip, &["mail.example.com."])
        .with_addrs("mail.example.com", &[ip])
}

/// Analyzer over the given fixture.
#[allow(dead_code)]
pub fn analyzer(dns: StaticDns) -> Analyzer {
    Analyzer::new(Arc::new(dns))
}
