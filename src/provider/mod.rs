//! Mail provider detection from MX exchanges.
//!
//! Detection is first-match over an ordered table, not best-match: providers
//! whose patterns are more specific must come before generic ones, and the
//! table order is part of the observable behavior.

use serde::Serialize;

use crate::config::UNKNOWN_PROVIDER;

/// One provider and the hostname fragments identifying its exchanges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderPattern {
    pub name: &'static str,
    /// Lower-case substrings, tried in order
    pub patterns: &'static [&'static str],
}

/// Built-in provider table, most specific first.
///
/// Security gateways (Proofpoint, Mimecast, Barracuda) sit in front of other
/// providers and are listed first so the gateway, not the mailbox host
/// behind it, is reported. Transactional senders (SendGrid, Mailgun) and the
/// broad cloud suffixes (`amazonaws.com`) come last.
pub const KNOWN_PROVIDERS: &[ProviderPattern] = &[
    ProviderPattern {
        name: "Proofpoint",
        patterns: &["pphosted.com", "ppe-hosted.com", "proofpoint.com"],
    },
    ProviderPattern {
        name: "Mimecast",
        patterns: &["mimecast.com", "mimecast-offshore.com"],
    },
    ProviderPattern {
        name: "Barracuda",
        patterns: &["barracudanetworks.com", "ess.barracuda"],
    },
    ProviderPattern {
        name: "Google Workspace",
        patterns: &["aspmx.l.google.com", "googlemail.com", "google.com"],
    },
    ProviderPattern {
        name: "Microsoft 365",
        patterns: &["mail.protection.outlook.com", "outlook.com", "hotmail.com"],
    },
    ProviderPattern {
        name: "Zoho Mail",
        patterns: &["zoho.com", "zoho.eu", "zoho.in"],
    },
    ProviderPattern {
        name: "Proton Mail",
        patterns: &["protonmail.ch", "proton.me"],
    },
    ProviderPattern {
        name: "Fastmail",
        patterns: &["messagingengine.com", "fastmail.com"],
    },
    ProviderPattern {
        name: "iCloud Mail",
        patterns: &["mail.icloud.com", "icloud.com"],
    },
    ProviderPattern {
        name: "Yahoo Mail",
        patterns: &["yahoodns.net", "yahoo.com"],
    },
    ProviderPattern {
        name: "Yandex Mail",
        patterns: &["mx.yandex.net", "yandex.ru", "yandex.net"],
    },
    ProviderPattern {
        name: "GoDaddy",
        patterns: &["secureserver.net"],
    },
    ProviderPattern {
        name: "OVHcloud",
        patterns: &["mail.ovh.net", "ovh.net"],
    },
    ProviderPattern {
        name: "Namecheap Private Email",
        patterns: &["privateemail.com", "registrar-servers.com"],
    },
    ProviderPattern {
        name: "Amazon WorkMail",
        patterns: &["awsapps.com"],
    },
    ProviderPattern {
        name: "Mailgun",
        patterns: &["mailgun.org"],
    },
    ProviderPattern {
        name: "SendGrid",
        patterns: &["sendgrid.net"],
    },
    ProviderPattern {
        name: "Amazon SES",
        patterns: &["amazonses.com", "amazonaws.com"],
    },
];

/// How sure the detector is about a provider name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// An exchange matched a table pattern
    High,
    /// Nothing matched; the domain runs its own or an unlisted provider
    Low,
}

/// Result of provider detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderMatch {
    pub name: String,
    pub confidence: Confidence,
    /// Exchange hostname that matched, if any
    pub matched_by: Option<String>,
}

impl ProviderMatch {
    /// The no-match result.
    pub fn unknown() -> Self {
        Self {
            name: UNKNOWN_PROVIDER.to_string(),
            confidence: Confidence::Low,
            matched_by: None,
        }
    }
}

impl Default for ProviderMatch {
    fn default() -> Self {
        Self::unknown()
    }
}

/// Classifies MX exchanges against a fixed provider table.
#[derive(Debug, Clone, Copy)]
pub struct ProviderDetector {
    table: &'static [ProviderPattern],
}

impl Default for ProviderDetector {
    fn default() -> Self {
        Self::new(KNOWN_PROVIDERS)
    }
}

impl ProviderDetector {
    pub fn new(table: &'static [ProviderPattern]) -> Self {
        Self { table }
    }

    /// Detects the provider behind `exchanges`.
    ///
    /// Exchanges are tried in the order given (callers pass them sorted by
    /// priority); for each, providers are scanned in table order and their
    /// patterns in order. The first hit wins.
    pub fn detect<'a, I>(&self, exchanges: I) -> ProviderMatch
    where
        I: IntoIterator<Item = &'a str>,
    {
        for exchange in exchanges {
            let host = exchange.trim_end_matches('.').to_lowercase();
            for provider in self.table {
                if provider.patterns.iter().any(|pattern| host.contains(pattern)) {
                    log::debug!("MX {host} matched provider {}", provider.name);
                    return ProviderMatch {
                        name: provider.name.to_string(),
                        confidence: Confidence::High,
                        matched_by: Some(host),
                    };
                }
            }
        }
        ProviderMatch::unknown()
    }
}
