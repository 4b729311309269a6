//! DKIM key record extraction.
//!
//! Keys are not decoded or validated. The key type comes from the `k=` tag and
//! the size is estimated from the length of the base64 `p=` value.

use serde::Serialize;

use super::tags::parse_tags;

/// Label for keys of at least 2048 bits
pub const KEY_SIZE_2048: &str = "2048-bit";
/// Label for keys of at least 1024 bits (and under 2048)
pub const KEY_SIZE_1024: &str = "1024-bit";

/// Signing algorithm family advertised by a DKIM key record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DkimKeyType {
    #[serde(rename = "RSA")]
    Rsa,
    Ed25519,
}

/// Key facts extracted from one DKIM TXT record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DkimKey {
    pub key_type: DkimKeyType,
    /// Bucketed size label, see `key_size_label`
    pub key_size: String,
}

/// Estimates the key size in bits from the length of its base64 encoding.
///
/// Every base64 character carries 6 bits, so the encoded material is
/// `round(len * 6 / 8)` bytes; the estimate is that byte count in bits and is
/// therefore always a multiple of 8. It never decreases as `encoded_len` grows.
pub fn estimate_key_bits(encoded_len: usize) -> usize {
    let bytes = (encoded_len * 6 + 4) / 8;
    bytes * 8
}

/// Buckets an estimated size: `2048-bit`, `1024-bit`, or the literal bit count.
pub fn key_size_label(bits: usize) -> String {
    if bits >= 2048 {
        KEY_SIZE_2048.to_string()
    } else if bits >= 1024 {
        KEY_SIZE_1024.to_string()
    } else {
        format!("{bits}-bit")
    }
}

/// Extracts key type and size from a DKIM TXT record.
///
/// # Returns
///
/// `None` unless the record carries a `p=` tag, i.e. unless it is a key record.
pub fn parse_dkim_key(record: &str) -> Option<DkimKey> {
    let tags = parse_tags(record);
    let public_key = tags.get("p")?;

    let key_type = match tags.get("k") {
        Some(k) if k.eq_ignore_ascii_case("ed25519") => DkimKeyType::Ed25519,
        _ => DkimKeyType::Rsa,
    };

    // Long keys are often published with folding whitespace inside p=
    let encoded_len = public_key.chars().filter(|c| !c.is_whitespace()).count();

    Some(DkimKey {
        key_type,
        key_size: key_size_label(estimate_key_bits(encoded_len)),
    })
}
