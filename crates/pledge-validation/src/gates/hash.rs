use std::sync::LazyLock;

use pledge_core::constants::SHA256_HEX_LEN;
use pledge_core::models::ValidationIssue;
use regex::Regex;

use crate::codes;

static SHA256_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^[0-9a-fA-F]{{{SHA256_HEX_LEN}}}$")).unwrap());

/// SHA-256 hex digest format check.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashGate;

impl HashGate {
    pub fn validate(&self, hash: &str, location: &str) -> Vec<ValidationIssue> {
        if hash.is_empty() {
            return vec![ValidationIssue::error(codes::HASH_EMPTY, "SHA-256 hash is empty").at(location)];
        }
        if !SHA256_RE.is_match(hash) {
            return vec![ValidationIssue::error(
                codes::HASH_FORMAT,
                "SHA-256 hash must be 64 hex characters",
            )
            .at(location)
            .with_value(hash)];
        }
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use pledge_core::thread::sha256_hex;

    use super::*;

    #[test]
    fn accepts_real_digest() {
        assert!(HashGate.validate(&sha256_hex("body"), "body_hash").is_empty());
    }

    #[test]
    fn rejects_short_or_non_hex() {
        assert_eq!(HashGate.validate("abc123", "body_hash")[0].code, codes::HASH_FORMAT);
        let not_hex = "z".repeat(64);
        assert_eq!(HashGate.validate(&not_hex, "body_hash")[0].code, codes::HASH_FORMAT);
        assert_eq!(HashGate.validate("", "headers_hash")[0].code, codes::HASH_EMPTY);
    }
}
