use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::canonical::{canonicalize_body, canonicalize_headers, sha256_hex, Headers};

/// A raw message, before hashing, used to build a [`ThreadEntry`].
#[derive(Debug, Clone)]
pub struct RawMessage<'a> {
    pub message_id: String,
    pub from_addr: String,
    pub to_addr: String,
    pub timestamp: DateTime<Utc>,
    /// DKIM `selector.domain`.
    pub signer: String,
    pub body: &'a str,
    pub headers: &'a Headers,
    pub in_reply_to: Option<String>,
    pub references: Vec<String>,
}

/// Email-native provenance unit.
///
/// `body_hash` and `headers_hash` cover the canonical forms of the original
/// body and headers, so [`ThreadEntry::verify_integrity`] can detect tampering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadEntry {
    pub message_id: String,
    pub in_reply_to: Option<String>,
    #[serde(default)]
    pub references: Vec<String>,
    #[serde(rename = "from")]
    pub from_addr: String,
    #[serde(rename = "to")]
    pub to_addr: String,
    pub timestamp: DateTime<Utc>,
    pub signer: String,
    pub body_hash: String,
    pub headers_hash: String,
    #[serde(default)]
    pub signature_chain: Vec<String>,
}

impl ThreadEntry {
    /// Build an entry, hashing the canonical body and headers.
    ///
    /// `in_reply_to` is placed at the front of `references` when missing.
    pub fn create(message: RawMessage<'_>) -> Self {
        let mut references = message.references;
        if let Some(parent) = &message.in_reply_to {
            if !references.iter().any(|r| r == parent) {
                references.insert(0, parent.clone());
            }
        }

        Self {
            message_id: message.message_id,
            in_reply_to: message.in_reply_to,
            references,
            from_addr: message.from_addr,
            to_addr: message.to_addr,
            timestamp: message.timestamp,
            signer: message.signer,
            body_hash: sha256_hex(&canonicalize_body(message.body)),
            headers_hash: sha256_hex(&canonicalize_headers(message.headers)),
            signature_chain: Vec::new(),
        }
    }

    /// Recompute both hashes from the raw content and compare.
    pub fn verify_integrity(&self, body: &str, headers: &Headers) -> bool {
        sha256_hex(&canonicalize_body(body)) == self.body_hash
            && sha256_hex(&canonicalize_headers(headers)) == self.headers_hash
    }

    /// Return a copy with `signature` appended to the signature chain.
    pub fn extend_chain(mut self, signature: impl Into<String>) -> Self {
        self.signature_chain.push(signature.into());
        self
    }

    /// Whether this hop carries at least one signature.
    pub fn is_signed(&self) -> bool {
        !self.signature_chain.is_empty()
    }

    /// Signing domain: the last two dot-separated components of `signer`,
    /// or the whole signer when it has fewer than two components.
    pub fn signer_domain(&self) -> &str {
        let signer = self.signer.as_str();
        match signer.rfind('.') {
            Some(last) => match signer[..last].rfind('.') {
                Some(prev) => &signer[prev + 1..],
                None => signer,
            },
            None => signer,
        }
    }
}
