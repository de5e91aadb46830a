use std::collections::BTreeMap;

use sha2::{Digest, Sha256};

/// Message headers keyed by their original header name.
pub type Headers = BTreeMap<String, String>;

/// Canonical body form: trim the whole body, then strip trailing whitespace
/// from every line.
pub fn canonicalize_body(body: &str) -> String {
    body.trim()
        .split('\n')
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Canonical header form: sorted by original name, one `name:value` line per
/// header with the name lower-cased and both sides trimmed.
pub fn canonicalize_headers(headers: &Headers) -> String {
    headers
        .iter()
        .map(|(k, v)| format!("{}:{}", k.trim().to_lowercase(), v.trim()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// SHA-256 digest as 64 lowercase hex characters.
pub fn sha256_hex(input: &str) -> String {
    format!("{:x}", Sha256::digest(input.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_canonical_form_ignores_outer_and_trailing_whitespace() {
        let a = canonicalize_body("  hello   \nworld\t\n\n");
        let b = canonicalize_body("hello\nworld");
        assert_eq!(a, b);
    }

    #[test]
    fn body_canonical_form_keeps_leading_indent_on_inner_lines() {
        assert_eq!(canonicalize_body("a\n  b  "), "a\n  b");
    }

    #[test]
    fn header_canonical_form_lowercases_and_trims() {
        let mut headers = Headers::new();
        headers.insert("Subject".into(), "  Status  ".into());
        headers.insert("From".into(), "a@example.com".into());
        assert_eq!(
            canonicalize_headers(&headers),
            "from:a@example.com\nsubject:Status"
        );
    }

    #[test]
    fn sha256_hex_is_lowercase_64_chars() {
        let digest = sha256_hex("abc");
        assert_eq!(
            digest,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
