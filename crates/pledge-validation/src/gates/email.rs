use std::sync::LazyLock;

use pledge_core::models::ValidationIssue;
use regex::Regex;

use crate::codes;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

/// Address and DKIM signer format checks.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailGate;

impl EmailGate {
    pub fn validate(&self, email: &str, location: &str) -> Vec<ValidationIssue> {
        if email.is_empty() {
            return vec![ValidationIssue::error(codes::EMAIL_EMPTY, "email address is empty")
                .at(location)];
        }
        if !EMAIL_RE.is_match(email) {
            return vec![
                ValidationIssue::error(codes::EMAIL_FORMAT, "email address format is invalid")
                    .at(location)
                    .with_value(email),
            ];
        }
        Vec::new()
    }

    /// A DKIM signer needs at least `selector.domain`.
    pub fn validate_dkim_signer(&self, signer: &str) -> Vec<ValidationIssue> {
        if signer.is_empty() {
            return vec![ValidationIssue::error(codes::DKIM_EMPTY, "DKIM signer is empty").at("signer")];
        }
        if signer.split('.').count() < 2 {
            return vec![ValidationIssue::error(
                codes::DKIM_FORMAT,
                "DKIM signer must be in format selector.domain",
            )
            .at("signer")
            .with_value(signer)];
        }
        Vec::new()
    }
}
