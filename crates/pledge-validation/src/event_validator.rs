//! Per-variant field checks for trust events and thread entries.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use pledge_core::config::ValidationConfig;
use pledge_core::events::{
    DeliveryEvent, DeliveryOutcome, DependencyEvent, Event, MemoryDistortionEvent, PromiseEvent,
    RecourseEvent,
};
use pledge_core::models::{ValidationIssue, ValidationReport};
use pledge_core::thread::ThreadEntry;
use pledge_core::traits::IEventValidator;
use regex::Regex;
use tracing::debug;

use crate::codes;
use crate::gates::{EmailGate, HashGate, TimestampGate};

static MESSAGE_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^<[^<>\s@]+@[^<>\s@]+>$").unwrap());

/// Default [`IEventValidator`]: composes the field gates per record kind.
///
/// Timestamps are checked against the wall clock unless a reference time
/// is pinned with [`EventValidator::with_reference_time`].
#[derive(Debug, Clone, Default)]
pub struct EventValidator {
    email: EmailGate,
    hash: HashGate,
    timestamp: TimestampGate,
    reference_time: Option<DateTime<Utc>>,
}

impl EventValidator {
    pub fn new(config: &ValidationConfig) -> Self {
        Self {
            timestamp: TimestampGate::new(config),
            ..Self::default()
        }
    }

    pub fn with_reference_time(mut self, now: DateTime<Utc>) -> Self {
        self.reference_time = Some(now);
        self
    }

    fn now(&self) -> DateTime<Utc> {
        self.reference_time.unwrap_or_else(Utc::now)
    }

    fn check_promise(&self, p: &PromiseEvent, report: &mut ValidationReport) {
        require_text(report, &p.agent_id, codes::AGENT_ID_INVALID, "agent_id");
        require_text(report, &p.promise_text, codes::PROMISE_TEXT_INVALID, "promise_text");
    }

    fn check_delivery(&self, d: &DeliveryEvent, report: &mut ValidationReport) {
        require_text(report, &d.promise_id, codes::PROMISE_ID_INVALID, "promise_id");
        if d.outcome == DeliveryOutcome::Partial && !d.amounts.is_complete() {
            report.push(
                ValidationIssue::error(
                    codes::PARTIAL_DELIVERY_AMOUNTS_MISSING,
                    "partial delivery requires delivered and expected amounts",
                )
                .at("delivered_amount,expected_amount"),
            );
        }
        if let (Some(delivered), Some(expected)) = (d.amounts.delivered(), d.amounts.expected()) {
            if delivered > expected {
                report.push(
                    ValidationIssue::warning(
                        codes::DELIVERED_EXCEEDS_EXPECTED,
                        "delivered amount exceeds expected amount",
                    )
                    .at("delivered_amount")
                    .with_value(delivered),
                );
            }
        }
    }

    fn check_recourse(&self, r: &RecourseEvent, report: &mut ValidationReport) {
        require_text(report, &r.promise_id, codes::PROMISE_ID_INVALID, "promise_id");
        require_text(report, &r.action, codes::RECOURSE_ACTION_INVALID, "action");
    }

    fn check_dependency(&self, d: &DependencyEvent, report: &mut ValidationReport) {
        require_text(report, &d.workflow_id, codes::WORKFLOW_ID_INVALID, "workflow_id");
        require_text(report, &d.dependency_id, codes::DEPENDENCY_ID_INVALID, "dependency_id");
        require_unit(report, d.workflow_weight, codes::DEPENDENCY_WEIGHT_RANGE, "workflow_weight");
        require_unit(report, d.failure_rate, codes::DEPENDENCY_FAILURE_RATE_RANGE, "failure_rate");
        require_unit(report, d.fallback_score, codes::DEPENDENCY_FALLBACK_RANGE, "fallback_score");
    }

    fn check_distortion(&self, m: &MemoryDistortionEvent, report: &mut ValidationReport) {
        require_text(report, &m.session_id, codes::SESSION_ID_INVALID, "session_id");
    }
}

impl IEventValidator for EventValidator {
    fn validate_event(&self, event: &Event) -> ValidationReport {
        let mut report = ValidationReport::valid();
        match event {
            Event::Promise(p) => self.check_promise(p, &mut report),
            Event::Delivery(d) => self.check_delivery(d, &mut report),
            Event::Recourse(r) => self.check_recourse(r, &mut report),
            Event::Dependency(d) => self.check_dependency(d, &mut report),
            Event::MemoryDistortion(m) => self.check_distortion(m, &mut report),
        }
        report.extend(self.timestamp.validate_at(event.timestamp(), self.now(), "timestamp"));

        debug!(
            kind = event.kind().as_str(),
            id = event.id(),
            valid = report.is_valid,
            issues = report.issues.len(),
            "event validated"
        );
        report
    }

    fn validate_thread_entry(&self, entry: &ThreadEntry) -> ValidationReport {
        let mut report = ValidationReport::valid();

        if !MESSAGE_ID_RE.is_match(&entry.message_id) {
            report.push(
                ValidationIssue::error(codes::MESSAGE_ID_INVALID, "message id must look like <local@domain>")
                    .at("message_id")
                    .with_value(entry.message_id.as_str()),
            );
        }
        report.extend(self.email.validate(&entry.from_addr, "from_addr"));
        report.extend(self.email.validate(&entry.to_addr, "to_addr"));
        report.extend(self.email.validate_dkim_signer(&entry.signer));
        report.extend(self.hash.validate(&entry.body_hash, "body_hash"));
        report.extend(self.hash.validate(&entry.headers_hash, "headers_hash"));
        report.extend(self.timestamp.validate_at(entry.timestamp, self.now(), "timestamp"));

        if let Some(parent) = &entry.in_reply_to {
            if !entry.references.contains(parent) {
                report.push(
                    ValidationIssue::error(
                        codes::REFERENCES_MISSING_PARENT,
                        "references must include the in_reply_to parent",
                    )
                    .at("references")
                    .with_value(parent.as_str()),
                );
            }
        }

        debug!(
            message_id = %entry.message_id,
            valid = report.is_valid,
            issues = report.issues.len(),
            "thread entry validated"
        );
        report
    }
}

fn require_text(report: &mut ValidationReport, value: &str, code: &str, field: &str) {
    if value.trim().is_empty() {
        report.push(ValidationIssue::error(code, format!("{field} must be a non-empty string")).at(field));
    }
}

fn require_unit(report: &mut ValidationReport, value: f64, code: &str, field: &str) {
    if !(0.0..=1.0).contains(&value) {
        report.push(
            ValidationIssue::error(code, format!("{field} must be within [0, 1]"))
                .at(field)
                .with_value(value.to_string()),
        );
    }
}
