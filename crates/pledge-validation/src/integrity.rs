//! Cross-record integrity checks over the ledger and over thread chains.

use pledge_core::models::{ValidationIssue, ValidationReport};
use pledge_core::thread::ThreadEntry;
use pledge_ledger::{consistency, LedgerState};
use pledge_observability::tracing_setup::events;
use tracing::info;

use crate::codes;

#[derive(Debug, Clone, Copy, Default)]
pub struct IntegrityChecker;

impl IntegrityChecker {
    /// Deliveries must not predate their promise; dangling promise
    /// references are reported as warnings.
    pub fn check_promise_delivery_consistency(&self, state: &LedgerState) -> ValidationReport {
        let mut report = ValidationReport::valid();

        for promise in state.promises() {
            for delivery in state.deliveries_by_promise(&promise.id) {
                if delivery.timestamp < promise.timestamp {
                    report.push(
                        ValidationIssue::error(
                            codes::DELIVERY_BEFORE_PROMISE,
                            format!("delivery {} is timestamped before its promise", delivery.id),
                        )
                        .at(format!("promise:{}", promise.id))
                        .with_value(delivery.id.as_str()),
                    );
                }
            }
        }

        let dangling = consistency::check(state);
        for orphan in &dangling.orphan_deliveries {
            report.push(
                ValidationIssue::warning(codes::ORPHAN_DELIVERY, "delivery references an unknown promise")
                    .at(format!("delivery:{}", orphan.record_id))
                    .with_value(orphan.missing_id.as_str()),
            );
        }
        for orphan in &dangling.orphan_recourses {
            report.push(
                ValidationIssue::warning(codes::ORPHAN_RECOURSE, "recourse references an unknown promise")
                    .at(format!("recourse:{}", orphan.record_id))
                    .with_value(orphan.missing_id.as_str()),
            );
        }

        if report.is_valid {
            info!(issues = report.issues.len(), "ledger integrity check passed");
        } else {
            events::integrity_issues(report.blocking_count(), report.warnings().count());
        }
        report
    }

    /// `chain` is ordered root first. Each entry must reply to its
    /// predecessor, reference it, and be strictly later than it.
    pub fn check_chain_integrity(&self, chain: &[ThreadEntry]) -> ValidationReport {
        let mut report = ValidationReport::valid();
        if chain.is_empty() {
            report.push(ValidationIssue::error(codes::CHAIN_EMPTY, "thread chain is empty"));
            return report;
        }

        for (i, pair) in chain.windows(2).enumerate() {
            let (prev, current) = (&pair[0], &pair[1]);
            let idx = i + 1;

            if current.in_reply_to.as_deref() != Some(prev.message_id.as_str()) {
                report.push(
                    ValidationIssue::warning(
                        codes::CHAIN_REFERENCE_BROKEN,
                        format!("entry {idx} does not reply to entry {i}"),
                    )
                    .at(format!("chain[{idx}].in_reply_to")),
                );
            }
            if !current.references.contains(&prev.message_id) {
                report.push(
                    ValidationIssue::warning(
                        codes::CHAIN_REFERENCES_BROKEN,
                        format!("entry {idx} does not reference entry {i}"),
                    )
                    .at(format!("chain[{idx}].references")),
                );
            }
            if current.timestamp <= prev.timestamp {
                report.push(
                    ValidationIssue::error(
                        codes::CHAIN_TIMESTAMP_ORDER,
                        format!("entry {idx} is not timestamped after entry {i}"),
                    )
                    .at(format!("chain[{idx}].timestamp"))
                    .with_value(current.timestamp.to_rfc3339()),
                );
            }
        }
        report
    }
}
