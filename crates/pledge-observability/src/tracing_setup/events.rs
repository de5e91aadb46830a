//! Structured log events for key ledger operations.
//!
//! Each function emits a `tracing` event with an `event` field naming it.

use pledge_core::models::TrustSnapshot;

pub fn event_admitted(kind: &str, id: &str, warnings: usize) {
    tracing::info!(
        event = "event_admitted",
        kind = %kind,
        id = %id,
        warnings = warnings,
        "event admitted"
    );
}

pub fn event_rejected(kind: &str, id: &str, blocking: usize) {
    tracing::warn!(
        event = "event_rejected",
        kind = %kind,
        id = %id,
        blocking = blocking,
        "event rejected by hygiene gates"
    );
}

/// Log a computed trust snapshot; uncomputed scores are omitted.
pub fn snapshot_computed(agent_id: &str, snapshot: &TrustSnapshot) {
    tracing::info!(
        event = "snapshot_computed",
        agent_id = %agent_id,
        pdr = snapshot.pdr,
        dependency_impact = snapshot.dependency_impact,
        mdr = snapshot.mdr,
        recovery_score = snapshot.recovery_score,
        chain_score = snapshot.chain_score,
        "trust snapshot computed"
    );
}

pub fn chain_unverified(message_id: &str, chain_length: usize, issues: usize) {
    tracing::warn!(
        event = "chain_unverified",
        message_id = %message_id,
        chain_length = chain_length,
        issues = issues,
        "thread chain failed verification"
    );
}

pub fn integrity_issues(blocking: usize, warnings: usize) {
    tracing::warn!(
        event = "integrity_issues",
        blocking = blocking,
        warnings = warnings,
        "ledger integrity issues found"
    );
}
