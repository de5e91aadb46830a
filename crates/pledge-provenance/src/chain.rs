//! Thread-chain verification: reply gaps, missing signatures and
//! non-increasing timestamps along a stored chain.

use pledge_core::models::ChainTermination;
use pledge_ledger::LedgerState;

use crate::models::{ChainGap, ChainVerification, SignatureGap, TimestampIssue};

pub fn verify_thread_chain(state: &LedgerState, message_id: &str) -> ChainVerification {
    let chain = state.thread_chain(message_id);
    let found = chain.termination != ChainTermination::NotFound;
    let entries = &chain.entries;

    let mut gaps = Vec::new();
    let mut timestamp_issues = Vec::new();
    for (i, pair) in entries.windows(2).enumerate() {
        let (previous, current) = (&pair[0], &pair[1]);
        let position = i + 1;
        if current.in_reply_to.as_deref() != Some(previous.message_id.as_str()) {
            gaps.push(ChainGap {
                position,
                expected: previous.message_id.clone(),
                found: current.in_reply_to.clone(),
            });
        }
        if current.timestamp <= previous.timestamp {
            timestamp_issues.push(TimestampIssue {
                position,
                current: current.timestamp,
                previous: previous.timestamp,
            });
        }
    }

    // The root may be unsigned.
    let signature_gaps = entries
        .iter()
        .enumerate()
        .skip(1)
        .filter(|(_, e)| !e.is_signed())
        .map(|(position, e)| SignatureGap {
            position,
            message_id: e.message_id.clone(),
        })
        .collect::<Vec<_>>();

    let verified = found
        && chain.termination.is_complete()
        && gaps.is_empty()
        && signature_gaps.is_empty()
        && timestamp_issues.is_empty();

    ChainVerification {
        message_id: message_id.to_string(),
        found,
        verified,
        chain_length: entries.len(),
        termination: chain.termination,
        gaps,
        signature_gaps,
        timestamp_issues,
    }
}
