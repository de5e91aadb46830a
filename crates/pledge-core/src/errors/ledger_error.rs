use crate::events::RecordKind;

/// Errors raised by ledger append operations.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// An event (or thread entry) with this id is already stored and the
    /// configured duplicate policy is `reject`.
    #[error("duplicate {kind} id: {id}")]
    DuplicateId { kind: RecordKind, id: String },

    /// The record has an empty identifier and cannot be keyed.
    #[error("{kind} record has an empty id")]
    EmptyId { kind: RecordKind },
}
