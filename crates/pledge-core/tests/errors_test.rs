use pledge_core::errors::{ConfigError, LedgerError, PledgeError};
use pledge_core::RecordKind;

#[test]
fn ledger_error_converts_into_pledge_error() {
    let err: PledgeError = LedgerError::DuplicateId {
        kind: RecordKind::Promise,
        id: "promise-0001".into(),
    }
    .into();
    assert!(matches!(err, PledgeError::LedgerError(_)));
    assert_eq!(
        err.to_string(),
        "ledger error: duplicate promise id: promise-0001"
    );
}

#[test]
fn config_error_converts_into_pledge_error() {
    let err: PledgeError = ConfigError::ValidationFailed {
        field: "pdr.decay_period_days".into(),
        message: "must be greater than 0".into(),
    }
    .into();
    assert!(err.to_string().contains("pdr.decay_period_days"));
}

#[test]
fn serde_error_converts_into_pledge_error() {
    let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: PledgeError = serde_err.into();
    assert!(matches!(err, PledgeError::SerializationError(_)));
}

#[test]
fn thread_entry_kind_displays_snake_case() {
    let err = LedgerError::EmptyId {
        kind: RecordKind::ThreadEntry,
    };
    assert_eq!(err.to_string(), "thread_entry record has an empty id");
}
