//! Span definitions per operation: admission, scoring, provenance.

/// Create a hygiene admission span.
#[macro_export]
macro_rules! admission_span {
    ($kind:expr, $id:expr) => {
        tracing::info_span!("pledge.admission", kind = %$kind, id = %$id)
    };
}

/// Create a metrics computation span.
#[macro_export]
macro_rules! scoring_span {
    ($agent_id:expr, $window_days:expr) => {
        tracing::info_span!("pledge.scoring", agent_id = %$agent_id, window_days = $window_days)
    };
}

/// Create a provenance query span.
#[macro_export]
macro_rules! provenance_span {
    ($subject:expr) => {
        tracing::info_span!("pledge.provenance", subject = %$subject)
    };
}

pub mod names {
    pub const ADMISSION: &str = "pledge.admission";
    pub const SCORING: &str = "pledge.scoring";
    pub const PROVENANCE: &str = "pledge.provenance";
}
