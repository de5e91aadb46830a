//! Gated admission: validate, then append only what passes.

use pledge_core::errors::{PledgeError, PledgeResult};
use pledge_core::events::{Event, RecordKind};
use pledge_core::models::ValidationReport;
use pledge_core::thread::ThreadEntry;
use pledge_core::traits::IEventValidator;
use pledge_ledger::EventStore;
use pledge_observability::admission_span;
use pledge_observability::tracing_setup::events;

use crate::event_validator::EventValidator;

/// Front door for producers that want hygiene enforced on append.
#[derive(Debug, Clone, Default)]
pub struct HygieneGates<V = EventValidator> {
    validator: V,
}

impl<V: IEventValidator> HygieneGates<V> {
    pub fn new(validator: V) -> Self {
        Self { validator }
    }

    pub fn validator(&self) -> &V {
        &self.validator
    }

    /// Validate `event` and append it when the report is valid.
    ///
    /// Invalid events are not appended; the report says why. Store errors
    /// (duplicate id, poisoned lock) propagate.
    pub fn admit(&self, store: &EventStore, event: Event) -> PledgeResult<ValidationReport> {
        let kind = event.kind().as_str();
        let _span = admission_span!(kind, event.id()).entered();
        let report = self.validator.validate_event(&event);
        if !report.is_valid {
            events::event_rejected(kind, event.id(), report.blocking_count());
            return Ok(report);
        }
        let id = store.add_event(event)?;
        events::event_admitted(kind, &id, report.issues.len());
        Ok(report)
    }

    pub fn admit_thread_entry(
        &self,
        store: &EventStore,
        entry: ThreadEntry,
    ) -> PledgeResult<ValidationReport> {
        let kind = RecordKind::ThreadEntry.as_str();
        let _span = admission_span!(kind, entry.message_id).entered();
        let report = self.validator.validate_thread_entry(&entry);
        if !report.is_valid {
            events::event_rejected(kind, &entry.message_id, report.blocking_count());
            return Ok(report);
        }
        let id = store.add_thread_entry(entry)?;
        events::event_admitted(kind, &id, report.issues.len());
        Ok(report)
    }

    /// Like [`admit`](Self::admit), but a rejection is an error carrying
    /// the blocking issue count. Returns the stored id on success.
    pub fn require(&self, store: &EventStore, event: Event) -> PledgeResult<String> {
        let id = event.id().to_string();
        let report = self.admit(store, event)?;
        if report.is_valid {
            Ok(id)
        } else {
            Err(PledgeError::ValidationRejected {
                id,
                issue_count: report.blocking_count(),
            })
        }
    }
}
