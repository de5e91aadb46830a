use crate::events::Event;
use crate::models::ValidationReport;
use crate::thread::ThreadEntry;

/// Hygiene contract for records entering the ledger.
///
/// The ledger itself never calls this; producers gate admission.
pub trait IEventValidator: Send + Sync {
    fn validate_event(&self, event: &Event) -> ValidationReport;

    fn validate_thread_entry(&self, entry: &ThreadEntry) -> ValidationReport;
}
