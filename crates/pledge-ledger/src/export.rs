use pledge_core::errors::PledgeResult;
use pledge_core::{
    DeliveryEvent, DependencyEvent, MemoryDistortionEvent, PromiseEvent, RecourseEvent,
    ThreadEntry,
};
use serde::{Deserialize, Serialize};

use crate::state::LedgerState;

/// Serializable dump of the whole ledger, each list sorted by `(timestamp, id)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerExport {
    pub promises: Vec<PromiseEvent>,
    pub deliveries: Vec<DeliveryEvent>,
    pub recourses: Vec<RecourseEvent>,
    pub dependencies: Vec<DependencyEvent>,
    pub memory_distortions: Vec<MemoryDistortionEvent>,
    pub thread_entries: Vec<ThreadEntry>,
}

impl LedgerExport {
    pub fn from_state(state: &LedgerState) -> Self {
        Self {
            promises: state.promises().into_iter().cloned().collect(),
            deliveries: state.deliveries().into_iter().cloned().collect(),
            recourses: state.recourses().into_iter().cloned().collect(),
            dependencies: state.dependencies().into_iter().cloned().collect(),
            memory_distortions: state.memory_distortions().into_iter().cloned().collect(),
            thread_entries: state.thread_entries().into_iter().cloned().collect(),
        }
    }

    pub fn record_count(&self) -> usize {
        self.promises.len()
            + self.deliveries.len()
            + self.recourses.len()
            + self.dependencies.len()
            + self.memory_distortions.len()
            + self.thread_entries.len()
    }

    pub fn to_json(&self) -> PledgeResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> PledgeResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
