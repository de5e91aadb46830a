use serde::{Deserialize, Serialize};

use crate::thread::ThreadEntry;

/// Why a backward thread walk stopped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChainTermination {
    /// Reached an entry with no `in_reply_to`.
    Root,
    /// The named parent is not in the ledger.
    MissingParent { message_id: String },
    /// The named message id was reached twice.
    Cycle { message_id: String },
    /// `max_thread_depth` entries were collected.
    DepthLimit,
    /// The start id is unknown.
    NotFound,
}

impl ChainTermination {
    /// True when the walk reached a genuine root.
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Root)
    }
}

/// Entries of a thread, root first, plus how the walk ended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreadChain {
    pub entries: Vec<ThreadEntry>,
    pub termination: ChainTermination,
}

impl ThreadChain {
    pub fn not_found() -> Self {
        Self {
            entries: Vec::new(),
            termination: ChainTermination::NotFound,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
