use serde::{Deserialize, Serialize};

/// Memory-distortion rate and recovery rate, both in [0, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryScore {
    pub mdr: f64,
    pub recovery: f64,
}
