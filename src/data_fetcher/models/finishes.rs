use chrono::{DateTime, Utc};

/// One completion record for a map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finish {
    pub position: u32,
    pub name: String,
    /// Elapsed time in milliseconds
    pub time: u64,
    pub timestamp: DateTime<Utc>,
}

/// All finishes recorded for one map, in source row order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapEntry {
    pub id: u32,
    pub finishes: Vec<Finish>,
}

impl MapEntry {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            finishes: Vec::new(),
        }
    }

    pub fn has_finishes(&self) -> bool {
        !self.finishes.is_empty()
    }
}
