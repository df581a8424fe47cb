use super::finishes::MapEntry;
use super::groups::{Favorite, Poule};
use super::season::Edition;
use chrono::{DateTime, Utc};

/// Everything extracted from one successful batch fetch.
///
/// A dashboard is never updated in place; a refresh builds a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub seasons: Vec<Edition>,
    /// Index into `seasons` of the season considered current
    pub current: Option<usize>,
    /// Map leaderboards of the current season's sheet
    pub map_entries: Vec<MapEntry>,
    pub poules: Vec<Poule>,
    pub favorites: Vec<Favorite>,
    /// Number of rows dropped because they failed validation
    pub rejected_rows: usize,
    pub fetched_at: DateTime<Utc>,
}

impl Dashboard {
    pub fn current_season(&self) -> Option<&Edition> {
        self.current.and_then(|idx| self.seasons.get(idx))
    }

    pub fn map_entry(&self, id: u32) -> Option<&MapEntry> {
        self.map_entries.iter().find(|entry| entry.id == id)
    }
}
