use chrono::NaiveDate;

/// A map as listed on a season sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapView {
    pub id: u32,
    pub name: String,
    pub author: String,
    pub validated: bool,
}

/// A season (edition) of the cup: a bounded period during which a set of maps
/// is active and rankable. `start_at <= end_at` is assumed, not checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edition {
    pub name: String,
    pub start_at: NaiveDate,
    pub end_at: NaiveDate,
    pub game: String,
    pub nb_maps: u32,
    pub maps: Vec<MapView>,
}

impl Edition {
    /// Whether `day` falls inside the season window, bounds included.
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start_at <= day && day <= self.end_at
    }

    /// Number of maps marked as validated.
    pub fn validated_count(&self) -> usize {
        self.maps.iter().filter(|m| m.validated).count()
    }
}
