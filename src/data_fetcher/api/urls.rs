//! URL and range building utilities for the spreadsheet values API

use crate::config::Config;
use crate::constants::sheets::{
    DATE_TIME_RENDER_OPTION, EDITIONS_RANGE, FAVORITES_RANGE, FINISHES_RANGE, MAPS_RANGE,
    POULES_RANGE, RANGES_PER_SEASON_SHEET, VALUE_RENDER_OPTION,
};

/// Which sheets are read by one batch request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeLayout {
    pub season_sheets: Vec<String>,
    pub poule_sheet: String,
    pub favorites_sheet: String,
}

impl RangeLayout {
    pub fn from_config(config: &Config) -> Self {
        Self {
            season_sheets: config.season_sheets.clone(),
            poule_sheet: config.poule_sheet.clone(),
            favorites_sheet: config.favorites_sheet.clone(),
        }
    }

    /// A1 ranges in request order: maps, finishes and editions for every
    /// season sheet, then poules, then favourites.
    ///
    /// # Example
    /// ```
    /// use tm_leaderboard::data_fetcher::api::RangeLayout;
    ///
    /// let layout = RangeLayout {
    ///     season_sheets: vec!["TM2020".to_string()],
    ///     poule_sheet: "Poules".to_string(),
    ///     favorites_sheet: "Favoris".to_string(),
    /// };
    /// assert_eq!(
    ///     layout.ranges(),
    ///     vec!["TM2020!A2:F33", "TM2020!G2:L33", "TM2020!M2:R12", "Poules!A:D", "Favoris!A2:B76"]
    /// );
    /// ```
    pub fn ranges(&self) -> Vec<String> {
        let mut ranges = Vec::with_capacity(self.expected_range_count());
        for sheet in &self.season_sheets {
            for cells in [MAPS_RANGE, FINISHES_RANGE, EDITIONS_RANGE] {
                ranges.push(build_range(sheet, cells));
            }
        }
        ranges.push(build_range(&self.poule_sheet, POULES_RANGE));
        ranges.push(build_range(&self.favorites_sheet, FAVORITES_RANGE));
        ranges
    }

    pub fn expected_range_count(&self) -> usize {
        self.season_sheets.len() * RANGES_PER_SEASON_SHEET + 2
    }
}

/// Builds an A1 range, quoting the sheet name when it is not a plain identifier.
///
/// # Example
/// ```
/// use tm_leaderboard::data_fetcher::api::build_range;
///
/// assert_eq!(build_range("TM2020", "A2:F33"), "TM2020!A2:F33");
/// assert_eq!(build_range("Saison d'été", "A:D"), "'Saison d''été'!A:D");
/// ```
pub fn build_range(sheet: &str, cells: &str) -> String {
    let plain = !sheet.is_empty() && sheet.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if plain {
        format!("{sheet}!{cells}")
    } else {
        format!("'{}'!{cells}", sheet.replace('\'', "''"))
    }
}

/// Builds the batch read endpoint for a spreadsheet.
///
/// # Example
/// ```
/// use tm_leaderboard::data_fetcher::api::build_batch_get_url;
///
/// let url = build_batch_get_url("https://sheets.googleapis.com/v4/spreadsheets/", "abc123");
/// assert_eq!(url, "https://sheets.googleapis.com/v4/spreadsheets/abc123/values:batchGet");
/// ```
pub fn build_batch_get_url(api_base_url: &str, spreadsheet_id: &str) -> String {
    format!(
        "{}/{spreadsheet_id}/values:batchGet",
        api_base_url.trim_end_matches('/')
    )
}

/// Query parameters for a batch read, without the API key.
///
/// The key is added separately so this list can be logged as-is.
pub fn build_batch_query(ranges: &[String]) -> Vec<(&'static str, String)> {
    let mut query: Vec<(&'static str, String)> =
        ranges.iter().map(|r| ("ranges", r.clone())).collect();
    query.push(("valueRenderOption", VALUE_RENDER_OPTION.to_string()));
    query.push(("dateTimeRenderOption", DATE_TIME_RENDER_OPTION.to_string()));
    query
}
