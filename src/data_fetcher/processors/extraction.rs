//! Turns raw spreadsheet ranges into typed records.
//!
//! Every extractor reads columns by fixed offset and keeps source row order.
//! Rows that fail validation are collected as [`AppError::MalformedRow`] and
//! skipped; they never abort the extraction of the other rows.

use super::cells::{RowReader, is_blank_row};
use crate::data_fetcher::models::{
    BatchRanges, Dashboard, Edition, Favorite, Finish, MapEntry, MapView, Poule, RawRange,
};
use crate::error::AppError;
use chrono::{NaiveDate, Utc};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Column offsets of the maps range (`A:F`).
mod map_cols {
    pub const ID: usize = 0;
    pub const NAME: usize = 1;
    pub const AUTHOR: usize = 2;
    pub const VALIDATED: usize = 3;
}

/// Column offsets of the finishes range (`G:L`).
mod finish_cols {
    pub const MAP_ID: usize = 0;
    pub const POSITION: usize = 1;
    pub const NAME: usize = 2;
    pub const TIME: usize = 3;
    pub const TIMESTAMP: usize = 4;
}

/// Column offsets of the editions range (`M:R`).
mod edition_cols {
    pub const NAME: usize = 0;
    pub const START_AT: usize = 1;
    pub const END_AT: usize = 2;
    pub const GAME: usize = 3;
    pub const NB_MAPS: usize = 4;
}

/// Column offsets of the poules range (`A:D`).
mod poule_cols {
    pub const NAME: usize = 0;
    pub const FIRST_MEMBER: usize = 1;
    pub const LAST_MEMBER: usize = 3;
}

/// Column offsets of the favourites range (`A:B`).
mod favorite_cols {
    pub const LABEL: usize = 0;
    pub const VOTES: usize = 1;
}

/// Records extracted from one range together with the rows that were rejected.
#[derive(Debug)]
pub struct Extracted<T> {
    pub records: Vec<T>,
    pub rejected: Vec<AppError>,
}

impl<T> Default for Extracted<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            rejected: Vec::new(),
        }
    }
}

impl<T> Extracted<T> {
    fn push(&mut self, result: Result<T, AppError>) {
        match result {
            Ok(record) => self.records.push(record),
            Err(e) => {
                warn!("Skipping row: {e}");
                self.rejected.push(e);
            }
        }
    }
}

/// Applies `parse` to every non-blank row of `range`, skipping the first
/// `header_rows` rows.
fn extract_rows<T>(
    range: &RawRange,
    header_rows: usize,
    parse: impl Fn(&RowReader<'_>) -> Result<T, AppError>,
) -> Extracted<T> {
    let mut extracted = Extracted::default();
    for (idx, row) in range.rows.iter().enumerate().skip(header_rows) {
        if is_blank_row(row) {
            continue;
        }
        let reader = RowReader::new(&range.range, idx + 1, row);
        extracted.push(parse(&reader));
    }
    extracted
}

/// Extracts the maps listed on a season sheet.
pub fn extract_maps(range: &RawRange) -> Extracted<MapView> {
    extract_rows(range, 0, |row| {
        Ok(MapView {
            id: row.integer_u32(map_cols::ID, "map id")?,
            name: row.required_text(map_cols::NAME, "map name")?,
            author: row.text(map_cols::AUTHOR).to_string(),
            validated: row.flag(map_cols::VALIDATED, "validated")?,
        })
    })
}

/// Extracts finish rows as `(map id, finish)` pairs in source order.
pub fn extract_finishes(range: &RawRange) -> Extracted<(u32, Finish)> {
    extract_rows(range, 0, |row| {
        let map_id = row.integer_u32(finish_cols::MAP_ID, "map id")?;
        let finish = Finish {
            position: row.integer_u32(finish_cols::POSITION, "position")?,
            name: row.required_text(finish_cols::NAME, "player name")?,
            time: row.integer(finish_cols::TIME, "time")?,
            timestamp: row.timestamp(finish_cols::TIMESTAMP, "timestamp")?,
        };
        Ok((map_id, finish))
    })
}

/// Groups finish rows into one [`MapEntry`] per map id.
///
/// Entries follow the order of `maps`, so a listed map without any finish row
/// still gets an (empty) entry. Map ids found only in the finish rows are
/// appended in order of first appearance. Finishes inside an entry keep their
/// source row order; nothing is re-sorted.
pub fn extract_map_entries(maps: &[MapView], finishes: &RawRange) -> Extracted<MapEntry> {
    let finish_rows = extract_finishes(finishes);

    let mut entries: Vec<MapEntry> = Vec::with_capacity(maps.len());
    let mut index_by_id: HashMap<u32, usize> = HashMap::new();
    for map in maps {
        index_by_id.entry(map.id).or_insert_with(|| {
            entries.push(MapEntry::new(map.id));
            entries.len() - 1
        });
    }

    for (map_id, finish) in finish_rows.records {
        let idx = *index_by_id.entry(map_id).or_insert_with(|| {
            entries.push(MapEntry::new(map_id));
            entries.len() - 1
        });
        entries[idx].finishes.push(finish);
    }

    Extracted {
        records: entries,
        rejected: finish_rows.rejected,
    }
}

/// Extracts the editions of a season sheet. Every edition shares the sheet's
/// map list; a blank map count falls back to the number of listed maps.
pub fn extract_editions(range: &RawRange, maps: &[MapView]) -> Extracted<Edition> {
    extract_rows(range, 0, |row| {
        let name = row.required_text(edition_cols::NAME, "season name")?;
        let start_at = row.date(edition_cols::START_AT, "start date")?;
        let end_at = row.date(edition_cols::END_AT, "end date")?;
        let game = row.required_text(edition_cols::GAME, "game")?;
        let nb_maps = row
            .optional_u32(edition_cols::NB_MAPS, "map count")?
            .unwrap_or(maps.len() as u32);

        Ok(Edition {
            name,
            start_at,
            end_at,
            game,
            nb_maps,
            maps: maps.to_vec(),
        })
    })
}

/// Extracts poules. The first row of the range is a header.
pub fn extract_poules(range: &RawRange) -> Extracted<Poule> {
    extract_rows(range, 1, |row| {
        let name = row.required_text(poule_cols::NAME, "poule name")?;
        let members = (poule_cols::FIRST_MEMBER..=poule_cols::LAST_MEMBER)
            .map(|col| row.text(col))
            .filter(|member| !member.is_empty())
            .map(str::to_string)
            .collect();
        Ok(Poule { name, members })
    })
}

/// Extracts favourites. A blank vote count reads as zero.
pub fn extract_favorites(range: &RawRange) -> Extracted<Favorite> {
    extract_rows(range, 0, |row| {
        Ok(Favorite {
            label: row.required_text(favorite_cols::LABEL, "favorite")?,
            votes: row.optional_u32(favorite_cols::VOTES, "votes")?.unwrap_or(0),
        })
    })
}

/// Picks the season whose window contains `today`, otherwise the one that
/// started last. Ties keep the later entry.
pub fn select_current_season(seasons: &[Edition], today: NaiveDate) -> Option<usize> {
    if let Some(idx) = seasons.iter().position(|season| season.contains(today)) {
        return Some(idx);
    }
    seasons
        .iter()
        .enumerate()
        .max_by_key(|(_, season)| season.start_at)
        .map(|(idx, _)| idx)
}

/// Builds a [`Dashboard`] from a split batch response.
///
/// Map leaderboards come from the sheet that holds the current season, or
/// from the first sheet when no season could be extracted.
pub fn extract_dashboard(batch: &BatchRanges, today: NaiveDate) -> Dashboard {
    let mut rejected_rows = 0;
    let mut seasons = Vec::new();
    // Sheet index of every season, parallel to `seasons`
    let mut season_sheets = Vec::new();
    let mut sheet_maps = Vec::with_capacity(batch.seasons.len());

    for (sheet_idx, sheet) in batch.seasons.iter().enumerate() {
        let maps = extract_maps(&sheet.maps);
        rejected_rows += maps.rejected.len();

        let editions = extract_editions(&sheet.editions, &maps.records);
        rejected_rows += editions.rejected.len();
        debug!(
            "Sheet {}: {} maps, {} editions",
            sheet.sheet,
            maps.records.len(),
            editions.records.len()
        );

        season_sheets.extend(std::iter::repeat_n(sheet_idx, editions.records.len()));
        seasons.extend(editions.records);
        sheet_maps.push(maps.records);
    }

    let current = select_current_season(&seasons, today);
    let leaderboard_sheet = current.map(|idx| season_sheets[idx]).unwrap_or(0);

    let map_entries = match batch.seasons.get(leaderboard_sheet) {
        Some(sheet) => {
            let entries = extract_map_entries(&sheet_maps[leaderboard_sheet], &sheet.finishes);
            rejected_rows += entries.rejected.len();
            entries.records
        }
        None => Vec::new(),
    };

    let poules = extract_poules(&batch.poules);
    rejected_rows += poules.rejected.len();

    let favorites = extract_favorites(&batch.favorites);
    rejected_rows += favorites.rejected.len();

    if rejected_rows > 0 {
        warn!("{rejected_rows} malformed rows were skipped during extraction");
    }

    Dashboard {
        seasons,
        current,
        map_entries,
        poules: poules.records,
        favorites: favorites.records,
        rejected_rows,
        fetched_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn range(name: &str, rows: &[&[&str]]) -> RawRange {
        RawRange::new(
            name,
            rows.iter()
                .map(|row| row.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    fn map(id: u32) -> MapView {
        MapView {
            id,
            name: format!("Map {id}"),
            author: "author".to_string(),
            validated: false,
        }
    }

    #[test]
    fn test_extract_maps() {
        let maps = extract_maps(&range(
            "TM2020!A2:F33",
            &[
                &["1", "A01", "Nadeo", "TRUE", "ignored", "ignored"],
                &["2", "A02", "", "FALSE"],
                &["", "", "", ""],
                &["3", "A03"],
            ],
        ));
        assert!(maps.rejected.is_empty());
        assert_eq!(maps.records.len(), 3);
        assert_eq!(maps.records[0].name, "A01");
        assert!(maps.records[0].validated);
        assert_eq!(maps.records[1].author, "");
        assert!(!maps.records[2].validated);
    }

    #[test]
    fn test_finishes_keep_row_order_per_map() {
        let finishes = range(
            "TM2020!G2:L33",
            &[
                &["7", "1", "Alpha", "41000", "2024-03-10T18:00:00Z"],
                &["8", "1", "Other", "50000", "2024-03-10T18:00:00Z"],
                &["7", "2", "Bravo", "41500", "2024-03-11T18:00:00Z"],
                &["7", "3", "Charlie", "42000", "2024-03-12T18:00:00Z"],
            ],
        );

        let entries = extract_map_entries(&[map(7), map(8)], &finishes);
        assert!(entries.rejected.is_empty());
        let positions: Vec<u32> = entries.records[0].finishes.iter().map(|f| f.position).collect();
        assert_eq!(positions, vec![1, 2, 3]);
        let names: Vec<&str> = entries.records[0]
            .finishes
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, vec!["Alpha", "Bravo", "Charlie"]);
        assert_eq!(entries.records[1].finishes.len(), 1);
    }

    #[test]
    fn test_source_order_is_not_resorted() {
        let finishes = range(
            "S!G2:L33",
            &[
                &["1", "3", "Late", "43000", "2024-03-10"],
                &["1", "1", "Early", "41000", "2024-03-10"],
            ],
        );
        let entries = extract_map_entries(&[map(1)], &finishes);
        assert_eq!(entries.records[0].finishes[0].name, "Late");
        assert_eq!(entries.records[0].finishes[1].name, "Early");
    }

    #[test]
    fn test_map_without_finishes_gets_empty_entry() {
        let finishes = range("S!G2:L33", &[&["2", "1", "Zoo", "41000", "2024-03-10"]]);
        let entries = extract_map_entries(&[map(1), map(2)], &finishes);
        assert_eq!(entries.records.len(), 2);
        assert_eq!(entries.records[0].id, 1);
        assert!(!entries.records[0].has_finishes());
        assert!(entries.records[1].has_finishes());
    }

    #[test]
    fn test_unknown_map_ids_are_appended() {
        let finishes = range(
            "S!G2:L33",
            &[
                &["9", "1", "Zoo", "41000", "2024-03-10"],
                &["1", "1", "Yan", "42000", "2024-03-10"],
                &["5", "1", "Xu", "43000", "2024-03-10"],
            ],
        );
        let entries = extract_map_entries(&[map(1)], &finishes);
        let ids: Vec<u32> = entries.records.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 9, 5]);
    }

    #[test]
    fn test_malformed_finish_rows_are_rejected_not_fatal() {
        let finishes = range(
            "S!G2:L33",
            &[
                &["1", "1", "Good", "41000", "2024-03-10T18:00:00Z"],
                &["1", "2", "BadTime", "NaN", "2024-03-10T18:00:00Z"],
                &["1", "3", "", "42000", "2024-03-10T18:00:00Z"],
                &["1", "4", "BadDate", "43000", "someday"],
                &["x", "5", "BadId", "44000", "2024-03-10T18:00:00Z"],
                &["1", "6", "Extra", "45000", "2024-03-10T18:00:00Z", "", "beyond", "contract"],
            ],
        );

        let entries = extract_map_entries(&[map(1)], &finishes);
        assert_eq!(entries.rejected.len(), 4);
        assert!(entries.rejected.iter().all(AppError::is_malformed_row));
        let rows: Vec<usize> = entries
            .rejected
            .iter()
            .map(|e| match e {
                AppError::MalformedRow { row, .. } => *row,
                _ => 0,
            })
            .collect();
        assert_eq!(rows, vec![2, 3, 4, 5]);

        let names: Vec<&str> = entries.records[0]
            .finishes
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, vec!["Good", "Extra"]);
    }

    #[test]
    fn test_extract_editions() {
        let maps = vec![map(1), map(2)];
        let editions = extract_editions(
            &range(
                "TM2020!M2:R12",
                &[
                    &["Saison 1", "2024-01-01", "2024-03-31", "TM2020", "25"],
                    &["Saison 2", "01/04/2024", "30/06/2024", "TM2020", ""],
                    &["Saison 3", "plus tard", "2024-09-30", "TM2020", "25"],
                ],
            ),
            &maps,
        );
        assert_eq!(editions.records.len(), 2);
        assert_eq!(editions.rejected.len(), 1);
        assert_eq!(editions.records[0].nb_maps, 25);
        assert_eq!(editions.records[1].nb_maps, 2);
        assert_eq!(
            editions.records[1].start_at,
            NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()
        );
        assert_eq!(editions.records[0].maps, maps);
    }

    #[test]
    fn test_extract_poules_skips_header_and_blank_members() {
        let poules = extract_poules(&range(
            "Poules!A:D",
            &[
                &["Poule", "Joueur 1", "Joueur 2", "Joueur 3"],
                &["A", "Zoo", "", "Yan"],
                &["B", "Xu"],
                &[],
            ],
        ));
        assert!(poules.rejected.is_empty());
        assert_eq!(poules.records.len(), 2);
        assert_eq!(poules.records[0].members, vec!["Zoo", "Yan"]);
        assert_eq!(poules.records[1].members, vec!["Xu"]);
    }

    #[test]
    fn test_extract_favorites() {
        let favorites = extract_favorites(&range(
            "Favoris!A2:B76",
            &[&["#12 Ice Slide", "14"], &["#3 Loop", ""], &["#4", "beaucoup"]],
        ));
        assert_eq!(favorites.records.len(), 2);
        assert_eq!(favorites.records[0].votes, 14);
        assert_eq!(favorites.records[1].votes, 0);
        assert_eq!(favorites.rejected.len(), 1);
    }

    #[test]
    fn test_select_current_season() {
        let editions = extract_editions(
            &range(
                "S!M2:R12",
                &[
                    &["S1", "2024-01-01", "2024-03-31", "TM2020", "10"],
                    &["S2", "2024-04-01", "2024-06-30", "TM2020", "10"],
                ],
            ),
            &[],
        )
        .records;

        let in_s1 = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        assert_eq!(select_current_season(&editions, in_s1), Some(0));

        let after_all = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
        assert_eq!(select_current_season(&editions, after_all), Some(1));

        assert_eq!(select_current_season(&[], after_all), None);
    }

    #[test]
    fn test_extract_dashboard_uses_current_season_sheet() {
        let sheets = vec!["TMNF".to_string(), "TM2020".to_string()];
        let ranges = vec![
            range("TMNF!A2:F33", &[&["1", "Old", "", "TRUE"]]),
            range("TMNF!G2:L33", &[&["1", "1", "Retro", "50000", "2023-01-02"]]),
            range("TMNF!M2:R12", &[&["Saison 1", "2023-01-01", "2023-02-01", "TMNF", "1"]]),
            range("TM2020!A2:F33", &[&["10", "New", "", "FALSE"]]),
            range(
                "TM2020!G2:L33",
                &[&["10", "1", "Modern", "40000", "2024-09-02"], &["10", "2", "", "1", "x"]],
            ),
            range("TM2020!M2:R12", &[&["Saison 2", "2024-09-01", "2024-09-30", "TM2020", "1"]]),
            range("Poules!A:D", &[&["Poule"], &["A", "Modern"]]),
            range("Favoris!A2:B76", &[&["#10", "3"]]),
        ];
        let batch = BatchRanges::from_ranges(&sheets, ranges).unwrap();

        let today = NaiveDate::from_ymd_opt(2024, 9, 10).unwrap();
        let dashboard = extract_dashboard(&batch, today);

        assert_eq!(dashboard.seasons.len(), 2);
        assert_eq!(dashboard.current_season().unwrap().name, "Saison 2");
        assert_eq!(dashboard.map_entries.len(), 1);
        assert_eq!(dashboard.map_entries[0].id, 10);
        assert_eq!(dashboard.map_entries[0].finishes[0].name, "Modern");
        assert_eq!(
            dashboard.map_entries[0].finishes[0].timestamp,
            Utc.with_ymd_and_hms(2024, 9, 2, 0, 0, 0).unwrap()
        );
        assert_eq!(dashboard.poules.len(), 1);
        assert_eq!(dashboard.favorites.len(), 1);
        assert_eq!(dashboard.rejected_rows, 1);
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let finishes = range(
            "S!G2:L33",
            &[
                &["1", "1", "A", "41000", "2024-03-10"],
                &["2", "1", "B", "42000", "2024-03-10"],
            ],
        );
        let first = extract_map_entries(&[map(2), map(1)], &finishes).records;
        let second = extract_map_entries(&[map(2), map(1)], &finishes).records;
        assert_eq!(first, second);
    }
}
