use crate::data_fetcher::models::{
    BatchGetResponse, BatchRanges, Dashboard, Edition, Finish, MapEntry, MapView, RawRange,
    ValueRange,
};
use chrono::{NaiveDate, TimeZone, Utc};

/// Test utilities for creating mock sheet data and records
pub struct TestDataBuilder;

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

impl TestDataBuilder {
    /// A maps range (`A:F`) row: id, name, author, validated
    pub fn map_row(id: u32, name: &str, author: &str, validated: bool) -> Vec<String> {
        let flag = if validated { "TRUE" } else { "FALSE" };
        row(&[&id.to_string(), name, author, flag])
    }

    /// A finishes range (`G:L`) row: map id, position, name, time (ms), timestamp
    pub fn finish_row(
        map_id: u32,
        position: u32,
        name: &str,
        time_ms: u64,
        timestamp: &str,
    ) -> Vec<String> {
        row(&[
            &map_id.to_string(),
            &position.to_string(),
            name,
            &time_ms.to_string(),
            timestamp,
        ])
    }

    /// An editions range (`M:R`) row: name, start, end, game, map count
    pub fn edition_row(name: &str, start: &str, end: &str, game: &str, nb_maps: u32) -> Vec<String> {
        row(&[name, start, end, game, &nb_maps.to_string()])
    }

    /// A poules range row: name then up to three members
    pub fn poule_row(name: &str, members: &[&str]) -> Vec<String> {
        let mut cells = vec![name.to_string()];
        cells.extend(members.iter().map(|m| m.to_string()));
        cells
    }

    pub fn favorite_row(label: &str, votes: u32) -> Vec<String> {
        row(&[label, &votes.to_string()])
    }

    pub fn range(name: &str, rows: Vec<Vec<String>>) -> RawRange {
        RawRange::new(name, rows)
    }

    /// `count` finish rows on `map_id`, positions from 1, times 10 ms apart.
    pub fn finish_rows(map_id: u32, count: u32) -> Vec<Vec<String>> {
        (1..=count)
            .map(|position| {
                Self::finish_row(
                    map_id,
                    position,
                    &format!("Player {position}"),
                    40_000 + u64::from(position) * 10,
                    "2024-09-05 18:22:11",
                )
            })
            .collect()
    }

    /// A single season sheet with two maps, 20 finishes on map 1 and one
    /// edition running from 2024-09-01 to 2024-09-11.
    pub fn create_basic_batch() -> BatchRanges {
        let maps = Self::range(
            "TM2020!A2:F33",
            vec![
                Self::map_row(1, "Tech Valley", "Wirtual", true),
                Self::map_row(2, "Ice Ring", "Hylis", false),
            ],
        );
        let finishes = Self::range("TM2020!G2:L33", Self::finish_rows(1, 20));
        let editions = Self::range(
            "TM2020!M2:R12",
            vec![Self::edition_row(
                "Saison 2",
                "2024-09-01",
                "2024-09-11",
                "TM2020",
                10,
            )],
        );
        let poules = Self::range(
            "Poules!A1:D3",
            vec![
                Self::poule_row("Poule", &["Joueur 1", "Joueur 2", "Joueur 3"]),
                Self::poule_row("Poule A", &["Alice", "Bob", "Chloé"]),
            ],
        );
        let favorites = Self::range(
            "Favoris!A2:B76",
            vec![Self::favorite_row("Tech Valley", 12)],
        );

        BatchRanges::from_ranges(
            &["TM2020".to_string()],
            vec![maps, finishes, editions, poules, favorites],
        )
        .expect("five ranges for one season sheet")
    }

    /// The batchGet response that [`create_basic_batch`] is extracted from.
    ///
    /// [`create_basic_batch`]: TestDataBuilder::create_basic_batch
    pub fn create_basic_response() -> BatchGetResponse {
        let batch = Self::create_basic_batch();
        let mut ranges = Vec::new();
        for season in batch.seasons {
            ranges.extend([season.maps, season.finishes, season.editions]);
        }
        ranges.extend([batch.poules, batch.favorites]);

        BatchGetResponse {
            spreadsheet_id: "test-sheet".to_string(),
            value_ranges: ranges
                .into_iter()
                .map(|r| ValueRange {
                    range: r.range,
                    major_dimension: Some("ROWS".to_string()),
                    values: r.rows,
                })
                .collect(),
        }
    }

    pub fn create_finish(position: u32, name: &str, time: u64) -> Finish {
        Finish {
            position,
            name: name.to_string(),
            time,
            timestamp: Utc.with_ymd_and_hms(2024, 9, 5, 18, 22, 11).unwrap(),
        }
    }

    pub fn create_map_entry(id: u32, finish_count: u32) -> MapEntry {
        MapEntry {
            id,
            finishes: (1..=finish_count)
                .map(|p| Self::create_finish(p, &format!("Player {p}"), 40_000 + u64::from(p)))
                .collect(),
        }
    }

    pub fn create_edition(name: &str, start: NaiveDate, end: NaiveDate) -> Edition {
        Edition {
            name: name.to_string(),
            start_at: start,
            end_at: end,
            game: "TM2020".to_string(),
            nb_maps: 10,
            maps: vec![MapView {
                id: 1,
                name: "Tech Valley".to_string(),
                author: "Wirtual".to_string(),
                validated: true,
            }],
        }
    }

    /// A dashboard with one current edition and the given map entries.
    pub fn create_dashboard(entries: Vec<MapEntry>) -> Dashboard {
        let start = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 9, 11).unwrap();
        Dashboard {
            seasons: vec![Self::create_edition("Saison 2", start, end)],
            current: Some(0),
            map_entries: entries,
            poules: vec![],
            favorites: vec![],
            rejected_rows: 0,
            fetched_at: Utc.with_ymd_and_hms(2024, 9, 4, 10, 0, 0).unwrap(),
        }
    }
}
