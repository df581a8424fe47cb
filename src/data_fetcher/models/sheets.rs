use crate::constants::sheets::RANGES_PER_SEASON_SHEET;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Body of a `values:batchGet` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchGetResponse {
    #[serde(rename = "spreadsheetId", default)]
    pub spreadsheet_id: String,
    #[serde(rename = "valueRanges", default)]
    pub value_ranges: Vec<ValueRange>,
}

/// One requested range as returned by the values API.
///
/// With `valueRenderOption=FORMULA` cells arrive as JSON strings, numbers or
/// booleans; they are normalised to strings here so that extraction only ever
/// sees text. A range without any value omits `values` entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValueRange {
    pub range: String,
    #[serde(rename = "majorDimension", default)]
    pub major_dimension: Option<String>,
    #[serde(default, deserialize_with = "deserialize_cells")]
    pub values: Vec<Vec<String>>,
}

/// Rows x columns of cell text for one range. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawRange {
    pub range: String,
    pub rows: Vec<Vec<String>>,
}

impl RawRange {
    pub fn new(range: impl Into<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            range: range.into(),
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl From<ValueRange> for RawRange {
    fn from(value_range: ValueRange) -> Self {
        Self {
            range: value_range.range,
            rows: value_range.values,
        }
    }
}

/// The three ranges read from one season sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonRanges {
    pub sheet: String,
    pub maps: RawRange,
    pub finishes: RawRange,
    pub editions: RawRange,
}

/// A batch response split back into the ranges it was requested as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchRanges {
    pub seasons: Vec<SeasonRanges>,
    pub poules: RawRange,
    pub favorites: RawRange,
}

impl BatchRanges {
    /// Splits ranges returned in request order: maps, finishes and editions
    /// for each season sheet, then poules, then favourites.
    ///
    /// Returns `None` when the count does not match the request.
    pub fn from_ranges(season_sheets: &[String], ranges: Vec<RawRange>) -> Option<Self> {
        if ranges.len() != season_sheets.len() * RANGES_PER_SEASON_SHEET + 2 {
            return None;
        }

        let mut iter = ranges.into_iter();
        let mut seasons = Vec::with_capacity(season_sheets.len());
        for sheet in season_sheets {
            seasons.push(SeasonRanges {
                sheet: sheet.clone(),
                maps: iter.next()?,
                finishes: iter.next()?,
                editions: iter.next()?,
            });
        }

        Some(Self {
            seasons,
            poules: iter.next()?,
            favorites: iter.next()?,
        })
    }
}

fn cell_to_string(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(true) => "TRUE".to_string(),
        Value::Bool(false) => "FALSE".to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn deserialize_cells<'de, D>(deserializer: D) -> Result<Vec<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let rows: Option<Vec<Vec<Value>>> = Option::deserialize(deserializer)?;
    Ok(rows
        .unwrap_or_default()
        .into_iter()
        .map(|row| row.into_iter().map(cell_to_string).collect())
        .collect())
}
