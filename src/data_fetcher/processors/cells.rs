//! Typed access to the cells of one spreadsheet row.

use super::time_formatting::{parse_sheet_date, parse_timestamp};
use crate::error::AppError;
use chrono::{DateTime, NaiveDate, Utc};

/// True when every cell of the row is empty or whitespace. Sheet ranges are
/// padded with such rows and they carry no record.
pub fn is_blank_row(row: &[String]) -> bool {
    row.iter().all(|cell| cell.trim().is_empty())
}

/// Reads the cells of one row by fixed column offset. Cells past the end of
/// the row read as blank.
pub struct RowReader<'a> {
    range: &'a str,
    row: usize,
    cells: &'a [String],
}

impl<'a> RowReader<'a> {
    /// `row` is the 1-based position of the row inside its range.
    pub fn new(range: &'a str, row: usize, cells: &'a [String]) -> Self {
        Self { range, row, cells }
    }

    fn malformed(&self, reason: String) -> AppError {
        AppError::malformed_row(self.range, self.row, reason)
    }

    pub fn text(&self, col: usize) -> &'a str {
        self.cells.get(col).map(|c| c.trim()).unwrap_or("")
    }

    pub fn required_text(&self, col: usize, field: &str) -> Result<String, AppError> {
        let value = self.text(col);
        if value.is_empty() {
            return Err(self.malformed(format!("{field} is empty")));
        }
        Ok(value.to_string())
    }

    /// Non-negative integer. Integral floats such as `12.0` are accepted since
    /// numeric cells may be rendered that way.
    pub fn integer(&self, col: usize, field: &str) -> Result<u64, AppError> {
        let value = self.text(col);
        if value.is_empty() {
            return Err(self.malformed(format!("{field} is empty")));
        }
        parse_integer(value)
            .ok_or_else(|| self.malformed(format!("{field} is not a whole number: '{value}'")))
    }

    pub fn integer_u32(&self, col: usize, field: &str) -> Result<u32, AppError> {
        let value = self.integer(col, field)?;
        u32::try_from(value).map_err(|_| self.malformed(format!("{field} is out of range: {value}")))
    }

    /// Like [`RowReader::integer_u32`] but a blank cell yields `None`.
    pub fn optional_u32(&self, col: usize, field: &str) -> Result<Option<u32>, AppError> {
        if self.text(col).is_empty() {
            return Ok(None);
        }
        self.integer_u32(col, field).map(Some)
    }

    /// Checkbox-like cell. Blank reads as `false`.
    pub fn flag(&self, col: usize, field: &str) -> Result<bool, AppError> {
        let value = self.text(col);
        match value.to_ascii_lowercase().as_str() {
            "" | "false" | "0" | "non" | "no" => Ok(false),
            "true" | "1" | "x" | "oui" | "yes" => Ok(true),
            _ => Err(self.malformed(format!("{field} is not a boolean: '{value}'"))),
        }
    }

    pub fn date(&self, col: usize, field: &str) -> Result<NaiveDate, AppError> {
        let value = self.text(col);
        if value.is_empty() {
            return Err(self.malformed(format!("{field} is empty")));
        }
        parse_sheet_date(value)
            .ok_or_else(|| self.malformed(format!("{field} is not a date: '{value}'")))
    }

    pub fn timestamp(&self, col: usize, field: &str) -> Result<DateTime<Utc>, AppError> {
        let value = self.text(col);
        if value.is_empty() {
            return Err(self.malformed(format!("{field} is empty")));
        }
        parse_timestamp(value)
            .ok_or_else(|| self.malformed(format!("{field} is not a timestamp: '{value}'")))
    }
}

fn parse_integer(value: &str) -> Option<u64> {
    if let Ok(n) = value.parse::<u64>() {
        return Some(n);
    }
    let float = value.parse::<f64>().ok()?;
    if float.is_finite() && float >= 0.0 && float.fract() == 0.0 && float <= u64::MAX as f64 {
        Some(float as u64)
    } else {
        None
    }
}
