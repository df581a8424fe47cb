//! Season progress computations for the home card.

use crate::data_fetcher::models::Edition;
use chrono::NaiveDate;

/// Calendar days from `from` to `to`; negative when `to` is earlier.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// Calendar days left until the season ends, counted from `today`.
pub fn days_remaining(end_at: NaiveDate, today: NaiveDate) -> i64 {
    days_between(today, end_at)
}

/// Share of the season still ahead, as a rounded percentage.
///
/// `round(days_remaining / total_days * 100)` with no clamping, so a `today`
/// outside the season window yields a negative value or one above 100.
/// Returns `None` for a zero-day season.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use tm_leaderboard::data_fetcher::processors::raw_progress;
///
/// let start = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 9, 11).unwrap();
/// let today = NaiveDate::from_ymd_opt(2024, 9, 4).unwrap();
/// assert_eq!(raw_progress(start, end, today), Some(70));
/// ```
pub fn raw_progress(start_at: NaiveDate, end_at: NaiveDate, today: NaiveDate) -> Option<i64> {
    let total_days = days_between(start_at, end_at);
    if total_days == 0 {
        return None;
    }
    let remaining = days_remaining(end_at, today);
    Some((remaining as f64 / total_days as f64 * 100.0).round() as i64)
}

/// Display value of [`raw_progress`], clamped to `0..=100`.
///
/// A zero-day season counts as finished and reports 0.
pub fn season_progress(start_at: NaiveDate, end_at: NaiveDate, today: NaiveDate) -> u8 {
    match raw_progress(start_at, end_at, today) {
        Some(percent) => percent.clamp(0, 100) as u8,
        None => 0,
    }
}

/// [`season_progress`] over an edition's own window.
pub fn edition_progress(edition: &Edition, today: NaiveDate) -> u8 {
    season_progress(edition.start_at, edition.end_at, today)
}

/// `(validated maps, announced map count)` for the finished summary.
pub fn validated_summary(edition: &Edition) -> (usize, u32) {
    (edition.validated_count(), edition.nb_maps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::MapView;

    fn day(n: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1 + n).unwrap()
    }

    #[test]
    fn test_progress_example_day_three_of_ten() {
        assert_eq!(days_remaining(day(10), day(3)), 7);
        assert_eq!(days_between(day(0), day(10)), 10);
        assert_eq!(raw_progress(day(0), day(10), day(3)), Some(70));
        assert_eq!(season_progress(day(0), day(10), day(3)), 70);
    }

    #[test]
    fn test_progress_rounding() {
        // 2 of 3 days remaining
        assert_eq!(raw_progress(day(0), day(3), day(1)), Some(67));
        // 1 of 3 days remaining
        assert_eq!(raw_progress(day(0), day(3), day(2)), Some(33));
    }

    #[test]
    fn test_raw_progress_is_unclamped() {
        assert_eq!(raw_progress(day(5), day(15), day(0)), Some(150));
        assert_eq!(raw_progress(day(0), day(10), day(15)), Some(-50));
    }

    #[test]
    fn test_season_progress_clamps() {
        assert_eq!(season_progress(day(5), day(15), day(0)), 100);
        assert_eq!(season_progress(day(0), day(10), day(15)), 0);
        assert_eq!(season_progress(day(0), day(10), day(10)), 0);
        assert_eq!(season_progress(day(0), day(10), day(0)), 100);
    }

    #[test]
    fn test_zero_day_season() {
        assert_eq!(raw_progress(day(4), day(4), day(4)), None);
        assert_eq!(season_progress(day(4), day(4), day(4)), 0);
        assert_eq!(season_progress(day(4), day(4), day(1)), 0);
    }

    #[test]
    fn test_edition_progress_uses_edition_window() {
        let mut edition = Edition {
            name: "Saison 3".to_string(),
            start_at: day(0),
            end_at: day(10),
            game: "TM2020".to_string(),
            nb_maps: 10,
            maps: vec![],
        };
        assert_eq!(edition_progress(&edition, day(3)), 70);
        edition.end_at = day(0);
        assert_eq!(edition_progress(&edition, day(3)), 0);
    }

    #[test]
    fn test_validated_summary() {
        let edition = Edition {
            name: "Saison 1".to_string(),
            start_at: day(0),
            end_at: day(10),
            game: "TMNF".to_string(),
            nb_maps: 25,
            maps: (1..=4)
                .map(|id| MapView {
                    id,
                    name: format!("Map {id}"),
                    author: "anon".to_string(),
                    validated: id % 2 == 0,
                })
                .collect(),
        };
        assert_eq!(validated_summary(&edition), (2, 25));
    }
}
