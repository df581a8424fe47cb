pub mod cells;
pub mod extraction;
pub mod progress;
pub mod time_formatting;

// Re-export extraction entry points
pub use extraction::{
    Extracted, extract_dashboard, extract_editions, extract_favorites, extract_finishes,
    extract_map_entries, extract_maps, extract_poules, select_current_season,
};

// Re-export progress computations
pub use progress::{
    days_remaining, edition_progress, raw_progress, season_progress, validated_summary,
};

// Re-export formatters
pub use time_formatting::{
    format_date, format_date_in, format_day, format_duration, parse_sheet_date, parse_timestamp,
};
