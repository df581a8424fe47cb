//! Fetch-then-extract pipeline producing a [`Dashboard`]

use chrono::{Local, NaiveDate, Utc};
use reqwest::Client;
use tracing::{info, instrument};

use super::fetch_utils::fetch;
use super::http_client::create_http_client_with_timeout;
use super::urls::{RangeLayout, build_batch_get_url, build_batch_query};
use crate::config::Config;
use crate::data_fetcher::models::{BatchGetResponse, BatchRanges, Dashboard, RawRange};
use crate::data_fetcher::processors::extract_dashboard;
use crate::error::AppError;

/// Checks that the response holds one range per requested range and splits it.
pub fn split_response(
    layout: &RangeLayout,
    response: BatchGetResponse,
    url: &str,
) -> Result<BatchRanges, AppError> {
    let expected = layout.expected_range_count();
    let received = response.value_ranges.len();
    let ranges: Vec<RawRange> = response.value_ranges.into_iter().map(RawRange::from).collect();

    BatchRanges::from_ranges(&layout.season_sheets, ranges)
        .ok_or_else(|| AppError::api_range_count_mismatch(expected, received, url))
}

/// Issues the batch read for every configured range.
#[instrument(skip(client, config))]
pub async fn fetch_batch(client: &Client, config: &Config) -> Result<BatchRanges, AppError> {
    let layout = RangeLayout::from_config(config);
    let url = build_batch_get_url(&config.api_base_url, &config.spreadsheet_id);
    let query = build_batch_query(&layout.ranges());
    let secret = [("key", config.api_key.clone())];

    let response: BatchGetResponse = fetch(client, &url, &query, &secret).await?;
    info!(
        "Received {} value ranges for spreadsheet {}",
        response.value_ranges.len(),
        config.spreadsheet_id
    );

    split_response(&layout, response, &url)
}

/// Fetches and extracts with an existing client, as of `today`.
pub async fn fetch_dashboard_with_client(
    client: &Client,
    config: &Config,
    today: NaiveDate,
) -> Result<Dashboard, AppError> {
    let batch = fetch_batch(client, config).await?;
    let dashboard = extract_dashboard(&batch, today);
    info!(
        "Extracted {} seasons, {} map leaderboards, {} poules, {} favorites",
        dashboard.seasons.len(),
        dashboard.map_entries.len(),
        dashboard.poules.len(),
        dashboard.favorites.len()
    );
    Ok(dashboard)
}

/// Fetches the whole spreadsheet once and builds a fresh [`Dashboard`].
///
/// # Example
/// ```rust,no_run
/// use tm_leaderboard::{Config, fetch_dashboard};
///
/// # async fn example() -> Result<(), tm_leaderboard::AppError> {
/// let config = Config::load().await?;
/// let dashboard = fetch_dashboard(&config).await?;
/// println!("{} maps", dashboard.map_entries.len());
/// # Ok(())
/// # }
/// ```
pub async fn fetch_dashboard(config: &Config) -> Result<Dashboard, AppError> {
    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
    let today = Utc::now().with_timezone(&Local).date_naive();
    fetch_dashboard_with_client(&client, config, today).await
}
