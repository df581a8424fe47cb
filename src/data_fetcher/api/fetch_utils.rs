//! HTTP fetching with status-aware error handling

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument};

use crate::error::AppError;

/// Maps a non-success HTTP status onto the matching [`AppError`].
pub(super) fn status_error(status: StatusCode, url: &str) -> AppError {
    let status_code = status.as_u16();
    let reason = status.canonical_reason().unwrap_or("Unknown error");

    match status_code {
        404 => AppError::api_not_found(url),
        429 => AppError::api_rate_limit(reason, url),
        400..=499 => AppError::api_client_error(status_code, reason, url),
        502 | 503 => AppError::api_service_unavailable(status_code, reason, url),
        _ => AppError::api_server_error(status_code, reason, url),
    }
}

/// Classifies a body that failed to deserialize.
pub(super) fn parse_error(response_text: &str, e: serde_json::Error, url: &str) -> AppError {
    if response_text.trim().is_empty() {
        AppError::api_no_data("Response body is empty", url)
    } else if !response_text.trim_start().starts_with('{')
        && !response_text.trim_start().starts_with('[')
    {
        AppError::api_malformed_json("Response is not valid JSON", url)
    } else {
        // Valid JSON but unexpected structure
        AppError::api_unexpected_structure(e.to_string(), url)
    }
}

/// Issues one GET and parses the JSON body.
///
/// `url` must not contain secrets: it is logged and copied into errors. The
/// API key travels in `secret_query` which is never logged.
///
/// There is no retry and no caching: a failure is returned to the caller as-is.
#[instrument(skip(client, query, secret_query))]
pub(super) async fn fetch<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    query: &[(&'static str, String)],
    secret_query: &[(&'static str, String)],
) -> Result<T, AppError> {
    info!("Fetching data from URL: {url} ({} query parameters)", query.len());

    let response = match client.get(url).query(query).query(secret_query).send().await {
        Ok(resp) => resp,
        Err(e) => {
            // reqwest errors embed the full URL, key included
            let e = e.without_url();
            error!("Request failed for URL {}: {}", url, e);
            return if e.is_timeout() {
                Err(AppError::network_timeout(url))
            } else if e.is_connect() {
                Err(AppError::network_connection(url, e.to_string()))
            } else {
                Err(AppError::ApiFetch(e))
            };
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        error!(
            "HTTP {} - {} (URL: {})",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown error"),
            url
        );
        return Err(status_error(status, url));
    }

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            let e = e.without_url();
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(AppError::ApiFetch(e));
        }
    };

    debug!("Response length: {} bytes", response_text.len());

    match serde_json::from_str::<T>(&response_text) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            error!("Failed to parse API response: {} (URL: {})", e, url);
            error!(
                "Response text (first 200 chars): {}",
                &response_text.chars().take(200).collect::<String>()
            );
            Err(parse_error(&response_text, e, url))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::BatchGetResponse;

    const URL: &str = "https://sheets.example.com/abc/values:batchGet";

    #[test]
    fn test_status_mapping() {
        assert!(matches!(
            status_error(StatusCode::NOT_FOUND, URL),
            AppError::ApiNotFound { .. }
        ));
        assert!(matches!(
            status_error(StatusCode::TOO_MANY_REQUESTS, URL),
            AppError::ApiRateLimit { .. }
        ));
        assert!(matches!(
            status_error(StatusCode::FORBIDDEN, URL),
            AppError::ApiClientError { status: 403, .. }
        ));
        assert!(matches!(
            status_error(StatusCode::SERVICE_UNAVAILABLE, URL),
            AppError::ApiServiceUnavailable { status: 503, .. }
        ));
        assert!(matches!(
            status_error(StatusCode::INTERNAL_SERVER_ERROR, URL),
            AppError::ApiServerError { status: 500, .. }
        ));
    }

    fn parse(text: &str) -> AppError {
        let err = serde_json::from_str::<BatchGetResponse>(text).unwrap_err();
        parse_error(text, err, URL)
    }

    #[test]
    fn test_parse_error_classification() {
        assert!(matches!(parse(""), AppError::ApiNoData { .. }));
        assert!(matches!(parse("<html>"), AppError::ApiMalformedJson { .. }));
        assert!(matches!(
            parse(r#"{"valueRanges": 3}"#),
            AppError::ApiUnexpectedStructure { .. }
        ));
        // Truncated bodies land in a fetch variant too
        assert!(matches!(
            parse(r#"{"valueRanges": ["#),
            AppError::ApiUnexpectedStructure { .. }
        ));
    }
}
