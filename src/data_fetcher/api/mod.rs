pub mod fetch_utils;
pub mod http_client;
pub mod orchestrator;
pub mod urls;

// Re-export URL and range utilities
pub use urls::*;
// Re-export HTTP client utilities
pub use http_client::create_http_client_with_timeout;
// Re-export the fetch pipeline
pub use orchestrator::{fetch_batch, fetch_dashboard, fetch_dashboard_with_client, split_response};
