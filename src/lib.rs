//! Trackmania Cup Leaderboard Viewer Library
//!
//! This library reads a Trackmania cup spreadsheet (seasons, maps, finishes,
//! poules and favourites) through the Google Sheets values API and renders it
//! as a terminal board.
//!
//! # Examples
//!
//! ```rust,no_run
//! use tm_leaderboard::board_ui::build_page;
//! use tm_leaderboard::ui::{DashboardState, Tab};
//! use tm_leaderboard::{AppError, Config, fetch_dashboard};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let dashboard = fetch_dashboard(&config).await?;
//!
//!     let mut state = DashboardState::new(Tab::Maps);
//!     state.set_dashboard(dashboard);
//!     state.browser_mut().select(0);
//!
//!     let today = chrono::Local::now().date_naive();
//!     let page = build_page(&state, today);
//!     page.render_buffered(&mut std::io::stdout(), true, false, None)?;
//!
//!     Ok(())
//! }
//! ```

pub mod board_ui;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod logging;
pub mod testing_utils;
pub mod ui;
pub mod version;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::fetch_dashboard;
pub use data_fetcher::models::{Dashboard, Edition, Finish, MapEntry};
pub use error::AppError;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
