//! User interaction and prompts for configuration setup
//!
//! This module handles user prompts and input collection for configuration
//! initialization when config files don't exist.

use crate::error::AppError;
use tokio::io::{self, AsyncBufReadExt};

async fn prompt(message: &str) -> Result<String, AppError> {
    println!("{message}");
    let mut input = String::new();
    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin);
    reader.read_line(&mut input).await?;
    Ok(input.trim().to_string())
}

/// Prompts the user for the spreadsheet API key.
///
/// # Example
/// ```no_run
/// use tm_leaderboard::config::user_prompts::prompt_for_api_key;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let api_key = prompt_for_api_key().await?;
/// # Ok(())
/// # }
/// ```
pub async fn prompt_for_api_key() -> Result<String, AppError> {
    prompt("Please enter your Google Sheets API key: ").await
}

/// Prompts the user for the id of the spreadsheet to read.
pub async fn prompt_for_spreadsheet_id() -> Result<String, AppError> {
    prompt("Please enter the spreadsheet id: ").await
}
