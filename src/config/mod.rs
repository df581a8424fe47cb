use crate::constants::{DEFAULT_HTTP_TIMEOUT_SECONDS, env_vars, sheets};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod user_prompts;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use user_prompts::{prompt_for_api_key, prompt_for_spreadsheet_id};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// Google Sheets API key, sent with every batch read.
    pub api_key: String,
    /// Id of the spreadsheet holding the cup data.
    pub spreadsheet_id: String,
    /// Base URL of the values API, without the spreadsheet id.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// One sheet per game, each holding maps, finishes and editions.
    #[serde(default = "default_season_sheets")]
    pub season_sheets: Vec<String>,
    #[serde(default = "default_poule_sheet")]
    pub poule_sheet: String,
    #[serde(default = "default_favorites_sheet")]
    pub favorites_sheet: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for the batch request. Defaults to 30 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
}

fn default_api_base_url() -> String {
    sheets::DEFAULT_API_BASE_URL.to_string()
}

fn default_season_sheets() -> Vec<String> {
    vec![sheets::DEFAULT_SEASON_SHEET.to_string()]
}

fn default_poule_sheet() -> String {
    sheets::DEFAULT_POULE_SHEET.to_string()
}

fn default_favorites_sheet() -> String {
    sheets::DEFAULT_FAVORITES_SHEET.to_string()
}

fn default_http_timeout() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_key: String::new(),
            spreadsheet_id: String::new(),
            api_base_url: default_api_base_url(),
            season_sheets: default_season_sheets(),
            poule_sheet: default_poule_sheet(),
            favorites_sheet: default_favorites_sheet(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
        }
    }
}

fn env_api_key() -> Option<String> {
    std::env::var(env_vars::API_KEY)
        .or_else(|_| std::env::var(env_vars::GOOGLE_API_KEY))
        .ok()
}

impl Config {
    /// Loads configuration from the default config file location.
    /// If no config file exists, falls back to environment variables and
    /// finally prompts the user and saves the answers.
    ///
    /// # Environment Variables
    /// - `TMLB_API_KEY` (or `GOOGLE_API_KEY`) - Override API key
    /// - `TMLB_SPREADSHEET_ID` - Override spreadsheet id
    /// - `TMLB_LOG_FILE` - Override log file path
    /// - `TMLB_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else if env_api_key().is_some() {
            Config::default()
        } else {
            let config = Config {
                api_key: prompt_for_api_key().await?,
                spreadsheet_id: prompt_for_spreadsheet_id().await?,
                ..Config::default()
            };
            config.save().await?;
            config
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides on top of file values.
    pub fn apply_env_overrides(&mut self) {
        if let Some(api_key) = env_api_key() {
            self.api_key = api_key;
        }

        if let Ok(spreadsheet_id) = std::env::var(env_vars::SPREADSHEET_ID) {
            self.spreadsheet_id = spreadsheet_id;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// The API key with everything but its last four characters hidden.
    pub fn masked_api_key(&self) -> String {
        let chars: Vec<char> = self.api_key.chars().collect();
        if chars.len() <= 4 {
            return "*".repeat(chars.len());
        }
        let visible: String = chars[chars.len() - 4..].iter().collect();
        format!("{}{visible}", "*".repeat(chars.len() - 4))
    }

    /// Displays current configuration settings to stdout.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if Path::new(&config_path).exists() {
            let config = Config::load().await?;
            println!("\nCurrent Configuration");
            println!("────────────────────────────────────");
            println!("Config Location:");
            println!("{config_path}");
            println!("────────────────────────────────────");
            println!("API Key:");
            println!("{}", config.masked_api_key());
            println!("────────────────────────────────────");
            println!("Spreadsheet:");
            println!("{}", config.spreadsheet_id);
            println!("────────────────────────────────────");
            println!("Sheets:");
            println!("Seasons: {}", config.season_sheets.join(", "));
            println!("Poules: {}", config.poule_sheet);
            println!("Favorites: {}", config.favorites_sheet);
            println!("────────────────────────────────────");
            println!("HTTP Timeout:");
            println!("{} seconds", config.http_timeout_seconds);
            println!("────────────────────────────────────");
            println!("Log File Location:");
            if let Some(custom_path) = &config.log_file_path {
                println!("{custom_path}");
            } else {
                println!("{log_dir}/tm_leaderboard.log");
                println!("(Default location)");
            }
        } else {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path, creating the parent
    /// directory if it doesn't exist.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without env overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_config_load_minimal_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let config_content = r#"
api_key = "AIzaTestKey"
spreadsheet_id = "1Yqkhv4ayhwFk"
"#;
        tokio::fs::write(&config_path, config_content).await.unwrap();

        let config = Config::load_from_path(&config_path_str).await.unwrap();

        assert_eq!(config.api_key, "AIzaTestKey");
        assert_eq!(config.spreadsheet_id, "1Yqkhv4ayhwFk");
        assert_eq!(config.api_base_url, sheets::DEFAULT_API_BASE_URL);
        assert_eq!(config.season_sheets, vec!["TM2020".to_string()]);
        assert_eq!(config.poule_sheet, "Poules");
        assert_eq!(config.favorites_sheet, "Favoris");
        assert_eq!(config.log_file_path, None);
        assert_eq!(config.http_timeout_seconds, DEFAULT_HTTP_TIMEOUT_SECONDS);
    }

    #[tokio::test]
    async fn test_config_load_full_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let config_content = r#"
api_key = "k"
spreadsheet_id = "s"
api_base_url = "http://localhost:8080/v4/spreadsheets"
season_sheets = ["TM2020", "TMNF"]
poule_sheet = "Groupes"
favorites_sheet = "Votes"
log_file_path = "/custom/log/path"
http_timeout_seconds = 5
"#;
        tokio::fs::write(&config_path, config_content).await.unwrap();

        let config = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(config.season_sheets.len(), 2);
        assert_eq!(config.poule_sheet, "Groupes");
        assert_eq!(config.favorites_sheet, "Votes");
        assert_eq!(config.log_file_path, Some("/custom/log/path".to_string()));
        assert_eq!(config.http_timeout_seconds, 5);
    }

    #[tokio::test]
    async fn test_config_save_and_reload() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");
        let config_path_str = config_path.to_string_lossy();
        let config = Config {
            api_key: "AIzaTestKey".to_string(),
            spreadsheet_id: "abc".to_string(),
            log_file_path: Some("/custom/log/path".to_string()),
            ..Config::default()
        };

        config.save_to_path(&config_path_str).await.unwrap();
        assert!(config_path.exists());

        let content = tokio::fs::read_to_string(&config_path).await.unwrap();
        assert!(
            content.contains("api_key") && content.contains("AIzaTestKey"),
            "Content should contain the api key. Content: {content}"
        );

        let loaded = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(loaded, config);
    }

    #[tokio::test]
    async fn test_config_save_without_log_path_omits_field() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config = Config {
            api_key: "k".to_string(),
            spreadsheet_id: "s".to_string(),
            ..Config::default()
        };
        config
            .save_to_path(&config_path.to_string_lossy())
            .await
            .unwrap();
        let content = tokio::fs::read_to_string(&config_path).await.unwrap();
        assert!(!content.contains("log_file_path"));
    }

    #[tokio::test]
    async fn test_load_from_missing_path_fails() {
        let temp_dir = tempdir().unwrap();
        let missing = temp_dir.path().join("missing.toml");
        let result = Config::load_from_path(&missing.to_string_lossy()).await;
        assert!(matches!(result, Err(AppError::Io(_))));
    }

    #[test]
    fn test_masked_api_key() {
        let config = Config {
            api_key: "AIzaSyABCDEF1234".to_string(),
            ..Config::default()
        };
        assert_eq!(config.masked_api_key(), "************1234");

        let short = Config {
            api_key: "abc".to_string(),
            ..Config::default()
        };
        assert_eq!(short.masked_api_key(), "***");
    }
}
