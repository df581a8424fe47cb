use super::Config;
use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - API key and spreadsheet id cannot be empty
/// - API base URL must start with http:// or https://
/// - At least one season sheet, and no blank sheet names
/// - HTTP timeout must be positive
/// - If log file path is provided, it cannot be empty and its parent
///   directory must exist or be creatable
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    if config.api_key.trim().is_empty() {
        return Err(AppError::config_error("API key cannot be empty"));
    }

    if config.spreadsheet_id.trim().is_empty() {
        return Err(AppError::config_error("Spreadsheet id cannot be empty"));
    }

    if !config.api_base_url.starts_with("http://") && !config.api_base_url.starts_with("https://")
    {
        return Err(AppError::config_error(
            "API base URL must start with http:// or https://",
        ));
    }

    if config.season_sheets.is_empty() {
        return Err(AppError::config_error(
            "At least one season sheet must be configured",
        ));
    }

    let sheet_names = config
        .season_sheets
        .iter()
        .chain([&config.poule_sheet, &config.favorites_sheet]);
    for sheet in sheet_names {
        if sheet.trim().is_empty() {
            return Err(AppError::config_error("Sheet names cannot be empty"));
        }
    }

    if config.http_timeout_seconds == 0 {
        return Err(AppError::config_error("HTTP timeout must be at least 1 second"));
    }

    if let Some(log_path) = &config.log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        // Check if parent directory exists or can be created
        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
