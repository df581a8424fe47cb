use crate::board_ui::build_page;
use crate::cli::Args;
use crate::config::Config;
use crate::constants::text;
use crate::data_fetcher::fetch_dashboard;
use crate::error::AppError;
use crate::ui::{DashboardState, InitialView};
use crate::version;
use chrono::{Local, Utc};
use crossterm::{execute, terminal::SetTitle};
use std::io::stdout;
use std::path::Path;

/// Validates command line argument combinations.
///
/// Returns an error if incompatible arguments are used together.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    if args.page == Some(0) {
        return Err(AppError::config_error("Pages are numbered from 1 (--page)"));
    }
    if args.new_log_file_path.is_some() && args.clear_log_file_path {
        return Err(AppError::config_error(
            "Cannot use both --set-log-file and --clear-log-file",
        ));
    }
    Ok(())
}

/// Opening tab, map and page from the command line. `--page` is 1-based.
pub fn initial_view(args: &Args) -> InitialView {
    InitialView {
        tab: args.tab,
        map: args.map,
        page: args.page.map(|page| page.saturating_sub(1)),
    }
}

pub fn handle_version_command() -> Result<(), AppError> {
    execute!(stdout(), SetTitle(text::TITLE))?;
    version::print_version();
    Ok(())
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    execute!(stdout(), SetTitle(text::TITLE))?;
    version::print_logo();
    Config::display().await?;
    Ok(())
}

/// Applies the config update flags to `config`.
pub fn apply_config_updates(config: &mut Config, args: &Args) {
    if let Some(api_key) = &args.new_api_key {
        config.api_key = api_key.clone();
    }
    if let Some(spreadsheet_id) = &args.new_spreadsheet_id {
        config.spreadsheet_id = spreadsheet_id.clone();
    }
    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
    }
}

/// Handles configuration update commands (--set-api-key, --set-spreadsheet,
/// --set-log-file, --clear-log-file).
///
/// Starts from the saved file when there is one, so unrelated settings are
/// kept, and never prompts.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let config_path = Config::get_config_path();
    let mut config = if Path::new(&config_path).exists() {
        Config::load_from_path(&config_path).await?
    } else {
        Config::default()
    };

    apply_config_updates(&mut config, args);
    if args.clear_log_file_path {
        println!("Custom log file path cleared. Using default location.");
    }

    config.save().await?;
    tracing::info!("Config saved to {}", config_path);
    println!("Config updated successfully!");
    Ok(())
}

/// Handles the --once command.
///
/// Fetches the spreadsheet, renders the requested tab to stdout and exits.
/// A fetch failure renders the error page and still exits successfully.
pub async fn handle_once_command(args: &Args, config: &Config) -> Result<(), AppError> {
    let mut state = DashboardState::new(args.tab);

    match fetch_dashboard(config).await {
        Ok(dashboard) => {
            state.set_dashboard(dashboard);
            initial_view(args).apply(&mut state);
        }
        Err(e) => {
            tracing::error!("Failed to fetch dashboard: {}", e);
            state.set_error(&e);
        }
    }

    let today = Utc::now().with_timezone(&Local).date_naive();
    let page = build_page(&state, today);

    if !args.plain {
        execute!(stdout(), SetTitle(text::TITLE))?;
    }
    page.render_buffered(&mut stdout(), !args.plain, false, None)?;
    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::Tab;
    use clap::Parser;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("tm_leaderboard").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_validate_args() {
        assert!(validate_args(&parse(&[])).is_ok());
        assert!(validate_args(&parse(&["-m", "3", "--page", "0"])).is_err());
        assert!(validate_args(&parse(&["--set-log-file", "a.log", "--clear-log-file"])).is_err());
    }

    #[test]
    fn test_initial_view_page_is_zero_based() {
        let view = initial_view(&parse(&["-t", "maps", "-m", "4", "--page", "3"]));
        assert_eq!(view.tab, Tab::Maps);
        assert_eq!(view.map, Some(4));
        assert_eq!(view.page, Some(2));
        assert_eq!(initial_view(&parse(&[])).page, None);
    }

    #[test]
    fn test_apply_config_updates() {
        let mut config = Config {
            api_key: "old".to_string(),
            spreadsheet_id: "sheet".to_string(),
            log_file_path: Some("/tmp/a.log".to_string()),
            ..Config::default()
        };
        apply_config_updates(&mut config, &parse(&["--set-api-key", "new"]));
        assert_eq!(config.api_key, "new");
        assert_eq!(config.spreadsheet_id, "sheet");
        assert_eq!(config.log_file_path, Some("/tmp/a.log".to_string()));

        apply_config_updates(&mut config, &parse(&["--clear-log-file"]));
        assert_eq!(config.log_file_path, None);
    }
}
