// src/main.rs
use clap::Parser;
use tm_leaderboard::cli::{Args, is_config_command};
use tm_leaderboard::commands::{
    handle_config_update_command, handle_list_config_command, handle_once_command,
    handle_version_command, initial_view, validate_args,
};
use tm_leaderboard::config::Config;
use tm_leaderboard::error::AppError;
use tm_leaderboard::logging::setup_logging;
use tm_leaderboard::ui::run_interactive_ui;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    validate_args(&args)?;

    if args.version {
        return handle_version_command();
    }

    // The guard must be kept alive for the duration of the program
    let (log_file_path, _guard) = setup_logging(&args).await?;
    tracing::info!("Logging to {}", log_file_path);

    if args.list_config {
        return handle_list_config_command().await;
    }

    if is_config_command(&args) {
        return handle_config_update_command(&args).await;
    }

    let config = Config::load().await?;

    if args.once {
        return handle_once_command(&args, &config).await;
    }

    run_interactive_ui(&config, initial_view(&args), args.debug).await
}
