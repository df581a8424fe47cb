use crate::cli::{Args, is_config_command};
use crate::config::Config;
use crate::error::AppError;
use std::io::stdout;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const DEFAULT_LOG_FILE_NAME: &str = "tm_leaderboard.log";
const DEFAULT_DIRECTIVE: &str = "tm_leaderboard=info";

fn env_filter() -> Result<EnvFilter, AppError> {
    let directive = DEFAULT_DIRECTIVE
        .parse()
        .map_err(|e| AppError::log_setup_error(format!("Invalid log directive: {e}")))?;
    Ok(EnvFilter::from_default_env().add_directive(directive))
}

/// Splits a log file path into its directory and file name.
///
/// `custom` comes from `--log-file` or the config file; without one the
/// default log directory and file name are used.
pub fn resolve_log_location(custom: Option<&str>) -> (String, String) {
    match custom {
        Some(custom_path) => {
            let path = Path::new(custom_path);
            let parent = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => Path::new("."),
            };
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(DEFAULT_LOG_FILE_NAME);
            (parent.to_string_lossy().to_string(), file_name.to_string())
        }
        None => (
            Config::get_log_dir_path(),
            DEFAULT_LOG_FILE_NAME.to_string(),
        ),
    }
}

/// Whether log lines should also go to stdout: debug mode and the config
/// commands do, the board itself (interactive or once) does not.
pub fn logs_to_stdout(args: &Args) -> bool {
    args.debug || is_config_command(args)
}

/// Builds the subscriber: an ANSI stdout layer when `to_stdout` is set, and
/// a plain layer writing to `file_writer`.
pub fn log_subscriber<W>(
    file_writer: W,
    to_stdout: bool,
) -> Result<impl Subscriber + Send + Sync + 'static, AppError>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let stdout_layer = if to_stdout {
        Some(
            fmt::Layer::new()
                .with_writer(stdout)
                .with_ansi(true)
                .with_filter(env_filter()?),
        )
    } else {
        None
    };

    Ok(tracing_subscriber::registry().with(stdout_layer).with(
        fmt::Layer::new()
            .with_writer(file_writer)
            .with_ansi(false)
            .with_filter(env_filter()?),
    ))
}

/// Sets up logging configuration for the application.
///
/// - Interactive and once modes: logs only to file
/// - `--debug` and config commands: logs to both stdout and file
/// - Creates log directory if it doesn't exist
/// - Uses daily rolling file appender
///
/// Returns the path to the log file and the guard that must be kept alive
/// for the duration of the program to ensure proper log flushing.
pub async fn setup_logging(args: &Args) -> Result<(String, WorkerGuard), AppError> {
    // Read the config file directly; loading it fully could prompt for a key
    let config_path = Config::get_config_path();
    let config_log_path = if Path::new(&config_path).exists() {
        Config::load_from_path(&config_path)
            .await
            .ok()
            .and_then(|config| config.log_file_path)
    } else {
        None
    };
    let env_log_path = std::env::var(crate::constants::env_vars::LOG_FILE).ok();

    let custom_log_path = args
        .log_file
        .as_deref()
        .or(env_log_path.as_deref())
        .or(config_log_path.as_deref());
    let (log_dir, log_file_name) = resolve_log_location(custom_log_path);

    if !Path::new(&log_dir).exists() {
        tokio::fs::create_dir_all(&log_dir).await.map_err(|e| {
            AppError::log_setup_error(format!("Failed to create log directory: {e}"))
        })?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &log_file_name);

    // The guard must outlive every log call so buffered lines get flushed
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    log_subscriber(non_blocking, logs_to_stdout(args))?
        .try_init()
        .map_err(|e| AppError::log_setup_error(e.to_string()))?;

    let log_file_path = format!("{log_dir}/{log_file_name}");
    Ok((log_file_path, guard))
}
