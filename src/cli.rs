use crate::ui::Tab;
use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Determines if the application should run in non-interactive mode
/// Non-interactive mode is used when any of these conditions are met:
/// - --once flag is set (render once and exit)
/// - config operations are requested
/// - --version flag is set
pub fn is_noninteractive_mode(args: &Args) -> bool {
    args.once || is_config_command(args) || args.version
}

/// Whether the arguments ask for a configuration change or listing.
pub fn is_config_command(args: &Args) -> bool {
    args.new_api_key.is_some()
        || args.new_spreadsheet_id.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.list_config
}

/// Trackmania cup leaderboard viewer
///
/// Reads seasons, maps, finishes, poules and favourites from the cup
/// spreadsheet and shows them as a terminal board.
///
/// In interactive mode (default):
/// - Use Tab/Shift+Tab or 1-4 to switch tabs
/// - Use ↑/↓ to select a map on the maps tab
/// - Use ←/→ to change page, Home/End for the first/last page
/// - Press 'r' to refresh data (10s cooldown between refreshes)
/// - Press 'q' or Esc to quit
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
#[command(disable_version_flag = true)]
#[command(styles = get_styles())]
pub struct Args {
    /// Render the board once and exit. The output stays visible in terminal history.
    #[arg(short, long)]
    pub once: bool,

    /// Tab to open.
    #[arg(
        short = 't',
        long = "tab",
        value_enum,
        default_value = "home",
        help_heading = "Display Options"
    )]
    pub tab: Tab,

    /// Map id to select on the maps tab.
    #[arg(short = 'm', long = "map", help_heading = "Display Options")]
    pub map: Option<u32>,

    /// Leaderboard page of the selected map, starting at 1.
    #[arg(long = "page", requires = "map", help_heading = "Display Options")]
    pub page: Option<usize>,

    /// Disable colours in once mode.
    #[arg(long = "plain", short = 'p', help_heading = "Display Options")]
    pub plain: bool,

    /// Update the Google Sheets API key in config.
    #[arg(long = "set-api-key", value_name = "KEY", help_heading = "Configuration")]
    pub new_api_key: Option<String>,

    /// Update the spreadsheet id in config.
    #[arg(long = "set-spreadsheet", value_name = "ID", help_heading = "Configuration")]
    pub new_spreadsheet_id: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Show version information
    #[arg(short = 'V', long = "version", help_heading = "Info")]
    pub version: bool,

    /// Enable debug mode which doesn't switch to the alternate screen.
    /// Logs are written to stdout as well as the log file.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
