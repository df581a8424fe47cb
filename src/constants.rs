//! Application-wide constants and configuration values
//!
//! This module centralizes all magic numbers and configuration constants
//! to improve maintainability and make the codebase more configurable.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 4;

/// Number of finishes shown on one leaderboard page
pub const PAGE_SIZE: usize = 17;

/// Spreadsheet API defaults
pub mod sheets {
    /// Base URL of the values API, without the spreadsheet id
    pub const DEFAULT_API_BASE_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";

    /// Season sheet used when none is configured
    pub const DEFAULT_SEASON_SHEET: &str = "TM2020";

    pub const DEFAULT_POULE_SHEET: &str = "Poules";

    pub const DEFAULT_FAVORITES_SHEET: &str = "Favoris";

    /// Cell ranges read from every season sheet
    pub const MAPS_RANGE: &str = "A2:F33";
    pub const FINISHES_RANGE: &str = "G2:L33";
    pub const EDITIONS_RANGE: &str = "M2:R12";

    pub const POULES_RANGE: &str = "A:D";
    pub const FAVORITES_RANGE: &str = "A2:B76";

    /// Number of ranges requested per season sheet
    pub const RANGES_PER_SEASON_SHEET: usize = 3;

    pub const VALUE_RENDER_OPTION: &str = "FORMULA";
    pub const DATE_TIME_RENDER_OPTION: &str = "FORMATTED_STRING";
}

/// Environment variable names
pub mod env_vars {
    pub const API_KEY: &str = "TMLB_API_KEY";

    /// Fallback key variable shared with other Google tooling
    pub const GOOGLE_API_KEY: &str = "GOOGLE_API_KEY";

    pub const SPREADSHEET_ID: &str = "TMLB_SPREADSHEET_ID";

    pub const LOG_FILE: &str = "TMLB_LOG_FILE";

    pub const HTTP_TIMEOUT: &str = "TMLB_HTTP_TIMEOUT";
}

/// UI layout constants
pub mod ui {
    /// Content margin from terminal border
    pub const CONTENT_MARGIN: usize = 2;

    /// Fixed width of the board, in columns
    pub const BOARD_WIDTH: usize = 60;

    /// Polling interval for keyboard events in milliseconds
    pub const EVENT_POLL_MS: u64 = 100;

    /// Minimum seconds between manual refreshes
    pub const MANUAL_REFRESH_COOLDOWN_SECONDS: u64 = 10;

    /// Number of map ids shown per line in the map selector
    pub const MAPS_PER_SELECTOR_LINE: usize = 8;
}

/// Localised display strings
pub mod text {
    pub const TITLE: &str = "TRACKMANIA CUP";
    pub const IN_PROGRESS: &str = "En cours";
    pub const NO_SEASON: &str = "Aucune saison en cours";
    pub const NO_FINISHES: &str = "Aucun finish n'est disponible pour cette map.";
    pub const NO_MAP_SELECTED: &str = "Sélectionnez une map avec ↑/↓";
    pub const NO_POULES: &str = "Aucune poule";
    pub const NO_FAVORITES: &str = "Aucun favori";
    pub const LOADING: &str = "Chargement...";
    pub const MAPS_REFRESH_NOTICE: &str = "Afin de respecter les ressources des serveurs de trackmania.io, les maps sont mises à jour progressivement sur 15 minutes (5 maps / minute).";
    pub const FIRST: &str = "Début";
    pub const PREVIOUS: &str = "Précédent";
    pub const NEXT: &str = "Suivant";
    pub const LAST: &str = "Fin";
    pub const UPCOMING: &str = "À venir";
    pub const ENDED: &str = "Terminée";
    pub const ERROR_TITLE: &str = "Erreur";
    pub const RETRY_HINT: &str = "Appuyez sur r pour réessayer";
    pub const CONTROLS: &str = "Tab onglet  ↑↓ map  ←→ page  r actualiser  q quitter";
}
