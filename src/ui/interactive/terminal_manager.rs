//! Terminal setup and cleanup for the interactive board.
//!
//! In debug mode the terminal is left alone so log lines written to stdout
//! stay readable.

use crate::error::AppError;
use crossterm::{
    cursor, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::{Stdout, stdout};

#[derive(Debug, Clone, Default)]
pub struct TerminalConfig {
    pub debug_mode: bool,
}

/// Owns the terminal while the board runs and restores it on drop, so an
/// early return through `?` does not leave the shell in raw mode.
pub struct TerminalManager {
    config: TerminalConfig,
    active: bool,
}

impl TerminalManager {
    pub fn with_config(config: TerminalConfig) -> Self {
        Self {
            config,
            active: false,
        }
    }

    pub fn config(&self) -> &TerminalConfig {
        &self.config
    }

    /// Enters raw mode and the alternate screen and hides the cursor.
    pub fn setup_terminal(&mut self) -> Result<Stdout, AppError> {
        let mut out = stdout();
        if !self.config.debug_mode {
            enable_raw_mode()?;
            self.active = true;
            execute!(out, EnterAlternateScreen, cursor::Hide)?;
        }
        Ok(out)
    }

    /// Restores the terminal. Safe to call more than once.
    pub fn cleanup_terminal(&mut self) -> Result<(), AppError> {
        if self.active {
            self.active = false;
            disable_raw_mode()?;
            execute!(stdout(), cursor::Show, LeaveAlternateScreen)?;
        }
        Ok(())
    }
}

impl Drop for TerminalManager {
    fn drop(&mut self) {
        if let Err(e) = self.cleanup_terminal() {
            tracing::error!("Failed to restore terminal: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_mode_leaves_terminal_untouched() {
        let mut manager = TerminalManager::with_config(TerminalConfig { debug_mode: true });
        assert!(manager.config().debug_mode);
        assert!(manager.setup_terminal().is_ok());
        assert!(!manager.active);
        assert!(manager.cleanup_terminal().is_ok());
    }
}
