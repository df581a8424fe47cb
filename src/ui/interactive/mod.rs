//! Interactive terminal board: event loop, key handling and terminal setup.

pub mod core;
pub mod input_handler;
pub mod terminal_manager;

pub use self::core::{InitialView, run_interactive_ui};
pub use input_handler::{Action, apply_action, map_key};
