//! Keyboard input handling for the interactive board.
//!
//! Keys are first mapped to an [`Action`]; actions other than quit and
//! refresh are applied directly to the [`DashboardState`].

use crate::ui::dashboard::{DashboardState, Tab};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Refresh,
    NextTab,
    PreviousTab,
    SelectTab(Tab),
    NextMap,
    PreviousMap,
    FirstPage,
    PreviousPage,
    NextPage,
    LastPage,
}

/// Maps a key event to an action. Key releases are ignored.
pub fn map_key(key_event: &KeyEvent) -> Option<Action> {
    if key_event.kind == KeyEventKind::Release {
        return None;
    }

    if key_event.modifiers.contains(KeyModifiers::CONTROL)
        && key_event.code == KeyCode::Char('c')
    {
        return Some(Action::Quit);
    }

    match key_event.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Refresh),
        KeyCode::Tab if key_event.modifiers.contains(KeyModifiers::SHIFT) => {
            Some(Action::PreviousTab)
        }
        KeyCode::Tab => Some(Action::NextTab),
        KeyCode::BackTab => Some(Action::PreviousTab),
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(Tab::from_number)
            .map(Action::SelectTab),
        KeyCode::Down => Some(Action::NextMap),
        KeyCode::Up => Some(Action::PreviousMap),
        KeyCode::Left => Some(Action::PreviousPage),
        KeyCode::Right => Some(Action::NextPage),
        KeyCode::Home => Some(Action::FirstPage),
        KeyCode::End => Some(Action::LastPage),
        _ => None,
    }
}

/// Applies a navigation action. Returns true when the screen must be redrawn.
///
/// Map and page actions only apply on the maps tab. Quit and refresh are
/// handled by the caller and leave the state untouched.
pub fn apply_action(state: &mut DashboardState, action: Action) -> bool {
    let before_tab = state.tab;
    let before_selection = state.browser().selected_index();
    let before_page = state.browser().pager().page_index();

    match action {
        Action::Quit | Action::Refresh => return false,
        Action::NextTab => state.tab = state.tab.next(),
        Action::PreviousTab => state.tab = state.tab.previous(),
        Action::SelectTab(tab) => state.tab = tab,
        _ if state.tab != Tab::Maps => return false,
        Action::NextMap => state.browser_mut().select_next(),
        Action::PreviousMap => state.browser_mut().select_previous(),
        Action::FirstPage => state.browser_mut().first_page(),
        Action::PreviousPage => state.browser_mut().previous_page(),
        Action::NextPage => state.browser_mut().next_page(),
        Action::LastPage => state.browser_mut().last_page(),
    }

    // Re-selecting resets the page, so a selection move always redraws
    let selection_moved = matches!(action, Action::NextMap | Action::PreviousMap)
        && state.browser().selected_index().is_some();

    state.tab != before_tab
        || state.browser().selected_index() != before_selection
        || state.browser().pager().page_index() != before_page
        || selection_moved
}
