//! UI state container shared by the once and interactive modes.

use super::pagination::MapBrowser;
use crate::data_fetcher::models::Dashboard;
use crate::error::AppError;
use clap::ValueEnum;

/// Screens of the board, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Tab {
    #[default]
    Home,
    Maps,
    Poules,
    Favorites,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::Maps, Tab::Poules, Tab::Favorites];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Home => "ACCUEIL",
            Tab::Maps => "MAPS",
            Tab::Poules => "POULES",
            Tab::Favorites => "FAVORIS",
        }
    }

    fn position(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(&self) -> Tab {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Tab {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Tab for a 1-based number key.
    pub fn from_number(n: u32) -> Option<Tab> {
        let idx = (n as usize).checked_sub(1)?;
        Self::ALL.get(idx).copied()
    }
}

/// What the last load produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    /// Fetch failed; holds the message for the error page.
    Failed(String),
    Ready(Dashboard),
}

/// Everything the renderers need: the loaded data, the active tab and the
/// map selection with its page cursor.
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub tab: Tab,
    load: LoadState,
    browser: MapBrowser,
}

impl DashboardState {
    pub fn new(tab: Tab) -> Self {
        Self {
            tab,
            load: LoadState::Loading,
            browser: MapBrowser::default(),
        }
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn dashboard(&self) -> Option<&Dashboard> {
        match &self.load {
            LoadState::Ready(dashboard) => Some(dashboard),
            _ => None,
        }
    }

    pub fn browser(&self) -> &MapBrowser {
        &self.browser
    }

    pub fn browser_mut(&mut self) -> &mut MapBrowser {
        &mut self.browser
    }

    /// Replaces all data with a freshly fetched dashboard. The previously
    /// selected map id is selected again, on its first page.
    pub fn set_dashboard(&mut self, dashboard: Dashboard) {
        let previous_id = self.browser.selected().map(|entry| entry.id);
        self.browser = MapBrowser::new(dashboard.map_entries.clone());
        if let Some(id) = previous_id {
            self.browser.select_id(id);
        }
        self.load = LoadState::Ready(dashboard);
    }

    /// Drops all data and keeps only the error message.
    pub fn set_error(&mut self, error: &AppError) {
        self.browser = MapBrowser::default();
        self.load = LoadState::Failed(error.user_message());
    }

    pub fn set_loading(&mut self) {
        self.load = LoadState::Loading;
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.load, LoadState::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::MapEntry;
    use chrono::Utc;

    fn dashboard(ids: &[u32]) -> Dashboard {
        Dashboard {
            seasons: vec![],
            current: None,
            map_entries: ids.iter().map(|id| MapEntry::new(*id)).collect(),
            poules: vec![],
            favorites: vec![],
            rejected_rows: 0,
            fetched_at: Utc::now(),
        }
    }

    #[test]
    fn test_tab_cycle() {
        assert_eq!(Tab::Home.next(), Tab::Maps);
        assert_eq!(Tab::Favorites.next(), Tab::Home);
        assert_eq!(Tab::Home.previous(), Tab::Favorites);
        assert_eq!(Tab::from_number(3), Some(Tab::Poules));
        assert_eq!(Tab::from_number(0), None);
        assert_eq!(Tab::from_number(5), None);
    }

    #[test]
    fn test_state_transitions() {
        let mut state = DashboardState::new(Tab::Maps);
        assert!(state.is_loading());
        assert!(state.dashboard().is_none());

        state.set_dashboard(dashboard(&[1, 2]));
        assert_eq!(state.browser().entries().len(), 2);

        state.set_error(&AppError::network_timeout("url"));
        assert_eq!(
            state.load_state(),
            &LoadState::Failed("Le serveur ne répond pas".to_string())
        );
        assert!(state.browser().entries().is_empty());
    }

    #[test]
    fn test_refresh_keeps_selected_map_on_first_page() {
        let mut state = DashboardState::new(Tab::Maps);
        state.set_dashboard(dashboard(&[1, 2, 3]));
        state.browser_mut().select(2);

        state.set_dashboard(dashboard(&[3, 4]));
        assert_eq!(state.browser().selected().unwrap().id, 3);
        assert_eq!(state.browser().pager().page_index(), 0);

        state.set_dashboard(dashboard(&[4]));
        assert!(state.browser().selected().is_none());
    }
}
