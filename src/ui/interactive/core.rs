//! Main loop of the interactive board.

use super::input_handler::{Action, apply_action, map_key};
use super::terminal_manager::{TerminalConfig, TerminalManager};
use crate::board_ui::build_page;
use crate::config::Config;
use crate::constants::text;
use crate::constants::ui::{EVENT_POLL_MS, MANUAL_REFRESH_COOLDOWN_SECONDS};
use crate::data_fetcher::api::{create_http_client_with_timeout, fetch_dashboard_with_client};
use crate::error::AppError;
use crate::ui::dashboard::{DashboardState, Tab};
use chrono::{Local, NaiveDate, Utc};
use crossterm::event::{self, Event};
use reqwest::Client;
use std::io::Stdout;
use std::time::{Duration, Instant};

/// Where the board opens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InitialView {
    pub tab: Tab,
    /// Map id to select on the maps tab
    pub map: Option<u32>,
    /// 0-based page of the selected map
    pub page: Option<usize>,
}

impl InitialView {
    /// Applies the requested map and page once data is loaded.
    pub fn apply(&self, state: &mut DashboardState) {
        if let Some(id) = self.map
            && !state.browser_mut().select_id(id)
        {
            tracing::warn!("Map {} not found in the current season", id);
        }
        if let Some(page) = self.page {
            state.browser_mut().go_to_page(page);
        }
    }
}

fn local_today() -> NaiveDate {
    Utc::now().with_timezone(&Local).date_naive()
}

async fn load(client: &Client, config: &Config, state: &mut DashboardState) {
    match fetch_dashboard_with_client(client, config, local_today()).await {
        Ok(dashboard) => {
            tracing::info!(
                "Loaded {} season(s), {} map(s)",
                dashboard.seasons.len(),
                dashboard.map_entries.len()
            );
            state.set_dashboard(dashboard);
        }
        Err(e) => {
            tracing::error!("Failed to fetch dashboard: {}", e);
            state.set_error(&e);
        }
    }
}

fn render(state: &DashboardState, out: &mut Stdout) -> Result<(), AppError> {
    build_page(state, local_today()).render_buffered(out, true, true, Some(text::CONTROLS))
}

/// Runs the board until the user quits.
pub async fn run_interactive_ui(
    config: &Config,
    initial: InitialView,
    debug_mode: bool,
) -> Result<(), AppError> {
    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
    let mut terminal = TerminalManager::with_config(TerminalConfig { debug_mode });
    let mut out = terminal.setup_terminal()?;

    let mut state = DashboardState::new(initial.tab);
    render(&state, &mut out)?;

    load(&client, config, &mut state).await;
    initial.apply(&mut state);
    let mut last_refresh = Instant::now();
    let mut needs_render = true;

    let cooldown = Duration::from_secs(MANUAL_REFRESH_COOLDOWN_SECONDS);
    let poll_interval = Duration::from_millis(EVENT_POLL_MS);

    loop {
        if needs_render {
            render(&state, &mut out)?;
            needs_render = false;
        }

        if !event::poll(poll_interval)? {
            continue;
        }

        match event::read()? {
            Event::Key(key_event) => {
                tracing::debug!("Key event: {:?}", key_event.code);
                match map_key(&key_event) {
                    Some(Action::Quit) => break,
                    Some(Action::Refresh) => {
                        if last_refresh.elapsed() < cooldown {
                            tracing::debug!("Manual refresh ignored due to cooldown");
                            continue;
                        }
                        tracing::info!("Manual refresh requested");
                        state.set_loading();
                        render(&state, &mut out)?;
                        load(&client, config, &mut state).await;
                        last_refresh = Instant::now();
                        needs_render = true;
                    }
                    Some(action) => needs_render = apply_action(&mut state, action),
                    None => {}
                }
            }
            Event::Resize(_, _) => needs_render = true,
            _ => {}
        }
    }

    terminal.cleanup_terminal()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::{Dashboard, Finish, MapEntry};

    #[test]
    fn test_initial_view_selects_map_and_page() {
        let finishes: Vec<Finish> = (0..40)
            .map(|i| Finish {
                position: i + 1,
                name: format!("P{i}"),
                time: 1_000,
                timestamp: Utc::now(),
            })
            .collect();
        let mut state = DashboardState::new(Tab::Maps);
        state.set_dashboard(Dashboard {
            seasons: vec![],
            current: None,
            map_entries: vec![MapEntry::new(1), MapEntry { id: 7, finishes }],
            poules: vec![],
            favorites: vec![],
            rejected_rows: 0,
            fetched_at: Utc::now(),
        });

        let view = InitialView {
            tab: Tab::Maps,
            map: Some(7),
            page: Some(9),
        };
        view.apply(&mut state);
        assert_eq!(state.browser().selected().unwrap().id, 7);
        // Clamped to the last page
        assert_eq!(state.browser().pager().page_index(), 2);
    }
}
