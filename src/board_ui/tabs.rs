//! Page builders, one per tab plus the loading and error screens.

use super::page::{BoardPage, Line, Style, TabLabel, pad_or_truncate};
use crate::constants::text;
use crate::constants::ui::MAPS_PER_SELECTOR_LINE;
use crate::data_fetcher::models::{Dashboard, Edition, MapView};
use crate::data_fetcher::processors::{
    days_remaining, edition_progress, format_date, format_day, format_duration, validated_summary,
};
use crate::ui::dashboard::{DashboardState, LoadState, Tab};
use crate::ui::pagination::MapBrowser;
use chrono::{Local, NaiveDate};

const PROGRESS_BAR_WIDTH: usize = 30;

fn base_page(active: Tab) -> BoardPage {
    let mut page = BoardPage::new(text::TITLE, active.title());
    page.tabs = Tab::ALL
        .iter()
        .enumerate()
        .map(|(idx, tab)| TabLabel {
            label: format!("{} {}", idx + 1, tab.title()),
            active: *tab == active,
        })
        .collect();
    page
}

fn updated_footer(dashboard: &Dashboard) -> String {
    let local = dashboard.fetched_at.with_timezone(&Local);
    let mut footer = format!(
        "Mis à jour le {} à {}",
        format_date(&dashboard.fetched_at),
        local.format("%H:%M")
    );
    if dashboard.rejected_rows > 0 {
        footer.push_str(&format!(" ({} ligne(s) ignorée(s))", dashboard.rejected_rows));
    }
    footer
}

fn season_status(edition: &Edition, today: NaiveDate) -> &'static str {
    if edition.contains(today) {
        text::IN_PROGRESS
    } else if today < edition.start_at {
        text::UPCOMING
    } else {
        text::ENDED
    }
}

fn progress_bar(percent: u8) -> String {
    let filled = PROGRESS_BAR_WIDTH * percent as usize / 100;
    format!(
        "{}{}",
        "█".repeat(filled),
        "░".repeat(PROGRESS_BAR_WIDTH - filled)
    )
}

/// Home card: current season with its progress, then the other seasons.
pub fn home_page(dashboard: &Dashboard, today: NaiveDate) -> BoardPage {
    let mut page = base_page(Tab::Home);

    match dashboard.current_season() {
        Some(edition) => {
            page.add_line(
                Line::styled(edition.name.clone(), Style::Highlight)
                    .push(format!("  [{}]", edition.game), Style::Accent),
            );
            page.add_line(Line::styled(season_status(edition, today), Style::Selected));
            page.add_line(Line::blank());

            let remaining = days_remaining(edition.end_at, today).max(0);
            page.add_line(Line::text(format!("Jours restants : {remaining}")));

            let percent = edition_progress(edition, today);
            page.add_line(
                Line::styled(progress_bar(percent), Style::Accent)
                    .push(format!(" {percent} %"), Style::Text),
            );
            page.add_line(Line::styled(
                format!(
                    "Du {} au {}",
                    format_day(edition.start_at),
                    format_day(edition.end_at)
                ),
                Style::Muted,
            ));

            let (validated, announced) = validated_summary(edition);
            page.add_line(Line::text(format!(
                "Maps terminées : {validated} / {announced}"
            )));
        }
        None => page.add_line(Line::styled(text::NO_SEASON, Style::Muted)),
    }

    let others: Vec<(usize, &Edition)> = dashboard
        .seasons
        .iter()
        .enumerate()
        .filter(|(idx, _)| Some(*idx) != dashboard.current)
        .collect();
    if !others.is_empty() {
        page.add_line(Line::blank());
        page.add_line(Line::styled("Saisons", Style::Accent));
        for (_, edition) in others {
            page.add_line(
                Line::text(pad_or_truncate(&edition.name, 24)).push(
                    format!(
                        "{} - {}",
                        format_day(edition.start_at),
                        format_day(edition.end_at)
                    ),
                    Style::Muted,
                ),
            );
        }
    }

    page.footer = Some(updated_footer(dashboard));
    page
}

fn map_view<'a>(dashboard: &'a Dashboard, id: u32) -> Option<&'a MapView> {
    dashboard
        .current_season()
        .and_then(|edition| edition.maps.iter().find(|map| map.id == id))
}

fn add_map_selector(page: &mut BoardPage, browser: &MapBrowser) {
    let entries = browser.entries();
    for (chunk_idx, chunk) in entries.chunks(MAPS_PER_SELECTOR_LINE).enumerate() {
        let mut line = Line::blank();
        for (offset, entry) in chunk.iter().enumerate() {
            let idx = chunk_idx * MAPS_PER_SELECTOR_LINE + offset;
            let label = format!("#{} ({})", entry.id, entry.finishes.len());
            if browser.selected_index() == Some(idx) {
                line = line.push(format!("[{label}]"), Style::Selected);
            } else {
                line = line.push(format!(" {label} "), Style::Text);
            }
        }
        page.add_line(line);
    }
}

fn nav_style(enabled: bool) -> Style {
    if enabled { Style::Accent } else { Style::Muted }
}

/// `Début  Précédent  i / n  Suivant  Fin`, disabled controls muted.
pub fn pagination_line(browser: &MapBrowser) -> Line {
    let back = browser.can_go_back();
    let forward = browser.can_go_forward();
    Line::styled(format!("« {}", text::FIRST), nav_style(back))
        .push("  ", Style::Text)
        .push(format!("‹ {}", text::PREVIOUS), nav_style(back))
        .push(format!("  {}  ", browser.page_label()), Style::Text)
        .push(format!("{} ›", text::NEXT), nav_style(forward))
        .push("  ", Style::Text)
        .push(format!("{} »", text::LAST), nav_style(forward))
}

/// Maps tab: refresh notice, selector, then the selected map's leaderboard.
pub fn maps_page(dashboard: &Dashboard, browser: &MapBrowser) -> BoardPage {
    let mut page = base_page(Tab::Maps);
    page.add_wrapped(text::MAPS_REFRESH_NOTICE, Style::Muted);
    page.add_line(Line::blank());
    add_map_selector(&mut page, browser);
    page.add_line(Line::blank());

    let Some(entry) = browser.selected() else {
        page.add_line(Line::styled(text::NO_MAP_SELECTED, Style::Muted));
        page.footer = Some(updated_footer(dashboard));
        return page;
    };

    let heading = match map_view(dashboard, entry.id) {
        Some(map) => format!("# {} {} par {}", map.id, map.name, map.author),
        None => format!("# {}", entry.id),
    };
    page.add_line(Line::styled(heading, Style::Highlight));

    if browser.shows_empty_state() {
        page.add_line(Line::styled(text::NO_FINISHES, Style::Muted));
    } else {
        page.add_line(pagination_line(browser));
        page.add_line(Line::blank());
        for finish in browser.visible_finishes() {
            page.add_line(
                Line::styled(format!("{:>3}. ", finish.position), Style::Accent)
                    .push(pad_or_truncate(&finish.name, 22), Style::Text)
                    .push(format!("{:>10}", format_duration(finish.time)), Style::Highlight)
                    .push(format!("  {}", format_date(&finish.timestamp)), Style::Muted),
            );
        }
    }

    page.footer = Some(updated_footer(dashboard));
    page
}

pub fn poules_page(dashboard: &Dashboard) -> BoardPage {
    let mut page = base_page(Tab::Poules);
    if dashboard.poules.is_empty() {
        page.add_line(Line::styled(text::NO_POULES, Style::Muted));
    }
    for poule in &dashboard.poules {
        page.add_line(Line::styled(poule.name.clone(), Style::Accent));
        for member in &poule.members {
            page.add_line(Line::text(format!("  {member}")));
        }
        page.add_line(Line::blank());
    }
    page.footer = Some(updated_footer(dashboard));
    page
}

pub fn favorites_page(dashboard: &Dashboard) -> BoardPage {
    let mut page = base_page(Tab::Favorites);
    if dashboard.favorites.is_empty() {
        page.add_line(Line::styled(text::NO_FAVORITES, Style::Muted));
    }
    for favorite in &dashboard.favorites {
        page.add_line(
            Line::text(pad_or_truncate(&favorite.label, 40))
                .push(format!("{:>5}", favorite.votes), Style::Accent),
        );
    }
    page.footer = Some(updated_footer(dashboard));
    page
}

pub fn loading_page(active: Tab) -> BoardPage {
    let mut page = base_page(active);
    page.add_line(Line::styled(text::LOADING, Style::Muted));
    page
}

pub fn error_page(active: Tab, message: &str) -> BoardPage {
    let mut page = base_page(active);
    page.add_line(Line::styled(text::ERROR_TITLE, Style::Error));
    page.add_line(Line::text(message));
    page.add_line(Line::blank());
    page.add_line(Line::styled(text::RETRY_HINT, Style::Muted));
    page
}

/// Page for the state's active tab as of `today`.
pub fn build_page(state: &DashboardState, today: NaiveDate) -> BoardPage {
    match state.load_state() {
        LoadState::Loading => loading_page(state.tab),
        LoadState::Failed(message) => error_page(state.tab, message),
        LoadState::Ready(dashboard) => match state.tab {
            Tab::Home => home_page(dashboard, today),
            Tab::Maps => maps_page(dashboard, state.browser()),
            Tab::Poules => poules_page(dashboard),
            Tab::Favorites => favorites_page(dashboard),
        },
    }
}
