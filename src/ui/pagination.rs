//! Fixed-size pagination over a map's finish list.

use crate::constants::PAGE_SIZE;
use crate::data_fetcher::models::{Finish, MapEntry};

/// Page cursor over a finish list of `count` items.
///
/// The cursor does not own the list; every operation that depends on the list
/// length takes it as an argument, so the same cursor can be reused when the
/// selected map changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_index: usize,
    page_size: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl Paginator {
    /// Creates a cursor on the first page. A zero page size is bumped to 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_index: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Index of the last page, `floor((count - 1) / page_size)`, or 0 for an
    /// empty list.
    pub fn last_page(&self, count: usize) -> usize {
        if count == 0 {
            0
        } else {
            (count - 1) / self.page_size
        }
    }

    /// Number of pages shown in the page label, never less than one.
    pub fn page_count(&self, count: usize) -> usize {
        count.div_ceil(self.page_size).max(1)
    }

    pub fn first(&mut self) {
        self.page_index = 0;
    }

    pub fn prev(&mut self) {
        self.page_index = self.page_index.saturating_sub(1);
    }

    /// Moves forward one page; a no-op on the last page.
    pub fn next(&mut self, count: usize) {
        self.page_index = (self.page_index + 1).min(self.last_page(count));
    }

    pub fn last(&mut self, count: usize) {
        self.page_index = self.last_page(count);
    }

    /// Jumps to `page`, clamped to the last page.
    pub fn go_to(&mut self, page: usize, count: usize) {
        self.page_index = page.min(self.last_page(count));
    }

    /// Whether first/previous are enabled.
    pub fn can_go_back(&self) -> bool {
        self.page_index > 0
    }

    /// Whether next/last are enabled.
    pub fn can_go_forward(&self, count: usize) -> bool {
        self.page_index < self.last_page(count)
    }

    /// Slice of `items` on the current page, clipped to the list bounds.
    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.page_index * self.page_size).min(items.len());
        let end = (start + self.page_size).min(items.len());
        &items[start..end]
    }

    /// `"current / total"`, 1-based.
    pub fn page_label(&self, count: usize) -> String {
        format!("{} / {}", self.page_index + 1, self.page_count(count))
    }
}

/// Map selection plus the page cursor of the selected map's finishes.
#[derive(Debug, Clone, Default)]
pub struct MapBrowser {
    entries: Vec<MapEntry>,
    selected: Option<usize>,
    pager: Paginator,
}

impl MapBrowser {
    pub fn new(entries: Vec<MapEntry>) -> Self {
        Self {
            entries,
            selected: None,
            pager: Paginator::default(),
        }
    }

    pub fn entries(&self) -> &[MapEntry] {
        &self.entries
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected(&self) -> Option<&MapEntry> {
        self.selected.and_then(|idx| self.entries.get(idx))
    }

    pub fn pager(&self) -> &Paginator {
        &self.pager
    }

    fn finish_count(&self) -> usize {
        self.selected().map(|entry| entry.finishes.len()).unwrap_or(0)
    }

    /// Selects the entry at `idx` and goes back to the first page, even when
    /// the entry was already selected. Out-of-range indexes are ignored.
    pub fn select(&mut self, idx: usize) {
        if idx < self.entries.len() {
            self.selected = Some(idx);
            self.pager.first();
        }
    }

    /// Selects the entry with map id `id`. Returns false when there is none.
    pub fn select_id(&mut self, id: u32) -> bool {
        match self.entries.iter().position(|entry| entry.id == id) {
            Some(idx) => {
                self.select(idx);
                true
            }
            None => false,
        }
    }

    pub fn select_next(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let idx = match self.selected {
            Some(idx) => (idx + 1).min(self.entries.len() - 1),
            None => 0,
        };
        self.select(idx);
    }

    pub fn select_previous(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let idx = self.selected.map(|idx| idx.saturating_sub(1)).unwrap_or(0);
        self.select(idx);
    }

    pub fn first_page(&mut self) {
        self.pager.first();
    }

    pub fn previous_page(&mut self) {
        self.pager.prev();
    }

    pub fn next_page(&mut self) {
        let count = self.finish_count();
        self.pager.next(count);
    }

    pub fn last_page(&mut self) {
        let count = self.finish_count();
        self.pager.last(count);
    }

    pub fn go_to_page(&mut self, page: usize) {
        let count = self.finish_count();
        self.pager.go_to(page, count);
    }

    /// Finishes on the current page of the selected map.
    pub fn visible_finishes(&self) -> &[Finish] {
        match self.selected() {
            Some(entry) => self.pager.visible(&entry.finishes),
            None => &[],
        }
    }

    pub fn page_label(&self) -> String {
        self.pager.page_label(self.finish_count())
    }

    pub fn can_go_back(&self) -> bool {
        self.pager.can_go_back()
    }

    /// Next/last are disabled while nothing is selected.
    pub fn can_go_forward(&self) -> bool {
        self.selected.is_some() && self.pager.can_go_forward(self.finish_count())
    }

    /// True when a map is selected and it has no finish at all; the view
    /// shows an explanatory message instead of an empty table.
    pub fn shows_empty_state(&self) -> bool {
        self.selected().is_some_and(|entry| !entry.has_finishes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn finishes(n: usize) -> Vec<Finish> {
        (0..n)
            .map(|i| Finish {
                position: i as u32 + 1,
                name: format!("Player {}", i + 1),
                time: 40_000 + i as u64 * 10,
                timestamp: Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap(),
            })
            .collect()
    }

    fn entry(id: u32, n: usize) -> MapEntry {
        MapEntry {
            id,
            finishes: finishes(n),
        }
    }

    #[test]
    fn test_last_page_boundaries() {
        let pager = Paginator::default();
        assert_eq!(pager.page_size(), 17);
        assert_eq!(pager.last_page(0), 0);
        assert_eq!(pager.last_page(1), 0);
        assert_eq!(pager.last_page(17), 0);
        assert_eq!(pager.last_page(18), 1);
        assert_eq!(pager.last_page(34), 1);
        assert_eq!(pager.last_page(35), 2);
    }

    #[test]
    fn test_pages_concatenate_to_full_list() {
        for count in [0, 1, 16, 17, 18, 34, 35, 100] {
            let items = finishes(count);
            let mut pager = Paginator::default();
            let mut collected = Vec::new();
            for _ in 0..=pager.last_page(count) {
                collected.extend_from_slice(pager.visible(&items));
                pager.next(count);
            }
            assert_eq!(collected, items, "count {count}");
        }
    }

    #[test]
    fn test_next_is_idempotent_on_last_page() {
        let mut pager = Paginator::default();
        pager.last(40);
        assert_eq!(pager.page_index(), 2);
        for _ in 0..5 {
            pager.next(40);
            assert_eq!(pager.page_index(), 2);
        }
        assert!(!pager.can_go_forward(40));
        assert!(pager.can_go_back());
    }

    #[test]
    fn test_prev_and_first_stop_at_zero() {
        let mut pager = Paginator::default();
        pager.prev();
        assert_eq!(pager.page_index(), 0);
        assert!(!pager.can_go_back());

        pager.next(40);
        pager.next(40);
        pager.first();
        assert_eq!(pager.page_index(), 0);
    }

    #[test]
    fn test_final_partial_page_is_clipped() {
        let items = finishes(20);
        let mut pager = Paginator::default();
        pager.last(items.len());
        let page = pager.visible(&items);
        assert_eq!(page.len(), 3);
        assert_eq!(page[0].position, 18);
    }

    #[test]
    fn test_visible_never_panics_out_of_range() {
        let items = finishes(5);
        let mut pager = Paginator::default();
        // Cursor left on a later page of a longer list
        pager.go_to(3, 100);
        assert!(pager.visible(&items).is_empty());
    }

    #[test]
    fn test_page_label() {
        let mut pager = Paginator::default();
        assert_eq!(pager.page_label(0), "1 / 1");
        assert_eq!(pager.page_label(17), "1 / 1");
        pager.next(18);
        assert_eq!(pager.page_label(18), "2 / 2");
    }

    #[test]
    fn test_select_resets_page() {
        let mut browser = MapBrowser::new(vec![entry(1, 50), entry(2, 50)]);
        browser.select(0);
        browser.next_page();
        browser.next_page();
        assert_eq!(browser.pager().page_index(), 2);

        browser.select(1);
        assert_eq!(browser.pager().page_index(), 0);

        browser.last_page();
        assert_eq!(browser.pager().page_index(), 2);
        // Re-selecting the same map also resets
        browser.select(1);
        assert_eq!(browser.pager().page_index(), 0);

        browser.next_page();
        browser.select_previous();
        assert_eq!(browser.selected().unwrap().id, 1);
        assert_eq!(browser.pager().page_index(), 0);
    }

    #[test]
    fn test_selection_navigation() {
        let mut browser = MapBrowser::new(vec![entry(5, 1), entry(6, 1), entry(7, 1)]);
        assert!(browser.selected().is_none());
        assert!(!browser.can_go_forward());
        assert!(browser.visible_finishes().is_empty());

        browser.select_next();
        assert_eq!(browser.selected().unwrap().id, 5);
        browser.select_next();
        browser.select_next();
        browser.select_next();
        assert_eq!(browser.selected().unwrap().id, 7);

        assert!(browser.select_id(6));
        assert_eq!(browser.selected_index(), Some(1));
        assert!(!browser.select_id(99));
        assert_eq!(browser.selected_index(), Some(1));

        browser.select(42);
        assert_eq!(browser.selected_index(), Some(1));
    }

    #[test]
    fn test_empty_state_for_zero_finishes() {
        let mut browser = MapBrowser::new(vec![entry(199, 0), entry(200, 3)]);
        assert!(!browser.shows_empty_state());
        browser.select(0);
        assert!(browser.shows_empty_state());
        assert!(!browser.can_go_forward());
        assert_eq!(browser.page_label(), "1 / 1");
        browser.select(1);
        assert!(!browser.shows_empty_state());
        assert_eq!(browser.visible_finishes().len(), 3);
    }
}
