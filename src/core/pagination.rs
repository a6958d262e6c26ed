pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// A page load that has been asked for but not yet committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
    pub query: String,
}

impl PageRequest {
    /// The `q` parameter, omitted when the query is blank.
    pub fn query(&self) -> Option<&str> {
        if self.query.is_empty() {
            None
        } else {
            Some(&self.query)
        }
    }
}

/// `max(1, ceil(total_items / page_size))`
pub fn total_pages(total_items: u64, page_size: u32) -> u32 {
    let pages = total_items.div_ceil(u64::from(page_size.max(1))).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Which page is shown and for which query.
///
/// Transitions are pure: they return the [`PageRequest`] to issue and leave the state alone.
/// The state only moves in [`PaginationState::commit`], once a load has succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
    current_page: u32,
    page_size: u32,
    total_items: u64,
    current_query: String,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PaginationState {
    pub fn new(page_size: u32) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
            total_items: 0,
            current_query: String::new(),
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    pub fn current_query(&self) -> &str {
        &self.current_query
    }

    pub fn total_pages(&self) -> u32 {
        total_pages(self.total_items, self.page_size)
    }

    pub fn can_go_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Page 1, no query. Issued once at start-up.
    pub fn initial_request(&self) -> PageRequest {
        self.request(1, String::new())
    }

    /// Re-request the page currently shown.
    pub fn current_request(&self) -> PageRequest {
        self.request(self.current_page, self.current_query.clone())
    }

    pub fn go_to_page(&self, page: u32) -> Option<PageRequest> {
        if page < 1 || page > self.total_pages() {
            return None;
        }
        Some(self.request(page, self.current_query.clone()))
    }

    pub fn next(&self) -> Option<PageRequest> {
        if !self.can_go_next() {
            return None;
        }
        self.go_to_page(self.current_page + 1)
    }

    pub fn previous(&self) -> Option<PageRequest> {
        if !self.can_go_previous() {
            return None;
        }
        self.go_to_page(self.current_page - 1)
    }

    /// Always restarts at page 1. Surrounding whitespace is not part of the query.
    pub fn search(&self, raw_query: &str) -> PageRequest {
        self.request(1, raw_query.trim().to_string())
    }

    /// Applies a successful load. Returns `true` when the requested page no longer exists
    /// and the current page had to be clamped to the last one.
    pub fn commit(&mut self, request: &PageRequest, total_items: u64) -> bool {
        self.total_items = total_items;
        self.current_query = request.query.clone();

        let last_page = self.total_pages();
        self.current_page = request.page.clamp(1, last_page);
        self.current_page != request.page
    }

    fn request(&self, page: u32, query: String) -> PageRequest {
        PageRequest { page, page_size: self.page_size, query }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(total_items: u64, page: u32) -> PaginationState {
        let mut state = PaginationState::default();
        let request = state.initial_request();
        state.commit(&request, total_items);
        if page > 1 {
            let request = state.go_to_page(page).expect("page within range");
            state.commit(&request, total_items);
        }
        state
    }

    #[test]
    fn total_pages_is_at_least_one() {
        assert_eq!(total_pages(0, 12), 1);
        assert_eq!(total_pages(1, 12), 1);
        assert_eq!(total_pages(12, 12), 1);
        assert_eq!(total_pages(13, 12), 2);
        assert_eq!(total_pages(300, 12), 25);
        assert_eq!(total_pages(5, 0), 5);
    }

    #[test]
    fn total_pages_matches_ceiling_after_every_load() {
        for total_items in 0..200u64 {
            let state = loaded(total_items, 1);
            let expected = std::cmp::max(1, (total_items + 11) / 12) as u32;
            assert_eq!(state.total_pages(), expected, "total_items = {total_items}");
        }
    }

    #[test]
    fn go_to_page_lands_on_every_valid_page() {
        let base = loaded(100, 1);
        for page in 1..=base.total_pages() {
            let mut state = base.clone();
            let request = state.go_to_page(page).expect("valid page");
            state.commit(&request, 100);
            assert_eq!(state.current_page(), page);
        }
    }

    #[test]
    fn go_to_page_rejects_out_of_range() {
        let state = loaded(30, 1);
        assert_eq!(state.total_pages(), 3);
        assert!(state.go_to_page(0).is_none());
        assert!(state.go_to_page(4).is_none());
    }

    #[test]
    fn next_at_last_page_issues_nothing() {
        let state = loaded(30, 3);
        let before = state.clone();
        assert!(!state.can_go_next());
        assert!(state.next().is_none());
        assert_eq!(state, before);
    }

    #[test]
    fn previous_at_first_page_issues_nothing() {
        let state = loaded(30, 1);
        assert!(!state.can_go_previous());
        assert!(state.previous().is_none());
    }

    #[test]
    fn navigation_keeps_the_active_query() {
        let mut state = PaginationState::default();
        let request = state.search("chat");
        state.commit(&request, 40);

        let next = state.next().expect("second page exists");
        assert_eq!(next.page, 2);
        assert_eq!(next.query(), Some("chat"));
    }

    #[test]
    fn search_trims_and_resets_to_first_page() {
        let state = loaded(100, 4);
        let request = state.search("  bonjour  ");
        assert_eq!(request.page, 1);
        assert_eq!(request.query(), Some("bonjour"));
        assert_eq!(request.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn blank_search_has_no_query_parameter() {
        let state = PaginationState::default();
        assert_eq!(state.search("   ").query(), None);
    }

    #[test]
    fn page_size_is_at_least_one() {
        let state = PaginationState::new(0);
        assert_eq!(state.page_size(), 1);
        assert_eq!(state.initial_request().page_size, 1);
        assert_eq!(PaginationState::new(30).page_size(), 30);
    }

    #[test]
    fn commit_clamps_when_results_shrink() {
        let mut state = loaded(100, 1);
        let request = state.go_to_page(9).expect("page 9 of 9");
        let clamped = state.commit(&request, 24);
        assert!(clamped);
        assert_eq!(state.current_page(), 2);
        assert!(state.current_page() <= state.total_pages());
    }
}
