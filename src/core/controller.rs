use tracing::{
    debug,
    error,
    warn,
};

use super::{
    cards::CardsView,
    pagination::{
        PageRequest,
        PaginationState,
    },
};
use crate::api::PageResponse;

/// Owns the pagination state and what the card area shows.
///
/// Every method that can lead to a fetch returns the [`PageRequest`] to dispatch (or `None`
/// when the transition is not allowed); the caller performs the network call and hands the
/// outcome back through [`Controller::apply_page_result`]. Overlapping loads are not
/// sequenced: whichever result arrives last is what gets shown.
#[derive(Debug, Clone)]
pub struct Controller {
    pagination: PaginationState,
    cards: CardsView,
    in_flight: usize,
}

impl Controller {
    pub fn new(page_size: u32) -> Self {
        Self {
            pagination: PaginationState::new(page_size),
            cards: CardsView::Loading,
            in_flight: 0,
        }
    }

    pub fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    pub fn cards(&self) -> &CardsView {
        &self.cards
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn page_label(&self) -> String {
        format!(
            "Page {} / {} · {} items",
            self.pagination.current_page(),
            self.pagination.total_pages(),
            self.pagination.total_items()
        )
    }

    pub fn start(&mut self) -> PageRequest {
        let request = self.pagination.initial_request();
        self.issue(request)
    }

    pub fn go_to_page(&mut self, page: u32) -> Option<PageRequest> {
        let request = self.pagination.go_to_page(page)?;
        Some(self.issue(request))
    }

    pub fn next(&mut self) -> Option<PageRequest> {
        let request = self.pagination.next()?;
        Some(self.issue(request))
    }

    pub fn previous(&mut self) -> Option<PageRequest> {
        let request = self.pagination.previous()?;
        Some(self.issue(request))
    }

    pub fn search(&mut self, raw_query: &str) -> PageRequest {
        let request = self.pagination.search(raw_query);
        self.issue(request)
    }

    pub fn flip(&mut self, index: usize) {
        self.cards.flip(index);
    }

    /// Applies the outcome of a page load.
    ///
    /// Only a `success: true` response moves the pagination state. If the requested page
    /// turned out to be past the end, the state is clamped and the request for the clamped
    /// page is returned so the caller can fetch matching content.
    pub fn apply_page_result<E: std::fmt::Display>(
        &mut self,
        request: &PageRequest,
        result: Result<PageResponse, E>,
    ) -> Option<PageRequest> {
        self.in_flight = self.in_flight.saturating_sub(1);

        match result {
            Ok(response) if response.success => {
                let clamped = self.pagination.commit(request, response.total);
                debug!(
                    "[Controller] Loaded page {} ({} items, {} total)",
                    request.page,
                    response.items.len(),
                    response.total
                );
                self.cards = CardsView::from_items(response.items);

                if clamped {
                    warn!(
                        "[Controller] Page {} no longer exists, moving to page {}",
                        request.page,
                        self.pagination.current_page()
                    );
                    return Some(self.issue(self.pagination.current_request()));
                }
                None
            }
            Ok(_) => {
                warn!("[Controller] Backend reported failure for page {}", request.page);
                self.cards = CardsView::LoadFailed;
                None
            }
            Err(e) => {
                error!("[Controller] Load error for page {}: {}", request.page, e);
                self.cards = CardsView::ServerError(e.to_string());
                None
            }
        }
    }

    fn issue(&mut self, request: PageRequest) -> PageRequest {
        self.in_flight += 1;
        request
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(super::pagination::DEFAULT_PAGE_SIZE)
    }
}
