use crate::api::Flashcard;

pub const NO_RESULTS: &str = "No results.";
pub const LOAD_FAILED: &str = "Failed to load flashcards.";
pub const SERVER_ERROR: &str = "Server error: is the API running?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    French,
    English,
}

/// A fetched card plus which side is facing up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    record: Flashcard,
    side: Side,
}

impl CardView {
    pub fn new(record: Flashcard) -> Self {
        Self { record, side: Side::French }
    }

    pub fn category(&self) -> &str {
        &self.record.category
    }

    pub fn french(&self) -> &str {
        &self.record.fr
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn text(&self) -> &str {
        match self.side {
            Side::French => &self.record.fr,
            Side::English => &self.record.en,
        }
    }

    pub fn flip(&mut self) {
        self.side = match self.side {
            Side::French => Side::English,
            Side::English => Side::French,
        };
    }
}

/// What the card area currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardsView {
    Loading,
    Cards(Vec<CardView>),
    Empty,
    /// The backend answered with `success: false`.
    LoadFailed,
    /// Transport or parse failure; carries the detail for logs and tooltips.
    ServerError(String),
}

impl CardsView {
    pub fn from_items(items: Vec<Flashcard>) -> Self {
        if items.is_empty() {
            return CardsView::Empty;
        }
        CardsView::Cards(items.into_iter().map(CardView::new).collect())
    }

    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            CardsView::Loading | CardsView::Cards(_) => None,
            CardsView::Empty => Some(NO_RESULTS),
            CardsView::LoadFailed => Some(LOAD_FAILED),
            CardsView::ServerError(_) => Some(SERVER_ERROR),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, CardsView::LoadFailed | CardsView::ServerError(_))
    }

    /// Flips one card. Out-of-range indexes are ignored; the page may have been replaced
    /// between the click and now.
    pub fn flip(&mut self, index: usize) {
        if let CardsView::Cards(cards) = self {
            if let Some(card) = cards.get_mut(index) {
                card.flip();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Flashcard {
        Flashcard::new("Salutations", "Bonjour", "Hello")
    }

    #[test]
    fn cards_start_on_french() {
        let card = CardView::new(sample());
        assert_eq!(card.side(), Side::French);
        assert_eq!(card.text(), "Bonjour");
        assert_eq!(card.category(), "Salutations");
    }

    #[test]
    fn flipping_twice_returns_to_french() {
        let records = [
            sample(),
            Flashcard::new("", "", ""),
            Flashcard::new("Nombres", "Deux", "Deux"),
            Flashcard::new("Voyage", "Où est la gare ?", "Where is the station?"),
        ];
        for record in records {
            let mut card = CardView::new(record.clone());
            card.flip();
            assert_eq!(card.text(), record.en);
            card.flip();
            assert_eq!(card.side(), Side::French);
            assert_eq!(card.text(), record.fr);
        }
    }

    #[test]
    fn empty_page_and_failures_have_distinct_placeholders() {
        let empty = CardsView::from_items(Vec::new());
        assert_eq!(empty, CardsView::Empty);
        assert_eq!(empty.placeholder(), Some(NO_RESULTS));
        assert!(!empty.is_error());

        assert_eq!(CardsView::LoadFailed.placeholder(), Some(LOAD_FAILED));
        assert_eq!(CardsView::ServerError("refused".into()).placeholder(), Some(SERVER_ERROR));
        assert_ne!(NO_RESULTS, LOAD_FAILED);
        assert_ne!(LOAD_FAILED, SERVER_ERROR);
    }

    #[test]
    fn flip_by_index_only_touches_that_card() {
        let mut view =
            CardsView::from_items(vec![sample(), Flashcard::new("Couleurs", "Rouge", "Red")]);
        view.flip(1);
        view.flip(7);

        let CardsView::Cards(cards) = &view else { panic!("expected cards") };
        assert_eq!(cards[0].text(), "Bonjour");
        assert_eq!(cards[1].text(), "Red");
    }
}
