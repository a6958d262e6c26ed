use std::{
    collections::HashSet,
    fmt,
};

use rand::{
    seq::IndexedRandom,
    Rng,
};
use tracing::warn;

use crate::api::{
    Flashcard,
    PageResponse,
};

pub const MAX_HEADLINES: usize = 10;
pub const HEADLINE_SEPARATOR: &str = "  |  ";
pub const WELCOME_MESSAGE: &str = "Bienvenue — pratiquez votre français chaque jour !";

/// Non-empty French phrases in first-seen order, duplicates dropped.
pub fn unique_phrases(items: &[Flashcard]) -> Vec<&str> {
    let mut seen = HashSet::new();
    items
        .iter()
        .map(|item| item.fr.as_str())
        .filter(|fr| !fr.is_empty())
        .filter(|fr| seen.insert(*fr))
        .collect()
}

/// Up to [`MAX_HEADLINES`] distinct phrases, drawn uniformly without replacement.
pub fn sample_headlines<'a, R>(items: &'a [Flashcard], rng: &mut R) -> Vec<&'a str>
where
    R: Rng + ?Sized,
{
    unique_phrases(items).choose_multiple(rng, MAX_HEADLINES).copied().collect()
}

/// Why the ticker is showing the welcome message instead of headlines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickerFallback {
    Unreachable(String),
    Rejected,
    NoPhrases,
}

impl fmt::Display for TickerFallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TickerFallback::Unreachable(e) => write!(f, "news batch failed: {e}"),
            TickerFallback::Rejected => write!(f, "news batch reported failure"),
            TickerFallback::NoPhrases => write!(f, "news batch had no phrases"),
        }
    }
}

pub fn headlines_from<R, E>(
    batch: Result<PageResponse, E>,
    rng: &mut R,
) -> Result<String, TickerFallback>
where
    R: Rng + ?Sized,
    E: fmt::Display,
{
    let page = batch.map_err(|e| TickerFallback::Unreachable(e.to_string()))?;
    if !page.success {
        return Err(TickerFallback::Rejected);
    }

    let headlines = sample_headlines(&page.items, rng);
    if headlines.is_empty() {
        return Err(TickerFallback::NoPhrases);
    }
    Ok(headlines.join(HEADLINE_SEPARATOR))
}

/// The ticker text for a batch. Every fallback to the welcome message is logged at warn.
pub fn compose_headline<R, E>(batch: Result<PageResponse, E>, rng: &mut R) -> String
where
    R: Rng + ?Sized,
    E: fmt::Display,
{
    headlines_from(batch, rng).unwrap_or_else(|reason| {
        warn!("[Ticker] {}, showing welcome message", reason);
        WELCOME_MESSAGE.to_string()
    })
}
