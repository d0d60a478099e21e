//! Approximate text matching for the fallback search stage.
//!
//! When strict filtering finds nothing for a search term, the catalog falls
//! back to scoring every listing's brand, model and variant against the
//! term with a typo-tolerant distance. The distance lies in `[0, 1]`
//! (`0` is a perfect match) and is the lowest of:
//!
//! - the whole field against the whole term,
//! - per term word, the closest field word, averaged over the term's words
//!   (so word order does not matter),
//!
//! where a field word also counts through its prefix of the same length as
//! the term word, so a half-typed word is not penalized for what is missing.
//!
//! A listing is kept when its best distance over the configured fields is
//! at or below [`SearchConfig::threshold`]. Raising the threshold can only
//! admit more listings.

use strsim::normalized_damerau_levenshtein;

use crate::listing::Listing;
use crate::search::{SearchConfig, SearchTerm};

/// Scores listings against a search term using a [`SearchConfig`].
#[derive(Debug, Clone, Copy)]
pub struct FuzzyMatcher<'c> {
    config: &'c SearchConfig,
}

impl<'c> FuzzyMatcher<'c> {
    pub fn new(config: &'c SearchConfig) -> Self {
        FuzzyMatcher { config }
    }

    /// Returns the best distance between `term` and the listing's fuzzy
    /// fields, or `None` if it is above the threshold or the term is empty.
    pub fn score(&self, listing: &Listing, term: &SearchTerm) -> Option<f64> {
        if term.is_empty() {
            return None;
        }
        let best = self
            .config
            .fuzzy_fields
            .iter()
            .map(|field| field_distance(term.as_str(), &listing.text(*field)))
            .fold(f64::INFINITY, f64::min);

        (best <= self.config.threshold).then_some(best)
    }

    /// Returns the listings within the threshold, closest first.
    ///
    /// Listings with equal scores keep their input order.
    pub fn search<'a>(&self, listings: &'a [Listing], term: &SearchTerm) -> Vec<&'a Listing> {
        let mut scored: Vec<(f64, &'a Listing)> = listings
            .iter()
            .filter_map(|listing| self.score(listing, term).map(|score| (score, listing)))
            .collect();

        scored.sort_by(|(a, _), (b, _)| a.total_cmp(b));
        scored.into_iter().map(|(_, listing)| listing).collect()
    }
}

/// The fallback search stage.
///
/// Runs approximate matching of `term` over the configured fields of every
/// listing and returns the matches in relevance order. An empty term
/// matches nothing.
pub fn fallback_search<'a>(
    listings: &'a [Listing],
    term: &SearchTerm,
    config: &SearchConfig,
) -> Vec<&'a Listing> {
    FuzzyMatcher::new(config).search(listings, term)
}

/// Distance between a lowercased term and one field value.
fn field_distance(term: &str, field: &str) -> f64 {
    let field = field.to_lowercase();
    if field.is_empty() {
        return 1.0;
    }

    let whole = distance(term, &field);

    let field_words: Vec<&str> = words(&field).collect();
    let term_words: Vec<&str> = words(term).collect();
    if field_words.is_empty() || term_words.is_empty() {
        return whole;
    }

    let by_word = term_words
        .iter()
        .map(|term_word| {
            field_words
                .iter()
                .map(|field_word| word_distance(term_word, field_word))
                .fold(f64::INFINITY, f64::min)
        })
        .sum::<f64>()
        / term_words.len() as f64;

    whole.min(by_word)
}

/// Distance between two words, also trying the field word's prefix.
fn word_distance(term_word: &str, field_word: &str) -> f64 {
    let full = distance(term_word, field_word);
    let term_len = term_word.chars().count();
    if field_word.chars().count() <= term_len {
        return full;
    }
    let prefix: String = field_word.chars().take(term_len).collect();
    full.min(distance(term_word, &prefix))
}

fn distance(a: &str, b: &str) -> f64 {
    1.0 - normalized_damerau_levenshtein(a, b)
}

fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
}
