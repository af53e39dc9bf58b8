//! Filter state and the card visibility predicate.
//!
//! One `FilterState` is rebuilt from each request's query string and
//! evaluated as a single conjunctive predicate over every card:
//!
//! ```text
//! visible(card) = search(card) AND price(card) AND stars(card) AND brand(card)
//! ```
//!
//! The source this storefront replaces let its search box and its sidebar
//! each overwrite visibility wholesale, so one silently discarded the
//! other. Here both are facets of the same state, so they compose.
//! Category is not part of this state: category pages only ever project
//! products of their bound category into cards in the first place.

use std::collections::{HashMap, HashSet};

use crate::views::CardView;

/// Upper price bound used when no maximum is given.
const PRICE_MAX_DEFAULT: i64 = i64::MAX;

/// The shopper's active filter selections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    /// Free-text query, matched case-insensitively against card titles.
    pub query: String,
    /// Selected brand facets; empty means every brand matches.
    pub brands: HashSet<String>,
    /// Inclusive minimum price.
    pub min_price: i64,
    /// Inclusive maximum price.
    pub max_price: i64,
    /// Minimum whole-star rating, 0..=5; 0 matches everything.
    pub min_stars: u8,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            query: String::new(),
            brands: HashSet::new(),
            min_price: 0,
            max_price: PRICE_MAX_DEFAULT,
            min_stars: 0,
        }
    }
}

impl FilterState {
    /// Build the state from a request's query parameters.
    ///
    /// Recognized keys: `q`, `price_gte`, `price_lte`, `stars_gte`, and
    /// one `brand_<name>` key per checked brand checkbox. Empty or
    /// unparseable values fall back to the defaults, the way the sidebar
    /// inputs they mirror do.
    #[must_use]
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let mut fs = Self::default();

        if let Some(q) = params.get("q") {
            fs.query = q.trim().to_owned();
        }
        if let Some(min) = params.get("price_gte").and_then(|v| v.trim().parse().ok()) {
            fs.min_price = min;
        }
        if let Some(max) = params.get("price_lte").and_then(|v| v.trim().parse().ok()) {
            fs.max_price = max;
        }
        if let Some(stars) = params.get("stars_gte").and_then(|v| v.trim().parse().ok()) {
            if stars <= 5 {
                fs.min_stars = stars;
            }
        }
        for key in params.keys() {
            if let Some(brand) = key.strip_prefix("brand_") {
                fs.brands.insert(brand.to_owned());
            }
        }

        fs
    }

    /// Whether a card passes every active predicate.
    #[must_use]
    pub fn matches(&self, card: &CardView) -> bool {
        self.matches_query(card) && self.matches_facets(card)
    }

    /// Set every card's visibility from this state.
    ///
    /// Idempotent: applying the same state twice leaves the same set
    /// visible as applying it once.
    pub fn apply(&self, cards: &mut [CardView]) {
        for card in cards {
            card.visible = self.matches(card);
        }
    }

    /// Reset everything to the defaults (the clear-filters action).
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether nothing is being filtered.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self == &Self::default()
    }

    fn matches_query(&self, card: &CardView) -> bool {
        let q = self.query.trim().to_lowercase();
        q.is_empty() || card.title.to_lowercase().contains(&q)
    }

    fn matches_facets(&self, card: &CardView) -> bool {
        let price_ok = card.price >= self.min_price && card.price <= self.max_price;
        let stars_ok = card.rating.floor_stars() >= self.min_stars;
        let brand_ok = self.brands.is_empty() || self.brands.contains(&card.brand);
        price_ok && stars_ok && brand_ok
    }
}
