//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::reviews::ReviewStore;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// catalog and the review store.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    catalog: Catalog,
    reviews: ReviewStore,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(catalog: Catalog, reviews: ReviewStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner { catalog, reviews }),
        }
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the review store.
    #[must_use]
    pub fn reviews(&self) -> &ReviewStore {
        &self.inner.reviews
    }
}
