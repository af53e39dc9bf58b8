//! Per-product review storage.
//!
//! Each product owns an append-only, newest-first list of reviews,
//! serialized as one JSON array under the key `reviews_<productId>`.
//! Unreadable or malformed stored data is treated as an empty list and
//! never surfaced to the shopper; a failed write is logged and lost
//! (no retry, no user notice).

mod store;

pub use store::{DirStore, KvStore, MemoryStore, StoreError};

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shopverse_core::{Email, EmailError, ProductId, Stars, StarsError};

/// A submitted review. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub name: String,
    pub email: Email,
    pub comment: String,
    pub stars: Stars,
    /// Creation time, persisted as Unix milliseconds.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub at: DateTime<Utc>,
}

/// Why a review submission was rejected. No mutation happens on any of
/// these; the message is shown to the shopper verbatim.
#[derive(Debug, thiserror::Error)]
pub enum ReviewError {
    #[error("please enter your name")]
    EmptyName,
    #[error("please enter a valid email ({0})")]
    InvalidEmail(#[from] EmailError),
    #[error("please enter a comment")]
    EmptyComment,
    #[error("invalid star rating: {0}")]
    InvalidStars(#[from] StarsError),
}

/// Review persistence keyed by product id.
///
/// Cheaply cloneable; the backend is shared behind an `Arc` so handlers
/// and tests can inject [`MemoryStore`] or [`DirStore`] alike.
#[derive(Clone)]
pub struct ReviewStore {
    kv: Arc<dyn KvStore>,
}

impl ReviewStore {
    /// Create a store over the given backend.
    #[must_use]
    pub fn new(kv: Arc<dyn KvStore>) -> Self {
        Self { kv }
    }

    /// Storage key for a product's review list.
    fn key(product_id: &ProductId) -> String {
        format!("reviews_{product_id}")
    }

    /// All reviews for a product, newest first.
    ///
    /// A missing key, an unreadable backend, or malformed JSON all yield
    /// an empty list; storage problems are logged, never returned.
    #[must_use]
    pub fn list(&self, product_id: &ProductId) -> Vec<Review> {
        let key = Self::key(product_id);
        let raw = match self.kv.get(&key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(key, error = %e, "review storage unreadable, treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(reviews) => reviews,
            Err(e) => {
                tracing::warn!(key, error = %e, "stored reviews malformed, treating as empty");
                Vec::new()
            }
        }
    }

    /// Number of stored reviews for a product.
    #[must_use]
    pub fn count(&self, product_id: &ProductId) -> usize {
        self.list(product_id).len()
    }

    /// Validate and store a new review, prepending it to the product's
    /// list and persisting the whole list back.
    ///
    /// A storage write failure is logged and the write silently lost;
    /// the accepted review is still returned.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError`] when the name or comment is empty
    /// (after trimming), the email is malformed, or the star count is
    /// outside 1..=5. Nothing is stored in that case.
    pub fn add(
        &self,
        product_id: &ProductId,
        name: &str,
        email: &str,
        comment: &str,
        stars: u8,
    ) -> Result<Review, ReviewError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ReviewError::EmptyName);
        }
        let email = Email::parse(email.trim())?;
        let comment = comment.trim();
        if comment.is_empty() {
            return Err(ReviewError::EmptyComment);
        }
        let stars = Stars::new(stars)?;

        let review = Review {
            name: name.to_owned(),
            email,
            comment: comment.to_owned(),
            stars,
            at: Utc::now(),
        };

        let mut reviews = self.list(product_id);
        reviews.insert(0, review.clone());

        let key = Self::key(product_id);
        match serde_json::to_string(&reviews) {
            Ok(raw) => {
                if let Err(e) = self.kv.set(&key, &raw) {
                    tracing::warn!(key, error = %e, "review write failed, entry lost");
                }
            }
            Err(e) => {
                tracing::warn!(key, error = %e, "review serialization failed, entry lost");
            }
        }

        Ok(review)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn memory_store() -> (ReviewStore, Arc<MemoryStore>) {
        let kv = Arc::new(MemoryStore::new());
        (ReviewStore::new(kv.clone()), kv)
    }

    #[test]
    fn list_is_empty_for_unknown_product() {
        let (store, _) = memory_store();
        assert!(store.list(&ProductId::new("p1")).is_empty());
        assert_eq!(store.count(&ProductId::new("p1")), 0);
    }

    #[test]
    fn add_then_list_round_trips() {
        let (store, _) = memory_store();
        let p1 = ProductId::new("p1");

        store.add(&p1, "Ann", "a@b.com", "Great", 4).unwrap();
        let reviews = store.list(&p1);
        assert_eq!(reviews.len(), 1);
        let first = reviews.first().unwrap();
        assert_eq!(first.name, "Ann");
        assert_eq!(first.comment, "Great");
        assert_eq!(first.stars.as_u8(), 4);
    }

    #[test]
    fn newer_reviews_come_first() {
        let (store, _) = memory_store();
        let p1 = ProductId::new("p1");

        store.add(&p1, "First", "f@x.com", "older", 3).unwrap();
        store.add(&p1, "Second", "s@x.com", "newer", 5).unwrap();

        let reviews = store.list(&p1);
        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews.first().unwrap().name, "Second");
        assert_eq!(reviews.get(1).unwrap().name, "First");
    }

    #[test]
    fn reviews_are_scoped_per_product() {
        let (store, _) = memory_store();
        store
            .add(&ProductId::new("p1"), "Ann", "a@b.com", "one", 4)
            .unwrap();

        assert!(store.list(&ProductId::new("p2")).is_empty());
        assert_eq!(store.count(&ProductId::new("p1")), 1);
    }

    #[test]
    fn rejections_leave_store_unchanged() {
        let (store, _) = memory_store();
        let p1 = ProductId::new("p1");

        assert!(matches!(
            store.add(&p1, "", "a@b.com", "ok", 4),
            Err(ReviewError::EmptyName)
        ));
        assert!(matches!(
            store.add(&p1, "Ann", "bad-email", "ok", 4),
            Err(ReviewError::InvalidEmail(_))
        ));
        assert!(matches!(
            store.add(&p1, "Ann", "a@b.com", "   ", 4),
            Err(ReviewError::EmptyComment)
        ));
        assert!(matches!(
            store.add(&p1, "Ann", "a@b.com", "ok", 0),
            Err(ReviewError::InvalidStars(_))
        ));
        assert!(matches!(
            store.add(&p1, "Ann", "a@b.com", "ok", 6),
            Err(ReviewError::InvalidStars(_))
        ));

        assert_eq!(store.count(&p1), 0);
    }

    #[test]
    fn malformed_stored_json_reads_as_empty() {
        let (store, kv) = memory_store();
        let p1 = ProductId::new("p1");
        kv.set("reviews_p1", "{not json").unwrap();

        assert!(store.list(&p1).is_empty());

        // The next successful add replaces the corrupt value.
        store.add(&p1, "Ann", "a@b.com", "fresh", 5).unwrap();
        assert_eq!(store.count(&p1), 1);
    }

    #[test]
    fn persisted_layout_matches_storage_contract() {
        let (store, kv) = memory_store();
        let p1 = ProductId::new("p1");
        store.add(&p1, "Ann", "a@b.com", "Great", 4).unwrap();

        let raw = kv.get("reviews_p1").unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let entry = value.as_array().unwrap().first().unwrap();
        assert_eq!(entry["name"], "Ann");
        assert_eq!(entry["email"], "a@b.com");
        assert_eq!(entry["comment"], "Great");
        assert_eq!(entry["stars"], 4);
        assert!(entry["at"].is_i64(), "timestamp persisted as millis");
    }

    #[test]
    fn dir_store_survives_reopen() {
        let tmp = tempfile::tempdir().unwrap();
        let p1 = ProductId::new("p1");
        {
            let store = ReviewStore::new(Arc::new(DirStore::new(tmp.path())));
            store.add(&p1, "Ann", "a@b.com", "persisted", 5).unwrap();
        }
        let store = ReviewStore::new(Arc::new(DirStore::new(tmp.path())));
        assert_eq!(store.count(&p1), 1);
    }
}
