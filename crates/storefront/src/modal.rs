//! Review dialog state machine.
//!
//! At most one dialog exists per shopper session. The state is an explicit
//! value threaded through the route handlers (loaded from the session,
//! transitioned, stored back) rather than a free-floating "current product"
//! variable. All transitions are pure.

use serde::{Deserialize, Serialize};

use shopverse_core::{ProductId, Stars};

/// The review dialog: closed, or open on one product with a draft star
/// selection for the picker.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ModalState {
    #[default]
    Closed,
    Open {
        product_id: ProductId,
        draft_stars: Stars,
    },
}

impl ModalState {
    /// Open the dialog on `product_id` with the default 5-star draft.
    ///
    /// Opening while already open simply rebinds to the new product.
    #[must_use]
    pub fn on_open(self, product_id: ProductId) -> Self {
        Self::Open {
            product_id,
            draft_stars: Stars::FIVE,
        }
    }

    /// Close the dialog. A no-op when already closed.
    #[must_use]
    pub fn on_close(self) -> Self {
        Self::Closed
    }

    /// Pick a draft star count. Ignored while closed.
    #[must_use]
    pub fn on_star_picked(self, stars: Stars) -> Self {
        match self {
            Self::Open { product_id, .. } => Self::Open {
                product_id,
                draft_stars: stars,
            },
            Self::Closed => Self::Closed,
        }
    }

    /// Reset the draft after a successful submission; the dialog stays
    /// open on the same product. Ignored while closed.
    #[must_use]
    pub fn on_submitted(self) -> Self {
        match self {
            Self::Open { product_id, .. } => Self::Open {
                product_id,
                draft_stars: Stars::FIVE,
            },
            Self::Closed => Self::Closed,
        }
    }

    /// The bound product, when open.
    #[must_use]
    pub const fn product_id(&self) -> Option<&ProductId> {
        match self {
            Self::Open { product_id, .. } => Some(product_id),
            Self::Closed => None,
        }
    }

    /// The current draft star selection, when open.
    #[must_use]
    pub const fn draft_stars(&self) -> Option<Stars> {
        match self {
            Self::Open { draft_stars, .. } => Some(*draft_stars),
            Self::Closed => None,
        }
    }

    /// Whether the dialog is open at all.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn stars(n: u8) -> Stars {
        Stars::new(n).unwrap()
    }

    #[test]
    fn starts_closed() {
        assert_eq!(ModalState::default(), ModalState::Closed);
    }

    #[test]
    fn open_defaults_draft_to_five() {
        let state = ModalState::Closed.on_open(ProductId::new("p1"));
        assert_eq!(state.product_id().unwrap().as_str(), "p1");
        assert_eq!(state.draft_stars(), Some(Stars::FIVE));
    }

    #[test]
    fn open_while_open_rebinds_and_resets_draft() {
        let state = ModalState::Closed
            .on_open(ProductId::new("p1"))
            .on_star_picked(stars(2))
            .on_open(ProductId::new("p2"));
        assert_eq!(state.product_id().unwrap().as_str(), "p2");
        assert_eq!(state.draft_stars(), Some(Stars::FIVE));
    }

    #[test]
    fn star_pick_updates_draft_only() {
        let state = ModalState::Closed
            .on_open(ProductId::new("p1"))
            .on_star_picked(stars(3));
        assert_eq!(state.product_id().unwrap().as_str(), "p1");
        assert_eq!(state.draft_stars(), Some(stars(3)));
    }

    #[test]
    fn star_pick_while_closed_stays_closed() {
        assert_eq!(
            ModalState::Closed.on_star_picked(stars(4)),
            ModalState::Closed
        );
    }

    #[test]
    fn close_from_any_state() {
        assert_eq!(ModalState::Closed.on_close(), ModalState::Closed);
        let open = ModalState::Closed.on_open(ProductId::new("p1"));
        assert_eq!(open.on_close(), ModalState::Closed);
    }

    #[test]
    fn submit_resets_draft_and_stays_open() {
        let state = ModalState::Closed
            .on_open(ProductId::new("p1"))
            .on_star_picked(stars(2))
            .on_submitted();
        assert!(state.is_open());
        assert_eq!(state.draft_stars(), Some(Stars::FIVE));
        assert_eq!(state.product_id().unwrap().as_str(), "p1");
    }

    #[test]
    fn serde_round_trip_for_session_storage() {
        let state = ModalState::Closed
            .on_open(ProductId::new("p8"))
            .on_star_picked(stars(1));
        let json = serde_json::to_string(&state).unwrap();
        let back: ModalState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
