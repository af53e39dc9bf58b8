//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                          - Home page (first 8 products + sidebar)
//! GET  /health                    - Liveness check
//! GET  /category/{cat}            - Category page (render-time category filter)
//!
//! # Review dialog (HTMX fragments)
//! GET  /reviews/{pid}/modal       - Open the dialog for product pid
//! POST /reviews/modal/close       - Close the dialog (empty fragment)
//! POST /reviews/modal/stars/{n}   - Pick draft star n (picker fragment)
//! POST /reviews/{pid}             - Submit the review form (dialog fragment)
//! ```
//!
//! Home and category pages accept the filter query parameters `q`,
//! `price_gte`, `price_lte`, `stars_gte`, and one `brand_<name>` key per
//! checked brand checkbox.

pub mod category;
pub mod home;
pub mod reviews;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::state::AppState;

/// Create the review dialog routes router.
pub fn review_routes() -> Router<AppState> {
    Router::new()
        .route("/{pid}/modal", get(reviews::open_modal))
        .route("/modal/close", post(reviews::close_modal))
        .route("/modal/stars/{n}", post(reviews::pick_star))
        .route("/{pid}", post(reviews::submit))
}

/// Create all page and fragment routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/category/{cat}", get(category::show))
        .nest("/reviews", review_routes())
}

/// Build the full application: routes, session layer, static files,
/// request tracing.
///
/// Used by `main` and by the route-level tests, so both exercise the
/// same stack.
pub fn app(state: AppState) -> Router {
    let session_layer = SessionManagerLayer::new(MemoryStore::default()).with_secure(false);

    Router::new()
        .route("/health", get(health))
        .merge(routes())
        .nest_service("/static", ServeDir::new("crates/storefront/static"))
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running.
async fn health() -> &'static str {
    "ok"
}
