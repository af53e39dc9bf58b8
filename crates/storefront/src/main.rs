//! Shopverse Storefront - public catalog site.
//!
//! This binary serves the storefront on port 3000.
//!
//! # Architecture
//!
//! - Axum web framework with HTMX fragments for interactivity
//! - Askama templates for server-side rendering
//! - Fixed in-memory product catalog seeded at startup
//! - Reviews persisted as one JSON file per product under the data dir
//! - Per-shopper review dialog state held in tower-sessions

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use shopverse_storefront::catalog::Catalog;
use shopverse_storefront::config::StorefrontConfig;
use shopverse_storefront::reviews::{DirStore, ReviewStore};
use shopverse_storefront::routes;
use shopverse_storefront::state::AppState;

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = StorefrontConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "shopverse_storefront=info,tower_http=debug".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Seed the catalog and open the review store
    let catalog = Catalog::seed();
    tracing::info!(products = catalog.len(), "Catalog seeded");

    let reviews = ReviewStore::new(Arc::new(DirStore::new(&config.data_dir)));
    tracing::info!(dir = %config.data_dir.display(), "Review store opened");

    // Build application state and router
    let state = AppState::new(catalog, reviews);
    let app = routes::app(state);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("storefront listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
