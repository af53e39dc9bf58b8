//! Home page route handler.

use std::collections::HashMap;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use tracing::instrument;

use crate::catalog::Catalog;
use crate::filter::FilterState;
use crate::filters;
use crate::state::AppState;
use crate::views::{CardView, SidebarView};

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub cards: Vec<CardView>,
    pub sidebar: SidebarView,
}

/// Display the home page: the first 8 catalog products, with the filter
/// state from the query string applied to their visibility.
#[instrument(skip(state))]
pub async fn home(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let fs = FilterState::from_params(&params);

    let mut cards: Vec<CardView> = state
        .catalog()
        .featured(Catalog::HOME_PAGE_SIZE)
        .map(CardView::from_product)
        .collect();
    fs.apply(&mut cards);

    let sidebar = SidebarView::build(&state.catalog().brands(), &fs, "/");

    HomeTemplate { cards, sidebar }
}
