//! Category page route handler.

use std::collections::HashMap;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};
use tracing::instrument;

use crate::catalog::Category;
use crate::error::{AppError, Result};
use crate::filter::FilterState;
use crate::filters;
use crate::state::AppState;
use crate::views::{CardView, SidebarView};

/// Category page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/category.html")]
pub struct CategoryTemplate {
    pub title: &'static str,
    pub cards: Vec<CardView>,
    pub sidebar: SidebarView,
}

/// Display a category page.
///
/// The category filter is applied at render time: only products in the
/// bound category become cards at all. The sidebar and search facets then
/// toggle visibility within that set.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(cat): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse> {
    let category =
        Category::parse(&cat).ok_or_else(|| AppError::NotFound(format!("category {cat}")))?;

    let fs = FilterState::from_params(&params);

    let mut cards: Vec<CardView> = state
        .catalog()
        .in_category(category)
        .map(CardView::from_product)
        .collect();
    fs.apply(&mut cards);

    let sidebar = SidebarView::build(
        &state.catalog().brands(),
        &fs,
        format!("/category/{}", category.as_str()),
    );

    Ok(CategoryTemplate {
        title: category.title(),
        cards,
        sidebar,
    })
}
