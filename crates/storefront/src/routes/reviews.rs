//! Review dialog route handlers (HTMX fragments).
//!
//! Each handler loads the shopper's [`ModalState`] from the session,
//! applies one transition, stores it back, and renders the resulting
//! fragment. Validation failures are rendered inline in the dialog with
//! the submitted form values retained; they never become error responses.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use shopverse_core::{ProductId, Stars};

use crate::error::{AppError, Result};
use crate::filters;
use crate::modal::ModalState;
use crate::state::AppState;

/// Session key holding the dialog state.
const MODAL_KEY: &str = "review_modal";

/// One review row in the dialog list.
pub struct ReviewItem {
    pub name: String,
    pub comment: String,
    pub stars: u8,
}

/// Review dialog fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/review_modal.html")]
pub struct ReviewModalTemplate {
    pub product_id: String,
    pub product_title: String,
    pub count: usize,
    pub reviews: Vec<ReviewItem>,
    /// Current draft star selection, 1..=5.
    pub draft: i32,
    /// Blocking validation message, shown above the form.
    pub error: Option<String>,
    // Retained form contents (empty after a successful submission).
    pub form_name: String,
    pub form_email: String,
    pub form_comment: String,
}

/// Star picker fragment template (re-rendered on each pick).
#[derive(Template, WebTemplate)]
#[template(path = "partials/star_picker.html")]
pub struct StarPickerTemplate {
    pub draft: i32,
}

/// Review form fields.
#[derive(Debug, Deserialize)]
pub struct ReviewForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub comment: String,
}

/// Open the dialog for a product, rebinding if one is already open.
#[instrument(skip(state, session))]
pub async fn open_modal(
    State(state): State<AppState>,
    session: Session,
    Path(pid): Path<String>,
) -> Result<Response> {
    let product_id = ProductId::new(pid);
    let Some(product) = state.catalog().get(&product_id) else {
        return Err(AppError::NotFound(format!("product {product_id}")));
    };
    let title = product.title.clone();

    let modal = load_modal(&session).await?.on_open(product_id.clone());
    save_modal(&session, &modal).await?;

    Ok(render_modal(&state, &product_id, &title, &modal, None, ReviewForm::empty()).into_response())
}

/// Close the dialog. Responds with an empty fragment.
#[instrument(skip(session))]
pub async fn close_modal(session: Session) -> Result<Response> {
    let modal = load_modal(&session).await?.on_close();
    save_modal(&session, &modal).await?;
    Ok(Html(String::new()).into_response())
}

/// Pick a draft star count; re-renders the picker.
///
/// A pick while no dialog is open has nothing to update and responds
/// with an empty fragment.
#[instrument(skip(session))]
pub async fn pick_star(session: Session, Path(n): Path<u8>) -> Result<Response> {
    let stars =
        Stars::new(n).map_err(|e| AppError::BadRequest(e.to_string()))?;

    let modal = load_modal(&session).await?.on_star_picked(stars);
    save_modal(&session, &modal).await?;

    match modal.draft_stars() {
        Some(draft) => Ok(StarPickerTemplate {
            draft: i32::from(draft.as_u8()),
        }
        .into_response()),
        None => Ok(Html(String::new()).into_response()),
    }
}

/// Submit the review form.
///
/// On success the review list reloads, the form clears, the draft resets
/// to 5 stars, and the dialog stays open. On validation failure the
/// dialog re-renders with a blocking message and the form contents
/// retained; nothing is stored.
#[instrument(skip(state, session, form))]
pub async fn submit(
    State(state): State<AppState>,
    session: Session,
    Path(pid): Path<String>,
    Form(form): Form<ReviewForm>,
) -> Result<Response> {
    let product_id = ProductId::new(pid);
    let Some(product) = state.catalog().get(&product_id) else {
        return Err(AppError::NotFound(format!("product {product_id}")));
    };
    let title = product.title.clone();

    // The draft stars belong to this product's dialog; a stale session
    // pointing at another product falls back to the default selection.
    let loaded = load_modal(&session).await?;
    let draft = match loaded.product_id() {
        Some(open_id) if *open_id == product_id => {
            loaded.draft_stars().unwrap_or(Stars::FIVE)
        }
        _ => Stars::FIVE,
    };

    match state.reviews().add(
        &product_id,
        &form.name,
        &form.email,
        &form.comment,
        draft.as_u8(),
    ) {
        Ok(_) => {
            let modal = ModalState::Open {
                product_id: product_id.clone(),
                draft_stars: draft,
            }
            .on_submitted();
            save_modal(&session, &modal).await?;
            Ok(render_modal(&state, &product_id, &title, &modal, None, ReviewForm::empty())
                .into_response())
        }
        Err(e) => {
            let modal = ModalState::Open {
                product_id: product_id.clone(),
                draft_stars: draft,
            };
            save_modal(&session, &modal).await?;
            Ok(
                render_modal(&state, &product_id, &title, &modal, Some(e.to_string()), form)
                    .into_response(),
            )
        }
    }
}

impl ReviewForm {
    const fn empty() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            comment: String::new(),
        }
    }
}

/// Project store contents and dialog state into the fragment template.
fn render_modal(
    state: &AppState,
    product_id: &ProductId,
    product_title: &str,
    modal: &ModalState,
    error: Option<String>,
    form: ReviewForm,
) -> ReviewModalTemplate {
    let reviews: Vec<ReviewItem> = state
        .reviews()
        .list(product_id)
        .into_iter()
        .map(|r| ReviewItem {
            name: r.name,
            comment: r.comment,
            stars: r.stars.as_u8(),
        })
        .collect();

    ReviewModalTemplate {
        product_id: product_id.as_str().to_owned(),
        product_title: product_title.to_owned(),
        count: reviews.len(),
        reviews,
        draft: i32::from(modal.draft_stars().unwrap_or(Stars::FIVE).as_u8()),
        error,
        form_name: form.name,
        form_email: form.email,
        form_comment: form.comment,
    }
}

async fn load_modal(session: &Session) -> Result<ModalState> {
    Ok(session
        .get::<ModalState>(MODAL_KEY)
        .await?
        .unwrap_or_default())
}

async fn save_modal(session: &Session, modal: &ModalState) -> Result<()> {
    session.insert(MODAL_KEY, modal).await?;
    Ok(())
}
