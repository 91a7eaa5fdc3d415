use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use skybook_catalog::{search_faqs, ContactChannel, FaqCategory};

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/support/faqs", get(list_faqs))
        .route("/v1/support/contacts", get(list_contacts))
}

#[derive(Debug, Default, Deserialize)]
pub struct FaqParams {
    /// Free-text search over questions and answers.
    pub q: Option<String>,
}

async fn list_faqs(
    State(state): State<AppState>,
    Query(params): Query<FaqParams>,
) -> Json<Vec<FaqCategory>> {
    let term = params.q.unwrap_or_default();
    Json(search_faqs(&state.content.faqs, &term))
}

async fn list_contacts(State(state): State<AppState>) -> Json<Vec<ContactChannel>> {
    Json(state.content.contacts.clone())
}
