use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use skybook_catalog::{deal_counts, filter_deals, Deal, DealType, DealTypeCount};
use skybook_store::Operation;

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/deals", get(list_deals))
}

#[derive(Debug, Default, Deserialize)]
pub struct DealParams {
    #[serde(rename = "type")]
    pub deal_type: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DealsResponse {
    pub deals: Vec<Deal>,
    pub counts: Vec<DealTypeCount>,
}

async fn list_deals(
    State(state): State<AppState>,
    Query(params): Query<DealParams>,
) -> Result<Json<DealsResponse>, AppError> {
    let deal_type = match params.deal_type.as_deref().map(str::trim) {
        None | Some("") | Some("all") => None,
        Some(raw) => Some(
            raw.parse::<DealType>()
                .map_err(|e| AppError::ValidationError(e.to_string()))?,
        ),
    };

    state.latency.pause(Operation::LoadDeals).await;

    let deals = &state.content.deals;
    Ok(Json(DealsResponse {
        deals: filter_deals(deals, deal_type),
        counts: deal_counts(deals),
    }))
}
