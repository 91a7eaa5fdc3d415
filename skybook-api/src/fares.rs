use axum::{extract::State, routing::post, Json, Router};
use serde::Deserialize;
use skybook_catalog::FareBreakdown;
use skybook_core::Flight;

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/fares/quote", post(quote_fare))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub flight_ids: Vec<u32>,
    pub passengers: usize,
}

async fn quote_fare(
    State(state): State<AppState>,
    Json(req): Json<QuoteRequest>,
) -> Result<Json<FareBreakdown>, AppError> {
    if req.passengers == 0 {
        return Err(AppError::ValidationError(
            "At least one passenger is required".to_string(),
        ));
    }
    let flights = resolve_flights(&state, &req.flight_ids).await?;
    Ok(Json(state.pricing.quote(&flights, req.passengers)))
}

/// Looks up each id in order. Empty lists and unknown ids are rejected.
pub(crate) async fn resolve_flights(state: &AppState, ids: &[u32]) -> Result<Vec<Flight>, AppError> {
    if ids.is_empty() {
        return Err(AppError::ValidationError(
            "At least one flight is required".to_string(),
        ));
    }

    let mut flights = Vec::with_capacity(ids.len());
    for &id in ids {
        let flight = state
            .flight_repo
            .find_flight(id)
            .await?
            .ok_or_else(|| AppError::NotFoundError(format!("Flight {} not found", id)))?;
        flights.push(flight);
    }
    Ok(flights)
}
