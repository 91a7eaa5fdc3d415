use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use skybook_catalog::{cheapest_per_route, featured_flights, search, CatalogStats, QuickFilter};
use skybook_catalog::featured::FEATURED_LIMIT;
use skybook_core::{Flight, SearchQuery, SortKey};
use skybook_store::Operation;

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/flights", get(list_flights))
        .route("/v1/flights/search", post(search_flights))
        .route("/v1/flights/featured", get(featured))
        .route("/v1/flights/stats", get(stats))
        .route("/v1/flights/routes", get(routes_overview))
        .route("/v1/flights/{id}", get(get_flight))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeaturedParams {
    pub filter: QuickFilter,
    pub sort_by: SortKey,
}

async fn list_flights(State(state): State<AppState>) -> Result<Json<Vec<Flight>>, AppError> {
    state.latency.pause(Operation::AllFlights).await;
    let flights = state.flight_repo.all_flights().await?;
    Ok(Json(flights))
}

async fn search_flights(
    State(state): State<AppState>,
    Json(query): Json<SearchQuery>,
) -> Result<Json<Vec<Flight>>, AppError> {
    state.latency.pause(Operation::SearchFlights).await;
    let flights = state.flight_repo.all_flights().await?;
    let results = search(&flights, &query);

    tracing::info!(
        origin = ?query.origin,
        destination = ?query.destination,
        results = results.len(),
        "Flight search"
    );
    Ok(Json(results))
}

async fn featured(
    State(state): State<AppState>,
    Query(params): Query<FeaturedParams>,
) -> Result<Json<Vec<Flight>>, AppError> {
    let flights = state.flight_repo.all_flights().await?;
    Ok(Json(featured_flights(
        &flights,
        params.filter,
        params.sort_by,
        FEATURED_LIMIT,
    )))
}

async fn stats(State(state): State<AppState>) -> Result<Json<CatalogStats>, AppError> {
    let flights = state.flight_repo.all_flights().await?;
    Ok(Json(CatalogStats::from_flights(&flights)))
}

async fn routes_overview(State(state): State<AppState>) -> Result<Json<Vec<Flight>>, AppError> {
    let flights = state.flight_repo.all_flights().await?;
    Ok(Json(cheapest_per_route(&flights)))
}

async fn get_flight(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Flight>, AppError> {
    state.latency.pause(Operation::FlightById).await;
    state
        .flight_repo
        .find_flight(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFoundError(format!("Flight {} not found", id)))
}
