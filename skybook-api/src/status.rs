use std::convert::Infallible;

use axum::{
    extract::{Path, State},
    response::sse::{Event, KeepAlive, Sse},
    routing::get,
    Json, Router,
};
use futures_util::{future, stream, Stream, StreamExt};
use skybook_core::{FlightStatus, StatusTracker, StatusUpdate};
use tokio::time::Instant;
use tokio_stream::wrappers::IntervalStream;

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/flights/status/{flight_number}", get(get_status))
        .route("/v1/flights/status/{flight_number}/stream", get(stream_status))
}

async fn get_status(
    State(state): State<AppState>,
    Path(flight_number): Path<String>,
) -> Result<Json<FlightStatus>, AppError> {
    let status = state.status_provider.flight_status(&flight_number).await?;
    Ok(Json(status))
}

/// Sends the current status at once, then polls the provider on a fixed
/// interval until the client goes away.
async fn stream_status(
    State(state): State<AppState>,
    Path(flight_number): Path<String>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, AppError> {
    // A bad flight number fails here, before the stream opens.
    let current = state.status_provider.flight_status(&flight_number).await?;

    let period = state.status_poll_interval;
    tracing::info!(flight = %current.flight_number, interval = ?period, "Status stream opened");

    let mut tracker = StatusTracker::new();
    let first = status_event(&tracker.observe(current));

    let provider = state.status_provider.clone();
    let ticks = IntervalStream::new(tokio::time::interval_at(Instant::now() + period, period));

    let polls = ticks
        .then(move |_| {
            let provider = provider.clone();
            let flight_number = flight_number.clone();
            async move { provider.flight_status(&flight_number).await }
        })
        .scan(tracker, |tracker, polled| {
            let event = match polled {
                Ok(status) => status_event(&tracker.observe(status)),
                Err(e) => {
                    tracing::warn!("Status poll failed: {}", e);
                    Event::default().event("error").data(e.to_string())
                }
            };
            future::ready(Some(Ok(event)))
        });

    let stream = stream::once(future::ready(Ok(first))).chain(polls);
    Ok(Sse::new(stream).keep_alive(KeepAlive::default()))
}

fn status_event(update: &StatusUpdate) -> Event {
    Event::default()
        .event("status")
        .json_data(update)
        .unwrap_or_else(|e| Event::default().event("error").data(e.to_string()))
}
