use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use skybook_order::{Booking, BookingStatus, BookingUpdate, NewBooking, Passenger, PassengerDetails, StatusCounts};
use skybook_shared::Masked;
use skybook_store::Operation;

use crate::error::AppError;
use crate::fares::resolve_flights;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/bookings", post(create_booking).get(list_bookings))
        .route(
            "/v1/bookings/{id}",
            get(get_booking).patch(update_booking).delete(delete_booking),
        )
        .route("/v1/bookings/{id}/cancel", post(cancel_booking))
}

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub flight_ids: Vec<u32>,
    pub passengers: Vec<PassengerDetails>,
    pub contact_email: Masked<String>,
    pub contact_phone: Masked<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    /// A booking status, or `all`.
    pub status: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BookingListResponse {
    pub bookings: Vec<Booking>,
    /// Always counted over the full history, whatever the filter.
    pub counts: StatusCounts,
}

// ============================================================================
// Handlers
// ============================================================================

async fn create_booking(
    State(state): State<AppState>,
    Json(req): Json<CreateBookingRequest>,
) -> Result<Json<Booking>, AppError> {
    validate_passengers(&req.passengers)?;
    validate_contact(&req.contact_email, &req.contact_phone)?;
    let flights = resolve_flights(&state, &req.flight_ids).await?;

    state.latency.pause(Operation::CreateBooking).await;

    let booking = state.bookings.write().await.create_booking(NewBooking {
        flights,
        passengers: Passenger::numbered(req.passengers),
        contact_email: req.contact_email,
        contact_phone: req.contact_phone,
    });
    Ok(Json(booking))
}

async fn list_bookings(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<BookingListResponse>, AppError> {
    let status = match params.status.as_deref().map(str::trim) {
        None | Some("") | Some("all") => None,
        Some(raw) => Some(
            raw.parse::<BookingStatus>()
                .map_err(|e| AppError::ValidationError(e.to_string()))?,
        ),
    };

    state.latency.pause(Operation::ListBookings).await;

    let store = state.bookings.read().await;
    Ok(Json(BookingListResponse {
        bookings: store.bookings_with_status(status),
        counts: store.status_counts(),
    }))
}

async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Booking>, AppError> {
    state.latency.pause(Operation::GetBooking).await;
    state
        .bookings
        .read()
        .await
        .get_booking_by_id(id)
        .map(Json)
        .ok_or_else(|| AppError::NotFoundError(format!("Booking {} not found", id)))
}

async fn update_booking(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    Json(update): Json<BookingUpdate>,
) -> Result<Json<Booking>, AppError> {
    if let Some(passengers) = &update.passengers {
        validate_passengers(passengers)?;
    }
    if let Some(email) = &update.contact_email {
        validate_email(email)?;
    }
    if let Some(phone) = &update.contact_phone {
        validate_phone(phone)?;
    }

    state.latency.pause(Operation::UpdateBooking).await;
    let booking = state.bookings.write().await.update_booking(id, update)?;
    Ok(Json(booking))
}

async fn cancel_booking(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Booking>, AppError> {
    state.latency.pause(Operation::CancelBooking).await;
    let booking = state.bookings.write().await.cancel_booking(id)?;
    Ok(Json(booking))
}

async fn delete_booking(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Booking>, AppError> {
    state.latency.pause(Operation::DeleteBooking).await;
    let booking = state.bookings.write().await.delete_booking(id)?;
    Ok(Json(booking))
}

// ============================================================================
// Validation
// ============================================================================

fn validate_passengers(passengers: &[PassengerDetails]) -> Result<(), AppError> {
    if passengers.is_empty() {
        return Err(AppError::ValidationError(
            "At least one passenger is required".to_string(),
        ));
    }
    for (index, passenger) in passengers.iter().enumerate() {
        if passenger.first_name.trim().is_empty() || passenger.last_name.trim().is_empty() {
            return Err(AppError::ValidationError(format!(
                "Passenger {} needs a first and last name",
                index + 1
            )));
        }
    }
    Ok(())
}

fn validate_contact(email: &Masked<String>, phone: &Masked<String>) -> Result<(), AppError> {
    validate_email(email)?;
    validate_phone(phone)
}

fn validate_email(email: &Masked<String>) -> Result<(), AppError> {
    if !email.expose().contains('@') {
        return Err(AppError::ValidationError(
            "A valid contact email is required".to_string(),
        ));
    }
    Ok(())
}

fn validate_phone(phone: &Masked<String>) -> Result<(), AppError> {
    if phone.expose().trim().is_empty() {
        return Err(AppError::ValidationError(
            "A contact phone number is required".to_string(),
        ));
    }
    Ok(())
}
