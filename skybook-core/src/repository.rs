use async_trait::async_trait;

use crate::flight::Flight;
use crate::status::FlightStatus;
use crate::CoreResult;

/// Read access to the flight catalog.
#[async_trait]
pub trait FlightRepository: Send + Sync {
    /// Every flight in catalog order.
    async fn all_flights(&self) -> CoreResult<Vec<Flight>>;

    async fn find_flight(&self, id: u32) -> CoreResult<Option<Flight>>;
}

/// Source of live flight status.
///
/// The bundled implementation is a random stub; a real status feed plugs in
/// here.
#[async_trait]
pub trait FlightStatusProvider: Send + Sync {
    async fn flight_status(&self, flight_number: &str) -> CoreResult<FlightStatus>;
}
