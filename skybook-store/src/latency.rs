use std::time::Duration;

use crate::app_config::LatencyConfig;

/// Service calls that carry simulated network latency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    SearchFlights,
    AllFlights,
    FlightById,
    CreateBooking,
    ListBookings,
    GetBooking,
    UpdateBooking,
    CancelBooking,
    DeleteBooking,
    LoadDeals,
}

#[derive(Debug, Clone)]
pub struct SimulatedLatency {
    config: LatencyConfig,
}

impl SimulatedLatency {
    pub fn new(config: LatencyConfig) -> Self {
        Self { config }
    }

    pub fn disabled() -> Self {
        Self::new(LatencyConfig::none())
    }

    pub fn delay_for(&self, operation: Operation) -> Duration {
        let millis = match operation {
            Operation::SearchFlights => self.config.search_ms,
            Operation::AllFlights => self.config.all_flights_ms,
            Operation::FlightById => self.config.flight_by_id_ms,
            Operation::CreateBooking => self.config.create_booking_ms,
            Operation::ListBookings => self.config.list_bookings_ms,
            Operation::GetBooking => self.config.get_booking_ms,
            Operation::UpdateBooking | Operation::CancelBooking | Operation::DeleteBooking => {
                self.config.update_booking_ms
            }
            Operation::LoadDeals => self.config.load_deals_ms,
        };
        Duration::from_millis(millis)
    }

    /// Sleeps for the configured delay. Must not be awaited while holding a
    /// store lock.
    pub async fn pause(&self, operation: Operation) {
        let delay = self.delay_for(operation);
        if delay.is_zero() {
            return;
        }
        tracing::trace!(?operation, ?delay, "Simulating service latency");
        tokio::time::sleep(delay).await;
    }
}
