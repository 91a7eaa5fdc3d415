use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum FlightState {
    OnTime,
    Delayed,
    Boarding,
    Departed,
    Arrived,
    Cancelled,
}

impl FlightState {
    pub const ALL: [FlightState; 6] = [
        FlightState::OnTime,
        FlightState::Delayed,
        FlightState::Boarding,
        FlightState::Departed,
        FlightState::Arrived,
        FlightState::Cancelled,
    ];

    /// Passenger-facing notice for this state.
    pub fn describe(self, delay_minutes: u32) -> String {
        match self {
            FlightState::OnTime => "Flight is on time".to_string(),
            FlightState::Delayed => format!("Flight delayed by {} minutes", delay_minutes),
            FlightState::Boarding => "Boarding has started".to_string(),
            FlightState::Departed => "Flight has departed".to_string(),
            FlightState::Arrived => "Flight has arrived".to_string(),
            FlightState::Cancelled => "Flight has been cancelled".to_string(),
        }
    }
}

/// Point-in-time status snapshot for a flight number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FlightStatus {
    pub flight_number: String,
    pub status: FlightState,
    pub gate: String,
    pub delay_minutes: u32,
    pub terminal: u8,
    pub last_updated: DateTime<Utc>,
}

/// A polled snapshot tagged with whether it differs from the previous poll.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdate {
    #[serde(flatten)]
    pub status: FlightStatus,
    pub changed: bool,
    pub message: Option<String>,
}

/// Remembers the last state seen on a polling stream.
#[derive(Debug, Default)]
pub struct StatusTracker {
    last: Option<FlightState>,
}

impl StatusTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, status: FlightStatus) -> StatusUpdate {
        let changed = matches!(self.last, Some(previous) if previous != status.status);
        self.last = Some(status.status);

        let message = changed.then(|| {
            format!(
                "{}: {}",
                status.flight_number,
                status.status.describe(status.delay_minutes)
            )
        });

        StatusUpdate {
            status,
            changed,
            message,
        }
    }
}
