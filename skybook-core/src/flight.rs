use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Service tier of a flight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum FareClass {
    Economy,
    PremiumEconomy,
    Business,
    First,
}

/// A single scheduled service between two cities.
///
/// Timestamps are local wall-clock times as printed on the ticket, without an
/// offset. Flights are loaded once from fixture data and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub id: u32,
    pub airline: String,
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    pub departure_time: NaiveDateTime,
    pub arrival_time: NaiveDateTime,
    /// Minutes
    pub duration: u32,
    pub stops: u8,
    #[serde(rename = "class")]
    pub fare_class: FareClass,
    pub price: i64,
    pub available_seats: u32,
}

impl Flight {
    pub fn departure_hour(&self) -> u32 {
        self.departure_time.hour()
    }

    /// `"{origin}-{destination}"`
    pub fn route(&self) -> String {
        format!("{}-{}", self.origin, self.destination)
    }
}
