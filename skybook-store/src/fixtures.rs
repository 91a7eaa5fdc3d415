//! Static seed data compiled into the binary.

use serde::Deserialize;
use skybook_catalog::{ContactChannel, Deal, FaqCategory};
use skybook_core::Flight;
use skybook_order::Booking;

const FLIGHTS_JSON: &str = include_str!("../fixtures/flights.json");
const BOOKINGS_JSON: &str = include_str!("../fixtures/bookings.json");
const DEALS_JSON: &str = include_str!("../fixtures/deals.json");
const SUPPORT_JSON: &str = include_str!("../fixtures/support.json");

#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("Invalid {name} fixture: {source}")]
    Parse {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("Duplicate flight id in fixture: {0}")]
    DuplicateFlightId(u32),
}

fn parse<T: for<'de> Deserialize<'de>>(name: &'static str, json: &str) -> Result<T, FixtureError> {
    serde_json::from_str(json).map_err(|source| FixtureError::Parse { name, source })
}

/// The flight catalog in fixture order. Ids are checked for uniqueness.
pub fn flights() -> Result<Vec<Flight>, FixtureError> {
    let flights: Vec<Flight> = parse("flights", FLIGHTS_JSON)?;

    let mut seen = std::collections::HashSet::new();
    if let Some(duplicate) = flights.iter().find(|f| !seen.insert(f.id)) {
        return Err(FixtureError::DuplicateFlightId(duplicate.id));
    }

    Ok(flights)
}

/// A fresh copy of the seed bookings.
pub fn bookings() -> Result<Vec<Booking>, FixtureError> {
    parse("bookings", BOOKINGS_JSON)
}

/// Deals and support pages.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteContent {
    #[serde(skip)]
    pub deals: Vec<Deal>,
    pub faqs: Vec<FaqCategory>,
    pub contacts: Vec<ContactChannel>,
}

impl SiteContent {
    pub fn load() -> Result<Self, FixtureError> {
        let mut content: SiteContent = parse("support", SUPPORT_JSON)?;
        content.deals = parse("deals", DEALS_JSON)?;
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skybook_catalog::FareCalculator;
    use skybook_order::BookingStatus;

    #[test]
    fn test_flight_fixture_loads() {
        let flights = flights().expect("Failed to load flights");
        assert_eq!(flights.len(), 14);
        assert_eq!(flights[0].flight_number, "6E-2345");
        assert!(flights.iter().all(|f| f.price >= 0));
    }

    #[test]
    fn test_booking_fixture_prices_match_fare_rules() {
        let calculator = FareCalculator::default();
        let bookings = bookings().expect("Failed to load bookings");
        assert_eq!(bookings.len(), 2);
        assert_eq!(bookings[1].status, BookingStatus::Cancelled);

        for booking in &bookings {
            let expected = calculator.total_price(&booking.flights, booking.passengers.len());
            assert_eq!(booking.total_price, expected, "booking {}", booking.id);
        }
    }

    #[test]
    fn test_site_content_loads() {
        let content = SiteContent::load().expect("Failed to load content");
        assert_eq!(content.deals.len(), 6);
        assert_eq!(content.faqs.len(), 3);
        assert_eq!(content.contacts.len(), 3);
    }
}
