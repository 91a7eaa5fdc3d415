use std::sync::Arc;

use async_trait::async_trait;
use skybook_core::{CoreResult, Flight, FlightRepository};

use crate::fixtures::{self, FixtureError};

/// Read-only catalog backed by the bundled flight fixture.
#[derive(Clone)]
pub struct FixtureFlightRepository {
    flights: Arc<Vec<Flight>>,
}

impl FixtureFlightRepository {
    pub fn new(flights: Vec<Flight>) -> Self {
        Self {
            flights: Arc::new(flights),
        }
    }

    pub fn load() -> Result<Self, FixtureError> {
        let flights = fixtures::flights()?;
        tracing::info!(count = flights.len(), "Flight catalog loaded");
        Ok(Self::new(flights))
    }
}

#[async_trait]
impl FlightRepository for FixtureFlightRepository {
    async fn all_flights(&self) -> CoreResult<Vec<Flight>> {
        Ok(self.flights.as_ref().clone())
    }

    async fn find_flight(&self, id: u32) -> CoreResult<Option<Flight>> {
        Ok(self.flights.iter().find(|f| f.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_catalog_lookup() {
        let repo = FixtureFlightRepository::load().unwrap();

        let all = repo.all_flights().await.unwrap();
        assert_eq!(all.len(), 14);

        let found = repo.find_flight(7).await.unwrap();
        assert_eq!(found.map(|f| f.flight_number), Some("I5-1427".to_string()));
        assert!(repo.find_flight(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_callers_get_copies() {
        let repo = FixtureFlightRepository::load().unwrap();
        let mut first = repo.all_flights().await.unwrap();
        first[0].price = 1;
        first.clear();

        let second = repo.all_flights().await.unwrap();
        assert_eq!(second.len(), 14);
        assert_eq!(second[0].price, 4599);
    }
}
