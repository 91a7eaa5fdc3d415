use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use skybook_catalog::{FareCalculator, PricingConfig};
use skybook_core::{FlightRepository, FlightStatusProvider};
use skybook_order::BookingStore;
use skybook_store::app_config::Config;
use skybook_store::{fixtures, FixtureFlightRepository, RandomStatusProvider, SimulatedLatency, SiteContent};
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct AppState {
    pub flight_repo: Arc<dyn FlightRepository>,
    pub status_provider: Arc<dyn FlightStatusProvider>,
    /// Id assignment and status changes take the write lock for the whole
    /// read-modify-write.
    pub bookings: Arc<RwLock<BookingStore>>,
    pub content: Arc<SiteContent>,
    pub pricing: FareCalculator,
    pub latency: SimulatedLatency,
    pub status_poll_interval: Duration,
}

impl AppState {
    /// Loads every fixture and wires the stub services.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let pricing = FareCalculator::new(PricingConfig {
            tax_rate: config.business_rules.tax_rate,
            service_fee: config.business_rules.booking_fee,
        });

        let flight_repo = FixtureFlightRepository::load().context("Failed to load flight catalog")?;
        let seed = fixtures::bookings().context("Failed to load booking fixture")?;
        let content = SiteContent::load().context("Failed to load site content")?;

        tracing::info!(bookings = seed.len(), deals = content.deals.len(), "Fixtures loaded");

        Ok(Self {
            flight_repo: Arc::new(flight_repo),
            status_provider: Arc::new(RandomStatusProvider::new()),
            bookings: Arc::new(RwLock::new(BookingStore::with_bookings(seed, pricing.clone()))),
            content: Arc::new(content),
            pricing,
            latency: SimulatedLatency::new(config.latency.clone()),
            status_poll_interval: Duration::from_secs(config.status.poll_interval_seconds.max(1)),
        })
    }
}
