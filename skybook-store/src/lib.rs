pub mod app_config;
pub mod fixtures;
pub mod flight_repo;
pub mod status_repo;
pub mod latency;

pub use fixtures::{FixtureError, SiteContent};
pub use flight_repo::FixtureFlightRepository;
pub use status_repo::RandomStatusProvider;
pub use latency::{Operation, SimulatedLatency};
