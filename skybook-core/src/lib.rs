pub mod flight;
pub mod search;
pub mod status;
pub mod repository;

pub use flight::{FareClass, Flight};
pub use search::{DepartureBucket, PriceRange, SearchQuery, SortKey};
pub use status::{FlightState, FlightStatus, StatusTracker, StatusUpdate};
pub use repository::{FlightRepository, FlightStatusProvider};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Internal service error: {0}")]
    InternalError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
