use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub latency: LatencyConfig,
    #[serde(default)]
    pub business_rules: BusinessRules,
    #[serde(default)]
    pub status: StatusConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 8080 }
    }
}

/// Artificial delay per operation, in milliseconds.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LatencyConfig {
    pub search_ms: u64,
    pub all_flights_ms: u64,
    pub flight_by_id_ms: u64,
    pub create_booking_ms: u64,
    pub list_bookings_ms: u64,
    pub get_booking_ms: u64,
    pub update_booking_ms: u64,
    pub load_deals_ms: u64,
}

impl LatencyConfig {
    /// No artificial delay anywhere.
    pub fn none() -> Self {
        Self {
            search_ms: 0,
            all_flights_ms: 0,
            flight_by_id_ms: 0,
            create_booking_ms: 0,
            list_bookings_ms: 0,
            get_booking_ms: 0,
            update_booking_ms: 0,
            load_deals_ms: 0,
        }
    }
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            search_ms: 800,
            all_flights_ms: 500,
            flight_by_id_ms: 300,
            create_booking_ms: 1000,
            list_bookings_ms: 600,
            get_booking_ms: 300,
            update_booking_ms: 500,
            load_deals_ms: 1000,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct BusinessRules {
    pub tax_rate: f64,
    pub booking_fee: i64,
}

impl Default for BusinessRules {
    fn default() -> Self {
        Self {
            tax_rate: 0.18,
            booking_fee: 199,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct StatusConfig {
    pub poll_interval_seconds: u64,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            poll_interval_seconds: 30,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Every key has a built-in default, so even the base file is optional
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg.. `SKYBOOK_SERVER__PORT=9000` sets `server.port`
            .add_source(config::Environment::with_prefix("SKYBOOK").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
