use async_trait::async_trait;
use chrono::Utc;
use rand::seq::SliceRandom;
use rand::Rng;
use skybook_core::{CoreError, CoreResult, FlightState, FlightStatus, FlightStatusProvider};

/// Stand-in status feed: every call rolls a fresh random snapshot.
///
/// Nothing is remembered between calls, so consecutive lookups for the same
/// flight can disagree. Replace with a real feed before relying on it.
#[derive(Debug, Clone, Default)]
pub struct RandomStatusProvider;

impl RandomStatusProvider {
    pub fn new() -> Self {
        Self
    }

    fn roll<R: Rng>(rng: &mut R, flight_number: &str) -> FlightStatus {
        let status = *FlightState::ALL
            .choose(rng)
            .unwrap_or(&FlightState::OnTime);
        let delay_minutes = if status == FlightState::Delayed {
            rng.gen_range(1..=12) * 15
        } else {
            0
        };
        let gate = format!(
            "{}{}",
            char::from(b'A' + rng.gen_range(0..6u8)),
            rng.gen_range(1..=30)
        );

        FlightStatus {
            flight_number: flight_number.to_string(),
            status,
            gate,
            delay_minutes,
            terminal: rng.gen_range(1..=3),
            last_updated: Utc::now(),
        }
    }
}

#[async_trait]
impl FlightStatusProvider for RandomStatusProvider {
    async fn flight_status(&self, flight_number: &str) -> CoreResult<FlightStatus> {
        let flight_number = flight_number.trim();
        if flight_number.is_empty() {
            return Err(CoreError::ValidationError(
                "Please enter a flight number".to_string(),
            ));
        }

        let status = Self::roll(&mut rand::thread_rng(), &flight_number.to_uppercase());
        tracing::debug!(
            flight = %status.flight_number,
            status = ?status.status,
            "Flight status rolled"
        );
        Ok(status)
    }
}
