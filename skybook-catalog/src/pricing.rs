use serde::{Deserialize, Serialize};

use skybook_core::Flight;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Fraction of the base fare charged as tax (0.18 = 18%)
    pub tax_rate: f64,

    /// Flat convenience fee per passenger per flight
    pub service_fee: i64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            tax_rate: 0.18,
            service_fee: 199,
        }
    }
}

/// Per-flight, per-passenger fare components.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FareLine {
    pub flight_id: u32,
    pub base_fare: i64,
    pub taxes: i64,
    pub fees: i64,
}

impl FareLine {
    pub fn per_passenger(&self) -> i64 {
        self.base_fare + self.taxes + self.fees
    }
}

/// Totals for a set of flights booked for `passengers` travellers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FareBreakdown {
    pub passengers: usize,
    pub lines: Vec<FareLine>,
    pub base_total: i64,
    pub taxes_total: i64,
    pub fees_total: i64,
    pub total: i64,
}

#[derive(Debug, Clone, Default)]
pub struct FareCalculator {
    config: PricingConfig,
}

impl FareCalculator {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Tax on one base fare, rounded to the nearest whole unit (halves round up).
    pub fn taxes_on(&self, base_fare: i64) -> i64 {
        (base_fare as f64 * self.config.tax_rate).round() as i64
    }

    pub fn line(&self, flight: &Flight) -> FareLine {
        FareLine {
            flight_id: flight.id,
            base_fare: flight.price,
            taxes: self.taxes_on(flight.price),
            fees: self.config.service_fee,
        }
    }

    /// Totals saturate at `i64::MAX` instead of wrapping.
    pub fn quote(&self, flights: &[Flight], passengers: usize) -> FareBreakdown {
        let lines: Vec<FareLine> = flights.iter().map(|f| self.line(f)).collect();
        let count = i64::try_from(passengers).unwrap_or(i64::MAX);
        let subtotal = |part: fn(&FareLine) -> i64| {
            lines
                .iter()
                .map(part)
                .fold(0i64, i64::saturating_add)
                .saturating_mul(count)
        };

        let base_total = subtotal(|l| l.base_fare);
        let taxes_total = subtotal(|l| l.taxes);
        let fees_total = subtotal(|l| l.fees);

        FareBreakdown {
            passengers,
            base_total,
            taxes_total,
            fees_total,
            total: base_total.saturating_add(taxes_total).saturating_add(fees_total),
            lines,
        }
    }

    /// Booking total: every flight's `base + tax + fee`, times the passenger count.
    pub fn total_price(&self, flights: &[Flight], passengers: usize) -> i64 {
        self.quote(flights, passengers).total
    }
}
