use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::flight::FareClass;

/// Filter and sort parameters for one search interaction.
///
/// Every field is optional; an absent value or an empty set places no
/// constraint on the results.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchQuery {
    pub origin: Option<String>,
    pub destination: Option<String>,
    #[serde(rename = "class")]
    pub fare_class: Option<FareClass>,
    pub price_range: Option<PriceRange>,
    pub airlines: Vec<String>,
    /// Stop counts as strings ("0", "1", "2")
    pub stops: Vec<String>,
    pub departure_time: Vec<DepartureBucket>,
    pub sort_by: SortKey,
}

impl SearchQuery {
    pub fn sorted_by(mut self, key: SortKey) -> Self {
        self.sort_by = key;
        self
    }
}

/// Inclusive price bounds, serialized as `[min, max]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "(i64, i64)", into = "(i64, i64)")]
pub struct PriceRange {
    pub min: i64,
    pub max: i64,
}

impl PriceRange {
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Bounds ordered low to high. A range whose handles were dragged past
    /// each other is treated as the range between them.
    pub fn bounds(&self) -> (i64, i64) {
        if self.min <= self.max {
            (self.min, self.max)
        } else {
            (self.max, self.min)
        }
    }

    pub fn contains(&self, price: i64) -> bool {
        let (lo, hi) = self.bounds();
        lo <= price && price <= hi
    }
}

impl From<(i64, i64)> for PriceRange {
    fn from((min, max): (i64, i64)) -> Self {
        Self { min, max }
    }
}

impl From<PriceRange> for (i64, i64) {
    fn from(range: PriceRange) -> Self {
        (range.min, range.max)
    }
}

/// Six-hour departure windows covering the day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum DepartureBucket {
    EarlyMorning,
    Morning,
    Afternoon,
    Evening,
    /// Any value the client sent that is not a known window. Matches nothing.
    #[serde(other)]
    Unrecognized,
}

impl DepartureBucket {
    pub fn hours(self) -> Option<Range<u32>> {
        match self {
            DepartureBucket::EarlyMorning => Some(0..6),
            DepartureBucket::Morning => Some(6..12),
            DepartureBucket::Afternoon => Some(12..18),
            DepartureBucket::Evening => Some(18..24),
            DepartureBucket::Unrecognized => None,
        }
    }

    pub fn contains_hour(self, hour: u32) -> bool {
        self.hours().is_some_and(|range| range.contains(&hour))
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    PriceLow,
    PriceHigh,
    Duration,
    Departure,
    Arrival,
    Airline,
    /// Unknown or missing key: results keep catalog order.
    #[default]
    #[serde(other)]
    Unsorted,
}
