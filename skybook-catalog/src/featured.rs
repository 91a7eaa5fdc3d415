use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use skybook_core::{DepartureBucket, FareClass, Flight, PriceRange, SearchQuery, SortKey};

use crate::search::search;

/// Number of cards shown in the featured strip.
pub const FEATURED_LIMIT: usize = 6;

/// Fares strictly below this count as "cheap".
pub const CHEAP_FARE_CEILING: i64 = 4000;

/// Single-choice presets offered above the featured flights.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum QuickFilter {
    #[default]
    All,
    Economy,
    Business,
    NonStop,
    Morning,
    Cheap,
}

impl QuickFilter {
    pub fn to_query(self) -> SearchQuery {
        let mut query = SearchQuery::default();
        match self {
            QuickFilter::All => {}
            QuickFilter::Economy => query.fare_class = Some(FareClass::Economy),
            QuickFilter::Business => query.fare_class = Some(FareClass::Business),
            QuickFilter::NonStop => query.stops = vec!["0".to_string()],
            QuickFilter::Morning => query.departure_time = vec![DepartureBucket::Morning],
            QuickFilter::Cheap => {
                query.price_range = Some(PriceRange::new(0, CHEAP_FARE_CEILING - 1))
            }
        }
        query
    }
}

/// First `limit` flights matching the preset, in `sort` order.
pub fn featured_flights(
    flights: &[Flight],
    filter: QuickFilter,
    sort: SortKey,
    limit: usize,
) -> Vec<Flight> {
    let mut results = search(flights, &filter.to_query().sorted_by(sort));
    results.truncate(limit);
    results
}

/// Lowest fare on each origin-destination pair, in order of first appearance.
pub fn cheapest_per_route(flights: &[Flight]) -> Vec<Flight> {
    let mut order: Vec<String> = Vec::new();
    let mut best: HashMap<String, &Flight> = HashMap::new();

    for flight in flights {
        let route = flight.route();
        let replace = match best.get(&route) {
            Some(current) => flight.price < current.price,
            None => {
                order.push(route.clone());
                true
            }
        };
        if replace {
            best.insert(route, flight);
        }
    }

    order
        .iter()
        .filter_map(|route| best.get(route).map(|f| (*f).clone()))
        .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total_flights: usize,
    pub airlines: usize,
    /// Distinct departure cities
    pub origins: usize,
    pub lowest_price: Option<i64>,
}

impl CatalogStats {
    pub fn from_flights(flights: &[Flight]) -> Self {
        let airlines: HashSet<&str> = flights.iter().map(|f| f.airline.as_str()).collect();
        let origins: HashSet<&str> = flights.iter().map(|f| f.origin.as_str()).collect();

        Self {
            total_flights: flights.len(),
            airlines: airlines.len(),
            origins: origins.len(),
            lowest_price: flights.iter().map(|f| f.price).min(),
        }
    }
}
