use std::cmp::Ordering;

use skybook_core::{Flight, SearchQuery, SortKey};

use crate::filter::{any_of, FilterChain};

/// Applies every filter in `query` to `flights`, then orders the survivors by
/// `query.sort_by`.
///
/// The input is never modified. Sorting is stable, so flights with equal keys
/// keep their catalog order.
pub fn search(flights: &[Flight], query: &SearchQuery) -> Vec<Flight> {
    let filters = build_filters(query);
    let mut results = filters.apply(flights);
    sort_flights(&mut results, query.sort_by);

    tracing::debug!(
        catalog = flights.len(),
        filters = filters.len(),
        matched = results.len(),
        sort = ?query.sort_by,
        "Flight search evaluated"
    );

    results
}

/// One predicate per active filter group of the query.
pub fn build_filters(query: &SearchQuery) -> FilterChain<'static> {
    let mut chain = FilterChain::new();

    if let Some(origin) = non_blank(query.origin.as_deref()) {
        let needle = origin.to_lowercase();
        chain.push(move |flight: &Flight| flight.origin.to_lowercase().contains(&needle));
    }

    if let Some(destination) = non_blank(query.destination.as_deref()) {
        let needle = destination.to_lowercase();
        chain.push(move |flight: &Flight| flight.destination.to_lowercase().contains(&needle));
    }

    if let Some(fare_class) = query.fare_class {
        chain.push(move |flight: &Flight| flight.fare_class == fare_class);
    }

    if let Some(range) = query.price_range {
        chain.push(move |flight: &Flight| range.contains(flight.price));
    }

    if !query.airlines.is_empty() {
        let tokens: Vec<String> = query.airlines.iter().map(|a| a.to_lowercase()).collect();
        chain.push(any_of(tokens, |token: &String, flight: &Flight| {
            flight.airline.to_lowercase().contains(token.as_str())
        }));
    }

    if !query.stops.is_empty() {
        let stops = query.stops.clone();
        chain.push(move |flight: &Flight| stops.contains(&flight.stops.to_string()));
    }

    if !query.departure_time.is_empty() {
        chain.push(any_of(query.departure_time.clone(), |bucket, flight: &Flight| {
            bucket.contains_hour(flight.departure_hour())
        }));
    }

    chain
}

/// Stable in-place sort. `SortKey::Unsorted` leaves the order untouched.
pub fn sort_flights(flights: &mut [Flight], key: SortKey) {
    let compare: fn(&Flight, &Flight) -> Ordering = match key {
        SortKey::PriceLow => |a, b| a.price.cmp(&b.price),
        SortKey::PriceHigh => |a, b| b.price.cmp(&a.price),
        SortKey::Duration => |a, b| a.duration.cmp(&b.duration),
        SortKey::Departure => |a, b| a.departure_time.cmp(&b.departure_time),
        SortKey::Arrival => |a, b| a.arrival_time.cmp(&b.arrival_time),
        SortKey::Airline => |a, b| a.airline.to_lowercase().cmp(&b.airline.to_lowercase()),
        SortKey::Unsorted => return,
    };
    flights.sort_by(compare);
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::flight;
    use skybook_core::{DepartureBucket, FareClass, PriceRange};

    fn catalog() -> Vec<Flight> {
        vec![
            flight(1, "IndiGo", 4599, 0, "2024-03-15T06:30:00"),
            flight(2, "Air India", 5250, 0, "2024-03-15T09:15:00"),
            flight(3, "SpiceJet", 3899, 1, "2024-03-15T14:20:00"),
            flight(4, "Vistara", 18500, 0, "2024-03-15T19:45:00"),
            flight(5, "IndiGo", 3299, 2, "2024-03-16T05:10:00"),
            flight(6, "GoAir", 3899, 1, "2024-03-16T11:40:00"),
        ]
    }

    fn ids(flights: &[Flight]) -> Vec<u32> {
        flights.iter().map(|f| f.id).collect()
    }

    #[test]
    fn test_no_filters_returns_catalog_in_order() {
        let flights = catalog();
        let results = search(&flights, &SearchQuery::default());
        assert_eq!(results, flights);
    }

    #[test]
    fn test_price_range_is_inclusive() {
        let flights = catalog();
        let query = SearchQuery {
            price_range: Some(PriceRange::new(3899, 5250)),
            ..Default::default()
        };
        let results = search(&flights, &query);
        assert_eq!(ids(&results), vec![1, 2, 3, 6]);
        assert!(results.iter().all(|f| (3899..=5250).contains(&f.price)));
    }

    #[test]
    fn test_inverted_price_range_swaps_bounds() {
        let flights = catalog();
        let query = SearchQuery {
            price_range: Some(PriceRange::new(5250, 3899)),
            ..Default::default()
        };
        assert_eq!(ids(&search(&flights, &query)), vec![1, 2, 3, 6]);
    }

    #[test]
    fn test_airline_tokens_are_case_insensitive_union() {
        let flights = catalog();
        let query = SearchQuery {
            airlines: vec!["indigo".to_string(), "AIR".to_string()],
            ..Default::default()
        };
        let results = search(&flights, &query);
        // "GoAir" contains "air" as well
        assert_eq!(ids(&results), vec![1, 2, 5, 6]);
        for flight in &results {
            let airline = flight.airline.to_lowercase();
            assert!(airline.contains("indigo") || airline.contains("air"));
        }
    }

    #[test]
    fn test_stop_filter_matches_string_membership() {
        let flights = catalog();
        let query = SearchQuery {
            stops: vec!["1".to_string(), "2".to_string()],
            ..Default::default()
        };
        assert_eq!(ids(&search(&flights, &query)), vec![3, 5, 6]);
    }

    #[test]
    fn test_departure_buckets() {
        let flights = catalog();
        let query = SearchQuery {
            departure_time: vec![DepartureBucket::EarlyMorning, DepartureBucket::Evening],
            ..Default::default()
        };
        assert_eq!(ids(&search(&flights, &query)), vec![4, 5]);

        let unknown = SearchQuery {
            departure_time: vec![DepartureBucket::Unrecognized],
            ..Default::default()
        };
        assert!(search(&flights, &unknown).is_empty());
    }

    #[test]
    fn test_filters_combine_with_and() {
        let flights = catalog();
        let query = SearchQuery {
            origin: Some("DEL".to_string()),
            destination: Some("mum".to_string()),
            fare_class: Some(FareClass::Economy),
            price_range: Some(PriceRange::new(0, 5000)),
            stops: vec!["0".to_string()],
            ..Default::default()
        };
        assert_eq!(ids(&search(&flights, &query)), vec![1]);

        let business = SearchQuery {
            fare_class: Some(FareClass::Business),
            ..Default::default()
        };
        assert!(search(&flights, &business).is_empty());
    }

    #[test]
    fn test_blank_origin_is_ignored() {
        let flights = catalog();
        let query = SearchQuery {
            origin: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(search(&flights, &query).len(), flights.len());
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let flights = catalog();
        let results = search(&flights, &SearchQuery::default().sorted_by(SortKey::PriceLow));
        // 3 and 6 share a price and keep catalog order
        assert_eq!(ids(&results), vec![5, 3, 6, 1, 2, 4]);
    }

    #[test]
    fn test_price_high_reverses_price_low() {
        let flights = catalog();
        let low = search(&flights, &SearchQuery::default().sorted_by(SortKey::PriceLow));
        let high = search(&flights, &SearchQuery::default().sorted_by(SortKey::PriceHigh));

        let low_prices: Vec<i64> = low.iter().map(|f| f.price).collect();
        let mut high_prices: Vec<i64> = high.iter().map(|f| f.price).collect();
        high_prices.reverse();
        assert_eq!(low_prices, high_prices);
        assert_eq!(high.first().map(|f| f.id), Some(4));
    }

    #[test]
    fn test_other_sort_keys() {
        let flights = catalog();
        let by_departure = search(&flights, &SearchQuery::default().sorted_by(SortKey::Departure));
        assert_eq!(ids(&by_departure), vec![1, 2, 3, 4, 5, 6]);

        let by_duration = search(&flights, &SearchQuery::default().sorted_by(SortKey::Duration));
        assert_eq!(ids(&by_duration), vec![1, 2, 3, 4, 5, 6]);

        let by_airline = search(&flights, &SearchQuery::default().sorted_by(SortKey::Airline));
        assert_eq!(ids(&by_airline), vec![2, 6, 1, 5, 3, 4]);
    }

    #[test]
    fn test_search_is_idempotent_and_pure() {
        let flights = catalog();
        let snapshot = flights.clone();
        let query = SearchQuery {
            stops: vec!["1".to_string()],
            sort_by: SortKey::PriceHigh,
            ..Default::default()
        };
        let first = search(&flights, &query);
        let second = search(&flights, &query);
        assert_eq!(first, second);
        assert_eq!(flights, snapshot);
    }

    #[test]
    fn test_end_to_end_two_flight_catalog() {
        let a = flight(1, "IndiGo", 3000, 0, "2024-03-15T06:30:00");
        let b = flight(2, "Air India", 5000, 1, "2024-03-15T09:15:00");
        let flights = vec![a, b];

        let cheap = SearchQuery {
            price_range: Some(PriceRange::new(0, 4000)),
            ..Default::default()
        };
        assert_eq!(ids(&search(&flights, &cheap)), vec![1]);

        let one_stop = SearchQuery {
            stops: vec!["1".to_string()],
            ..Default::default()
        };
        assert_eq!(ids(&search(&flights, &one_stop)), vec![2]);

        let expensive_first = SearchQuery::default().sorted_by(SortKey::PriceHigh);
        assert_eq!(ids(&search(&flights, &expensive_first)), vec![2, 1]);
    }
}
