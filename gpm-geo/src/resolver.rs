//! Sequential coordinate-cache construction.
//!
//! Walks a list of place names, looks each one up once, and collects the
//! successes into a [`CoordinateCache`]. Failures are non-fatal: the place is
//! skipped, the observer is told, and the loop continues.

use crate::coordinate::{Coordinate, CoordinateCache};
use crate::error::Result;
use log::warn;

/// A place-name to coordinate lookup.
///
/// The production implementation is
/// [`NominatimClient`](crate::nominatim::NominatimClient); tests substitute
/// scripted stubs.
#[allow(async_fn_in_trait)]
pub trait Geocoder {
    async fn locate(&self, place: &str) -> Result<Option<Coordinate>>;
}

/// Outcome of one lookup, reported to the observer as the loop runs.
#[derive(Debug, Clone, PartialEq)]
pub enum GeocodeEvent {
    /// The service returned coordinates for the place.
    Resolved {
        place: String,
        coordinate: Coordinate,
    },
    /// The service answered but knew no such place.
    Unresolved { place: String },
    /// The lookup itself failed (network, status, parse).
    Failed { place: String, message: String },
}

/// Look up each place once and collect the successes.
///
/// Names already in the cache are never looked up again, so passing a list
/// with duplicates still issues one request per distinct name. The observer
/// sees one event per attempted lookup, in order.
pub async fn build_coordinate_cache<G, F>(
    geocoder: &G,
    places: &[String],
    mut observer: F,
) -> CoordinateCache
where
    G: Geocoder,
    F: FnMut(GeocodeEvent),
{
    let mut cache = CoordinateCache::new();

    for place in places {
        if cache.contains_key(place) {
            continue;
        }

        match geocoder.locate(place).await {
            Ok(Some(coordinate)) => {
                cache.insert(place.clone(), coordinate);
                observer(GeocodeEvent::Resolved {
                    place: place.clone(),
                    coordinate,
                });
            }
            Ok(None) => {
                warn!("No location found for {}", place);
                observer(GeocodeEvent::Unresolved {
                    place: place.clone(),
                });
            }
            Err(e) => {
                warn!("Geocoding failed for {}: {}", place, e);
                observer(GeocodeEvent::Failed {
                    place: place.clone(),
                    message: e.to_string(),
                });
            }
        }
    }

    cache
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeoError;
    use std::cell::RefCell;

    /// Scripted geocoder: records every lookup, resolves places unless they
    /// are listed as unknown or broken.
    struct StubGeocoder {
        calls: RefCell<Vec<String>>,
        unknown: Vec<&'static str>,
        broken: Vec<&'static str>,
    }

    impl StubGeocoder {
        fn resolving_all() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                unknown: Vec::new(),
                broken: Vec::new(),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }
    }

    impl Geocoder for StubGeocoder {
        async fn locate(&self, place: &str) -> Result<Option<Coordinate>> {
            self.calls.borrow_mut().push(place.to_string());
            if self.broken.contains(&place) {
                return Err(GeoError::ResponseParse("scripted failure".to_string()));
            }
            if self.unknown.contains(&place) {
                return Ok(None);
            }
            // Derive a distinct, stable coordinate from the name length.
            let n = place.len() as f64;
            Ok(Some(Coordinate::new(n, -n)))
        }
    }

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_duplicate_names_issue_one_lookup() {
        let geocoder = StubGeocoder::resolving_all();
        let places = names(&["France", "France", "Japan"]);

        let cache = build_coordinate_cache(&geocoder, &places, |_| {}).await;

        assert_eq!(geocoder.call_count(), 2);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache["France"], Coordinate::new(6.0, -6.0));
    }

    #[tokio::test]
    async fn test_failures_skip_the_place_and_continue() {
        let geocoder = StubGeocoder {
            calls: RefCell::new(Vec::new()),
            unknown: vec!["Atlantis"],
            broken: vec!["Elbonia"],
        };
        let places = names(&["France", "Atlantis", "Elbonia", "Japan"]);
        let mut events = Vec::new();

        let cache = build_coordinate_cache(&geocoder, &places, |event| events.push(event)).await;

        assert_eq!(cache.len(), 2);
        assert!(cache.contains_key("France"));
        assert!(cache.contains_key("Japan"));
        assert!(!cache.contains_key("Atlantis"));
        assert!(!cache.contains_key("Elbonia"));

        assert_eq!(events.len(), 4);
        assert!(matches!(&events[1], GeocodeEvent::Unresolved { place } if place == "Atlantis"));
        assert!(matches!(&events[2], GeocodeEvent::Failed { place, .. } if place == "Elbonia"));
    }

    #[tokio::test]
    async fn test_nothing_resolves_yields_empty_cache() {
        let geocoder = StubGeocoder {
            calls: RefCell::new(Vec::new()),
            unknown: vec!["Narnia", "Mordor"],
            broken: Vec::new(),
        };
        let places = names(&["Narnia", "Mordor"]);

        let cache = build_coordinate_cache(&geocoder, &places, |_| {}).await;

        assert!(cache.is_empty());
        assert_eq!(geocoder.call_count(), 2);
    }

    #[tokio::test]
    async fn test_empty_input_makes_no_lookups() {
        let geocoder = StubGeocoder::resolving_all();

        let cache = build_coordinate_cache(&geocoder, &[], |_| {}).await;

        assert!(cache.is_empty());
        assert_eq!(geocoder.call_count(), 0);
    }
}
