//! Nominatim search client.
//!
//! One GET per lookup against the public OpenStreetMap Nominatim instance,
//! with a fixed pause before every request to respect the service's rate
//! limit. No retries: a failed lookup is reported to the caller, which skips
//! that place and moves on.

use crate::coordinate::Coordinate;
use crate::error::{GeoError, Result};
use crate::resolver::Geocoder;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

const SEARCH_URL: &str = "https://nominatim.openstreetmap.org/search";

/// Pause before each request, per the Nominatim usage policy
const REQUEST_DELAY: Duration = Duration::from_secs(1);

#[cfg(not(target_arch = "wasm32"))]
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

#[cfg(not(target_arch = "wasm32"))]
const USER_AGENT: &str = concat!("gpm-map/", env!("CARGO_PKG_VERSION"));

/// One result row of a Nominatim search response.
///
/// The service serializes coordinates as strings.
#[derive(Debug, Deserialize)]
struct SearchHit {
    lat: String,
    lon: String,
}

impl SearchHit {
    fn coordinate(&self) -> Result<Coordinate> {
        let latitude = self
            .lat
            .parse::<f64>()
            .map_err(|_| GeoError::ResponseParse(format!("bad latitude: {}", self.lat)))?;
        let longitude = self
            .lon
            .parse::<f64>()
            .map_err(|_| GeoError::ResponseParse(format!("bad longitude: {}", self.lon)))?;
        Ok(Coordinate::new(latitude, longitude))
    }
}

/// Nominatim-backed [`Geocoder`].
pub struct NominatimClient {
    client: Client,
}

impl NominatimClient {
    /// Build a client.
    ///
    /// Native builds set the caller user agent and a 10-second connect
    /// timeout; in the browser both are owned by the fetch implementation
    /// and cannot be overridden.
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: build_http_client()?,
        })
    }
}

impl Geocoder for NominatimClient {
    async fn locate(&self, place: &str) -> Result<Option<Coordinate>> {
        pause(REQUEST_DELAY).await;

        let response = self
            .client
            .get(SEARCH_URL)
            .query(&[("q", place), ("format", "jsonv2"), ("limit", "1")])
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(GeoError::BadStatus(response.status()));
        }

        let hits: Vec<SearchHit> = response.json().await?;
        match hits.first() {
            Some(hit) => Ok(Some(hit.coordinate()?)),
            None => Ok(None),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http_client() -> Result<Client> {
    Ok(Client::builder()
        .user_agent(USER_AGENT)
        .connect_timeout(CONNECT_TIMEOUT)
        .build()?)
}

#[cfg(target_arch = "wasm32")]
fn build_http_client() -> Result<Client> {
    Ok(Client::new())
}

#[cfg(not(target_arch = "wasm32"))]
async fn pause(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[cfg(target_arch = "wasm32")]
async fn pause(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

#[cfg(test)]
mod tests {
    use super::SearchHit;

    #[test]
    fn test_search_hit_parses_string_coordinates() {
        let hits: Vec<SearchHit> =
            serde_json::from_str(r#"[{"lat": "46.603354", "lon": "1.8883335"}]"#)
                .expect("valid response body");
        let coordinate = hits[0].coordinate().expect("numeric coordinates");
        assert!((coordinate.latitude - 46.603354).abs() < 1e-9);
        assert!((coordinate.longitude - 1.8883335).abs() < 1e-9);
    }

    #[test]
    fn test_empty_response_has_no_hits() {
        let hits: Vec<SearchHit> = serde_json::from_str("[]").expect("valid response body");
        assert!(hits.is_empty());
    }

    #[test]
    fn test_non_numeric_latitude_is_an_error() {
        let hit = SearchHit {
            lat: "forty-six".to_string(),
            lon: "1.88".to_string(),
        };
        assert!(hit.coordinate().is_err());
    }
}
