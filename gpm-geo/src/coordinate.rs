//! Coordinate pair and the per-run cache keyed by place name.

use serde::Serialize;
use std::collections::BTreeMap;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Mapping from place name to its resolved coordinates.
///
/// Built once per upload and discarded with it. A name maps to at most one
/// coordinate pair; names that failed to resolve have no entry.
pub type CoordinateCache = BTreeMap<String, Coordinate>;
