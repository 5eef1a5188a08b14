//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use gpm_data::table::CountryRecord;
use gpm_geo::coordinate::CoordinateCache;

/// Shared application state for the GPM demo apps.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether the app is busy with initial work
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Informational notices streamed onto the page (one per geocode, etc.)
    pub notices: Signal<Vec<String>>,
    /// Parsed rows of the current upload
    pub records: Signal<Vec<CountryRecord>>,
    /// Coordinates resolved for the current upload
    pub coordinates: Signal<CoordinateCache>,
    /// Whether the geocoding loop is running
    pub geocoding: Signal<bool>,
    /// Lookups finished so far
    pub geocode_done: Signal<usize>,
    /// Distinct names to look up in total
    pub geocode_total: Signal<usize>,
    /// Year shown in the per-year population table
    pub selected_year: Signal<i32>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            loading: Signal::new(false),
            error_msg: Signal::new(None),
            notices: Signal::new(Vec::new()),
            records: Signal::new(Vec::new()),
            coordinates: Signal::new(CoordinateCache::new()),
            geocoding: Signal::new(false),
            geocode_done: Signal::new(0),
            geocode_total: Signal::new(0),
            selected_year: Signal::new(1950),
        }
    }

    /// Append an informational notice to the page log.
    pub fn notify(mut self, message: impl Into<String>) {
        self.notices.write().push(message.into());
    }
}
