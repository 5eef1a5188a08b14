//! Country Population Map
//!
//! Upload a CSV with `Entity`, `Year` and a population column, geocode each
//! distinct country via Nominatim, and plot the rows that resolved on a
//! world map.
//!
//! Data flow:
//! 1. `CsvUploader` reads the file into memory (the button next to it loads
//!    the committed sample instead).
//! 2. `gpm_data` parses the rows; the first five are previewed.
//! 3. `gpm_geo` builds the coordinate cache, one lookup per distinct country
//!    with a one-second pause before each request, while per-country notices
//!    stream onto the page.
//! 4. Coordinates are applied back onto the rows; rows without coordinates
//!    are dropped before the map renders.

use dioxus::prelude::*;
use dioxus_logger::tracing::Level;
use gpm_chart_ui::components::{
    ChartContainer, ChartHeader, CsvUploader, ErrorDisplay, ProgressBar, StatusLog,
};
use gpm_chart_ui::js_bridge;
use gpm_chart_ui::state::AppState;
use gpm_data::table::{self, CountryRecord};
use gpm_geo::nominatim::NominatimClient;
use gpm_geo::resolver::{self, GeocodeEvent};

/// Sample data behind the "Load sample data" button.
const SAMPLE_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/population.csv"));
const SAMPLE_LABEL: &str = "sample population.csv";

/// DOM ids D3 renders into.
const MAP_ID: &str = "country-map";
const YEAR_TABLE_ID: &str = "year-table";

/// Rows shown in the upload preview.
const PREVIEW_ROWS: usize = 5;

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);

    // One-time chart script initialization
    use_effect(|| js_bridge::init_charts());

    // Re-render the map and the per-year table whenever results change
    use_effect(move || {
        let records = state.records.read().clone();
        let geocoding = (state.geocoding)();
        let year = (state.selected_year)();

        if geocoding || records.is_empty() {
            return;
        }

        let located = table::located_rows(&records);
        if located.is_empty() {
            js_bridge::destroy_chart(MAP_ID);
            js_bridge::destroy_chart(YEAR_TABLE_ID);
            return;
        }

        render_map(&located);
        render_year_table(&table::rows_for_year(&located, year));
    });

    let geocoding = (state.geocoding)();
    let has_records = !state.records.read().is_empty();
    let done = (state.geocode_done)();
    let total = (state.geocode_total)();
    let fraction = if total == 0 {
        0.0
    } else {
        done as f64 / total as f64
    };

    rsx! {
        div {
            style: "max-width: 1100px; margin: 0 auto; padding: 12px; font-family: system-ui, -apple-system, sans-serif;",

            h1 {
                style: "margin: 0 0 4px 0; font-size: 22px;",
                "Country Population Map"
            }
            p {
                style: "margin: 0 0 12px 0; color: #666;",
                "Load a CSV file containing country names and population data; the app geocodes the countries and displays them on a map."
            }

            CsvUploader {
                label: "Upload a CSV file with country and population data".to_string(),
                on_upload: move |(name, contents): (String, String)| ingest(state, name, contents),
            }
            button {
                style: "margin: 4px 0 12px 0; padding: 6px 12px; border: 1px solid #ccc; border-radius: 4px; background: #fafafa; cursor: pointer;",
                onclick: move |_| ingest(state, SAMPLE_LABEL.to_string(), SAMPLE_CSV.to_string()),
                "Load sample data"
            }

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            if geocoding {
                ProgressBar {
                    fraction: fraction,
                    caption: format!("Geocoding countries... {}/{}", done, total),
                }
            }

            StatusLog {}

            if has_records {
                PreviewSection {}
                CoordinateSection {}
            }

            if has_records && !geocoding {
                MapSection {}
                YearSection {}
            }
        }
    }
}

/// Parse a new upload, reset the page, and kick off geocoding.
fn ingest(mut state: AppState, label: String, contents: String) {
    state.error_msg.set(None);
    state.notices.set(Vec::new());
    state.records.set(Vec::new());
    state.coordinates.set(Default::default());
    js_bridge::destroy_chart(MAP_ID);
    js_bridge::destroy_chart(YEAR_TABLE_ID);

    match table::parse_population_csv(&contents) {
        Ok(records) if records.is_empty() => {
            state.error_msg.set(Some(format!("{}: no data rows found", label)));
        }
        Ok(records) => {
            state.notify(format!("Loaded {} rows from {}.", records.len(), label));
            state.records.set(records);
            start_geocoding(state);
        }
        Err(e) => {
            log::error!("Failed to parse {}: {}", label, e);
            state.error_msg.set(Some(format!("Failed to parse {}: {}", label, e)));
        }
    }
}

/// Geocode the distinct countries of the current upload, then join the
/// resolved coordinates back onto the rows.
fn start_geocoding(mut state: AppState) {
    spawn(async move {
        let mut records = state.records.read().clone();
        let places = table::distinct_entities(&records);

        state.geocode_total.set(places.len());
        state.geocode_done.set(0);
        state.geocoding.set(true);

        let client = match NominatimClient::new() {
            Ok(client) => client,
            Err(e) => {
                state
                    .error_msg
                    .set(Some(format!("Failed to build geocoding client: {}", e)));
                state.geocoding.set(false);
                return;
            }
        };

        let cache = resolver::build_coordinate_cache(&client, &places, |event| {
            match &event {
                GeocodeEvent::Resolved { place, coordinate } => state.notify(format!(
                    "{}: ({:.4}, {:.4})",
                    place, coordinate.latitude, coordinate.longitude
                )),
                GeocodeEvent::Unresolved { place } => {
                    state.notify(format!("Geocoding failed for {}: no location found.", place))
                }
                GeocodeEvent::Failed { place, message } => {
                    state.notify(format!("Error geocoding {}: {}", place, message))
                }
            }
            let done = *state.geocode_done.peek() + 1;
            state.geocode_done.set(done);
        })
        .await;

        table::apply_coordinates(&mut records, &cache);
        let located = table::located_rows(&records).len();
        state.notify(format!("Number of valid rows after filtering: {}", located));

        state.coordinates.set(cache);
        state.records.set(records);
        state.geocoding.set(false);
    });
}

/// Serialize the located rows and hand them to the D3 world map.
fn render_map(located: &[CountryRecord]) {
    let points: Vec<serde_json::Value> = located
        .iter()
        .filter_map(|record| {
            record.coordinate.map(|c| {
                serde_json::json!({
                    "lat": c.latitude,
                    "lon": c.longitude,
                    "label": record.entity,
                    "value": record.population,
                })
            })
        })
        .collect();

    let data_json = serde_json::to_string(&points).unwrap_or_default();
    let config_json = serde_json::json!({
        "fit": "world",
        "maxRadius": 18,
    })
    .to_string();

    js_bridge::render_point_map(MAP_ID, &data_json, &config_json);
}

/// Render the per-year population table through the D3 table helper.
fn render_year_table(rows: &[CountryRecord]) {
    let data: Vec<serde_json::Value> = rows
        .iter()
        .map(|record| {
            serde_json::json!({
                "entity": record.entity,
                "code": record.code.clone().unwrap_or_default(),
                "population": record.population,
            })
        })
        .collect();

    let data_json = serde_json::to_string(&data).unwrap_or_default();
    let config_json = serde_json::json!({
        "columns": [
            {"key": "entity", "label": "Entity"},
            {"key": "code", "label": "Code"},
            {"key": "population", "label": "Population"},
        ],
    })
    .to_string();

    js_bridge::render_data_table(YEAR_TABLE_ID, &data_json, &config_json);
}

/// "Uploaded data" preview, mirroring a head-of-table dump.
#[component]
fn PreviewSection() -> Element {
    let state = use_context::<AppState>();
    let records = state.records.read().clone();
    let preview: Vec<CountryRecord> = records.iter().take(PREVIEW_ROWS).cloned().collect();

    rsx! {
        ChartHeader {
            title: "Uploaded data".to_string(),
            subtitle: format!("First {} of {} rows", preview.len(), records.len()),
        }
        table {
            style: "border-collapse: collapse; font-size: 13px;",
            thead {
                tr {
                    th { style: "text-align: left; border-bottom: 2px solid #ccc; padding: 4px 8px;", "Entity" }
                    th { style: "text-align: left; border-bottom: 2px solid #ccc; padding: 4px 8px;", "Code" }
                    th { style: "text-align: left; border-bottom: 2px solid #ccc; padding: 4px 8px;", "Year" }
                    th { style: "text-align: left; border-bottom: 2px solid #ccc; padding: 4px 8px;", "Population" }
                }
            }
            tbody {
                for record in preview.iter() {
                    tr {
                        td { style: "border-bottom: 1px solid #eee; padding: 4px 8px;", "{record.entity}" }
                        td { style: "border-bottom: 1px solid #eee; padding: 4px 8px;",
                            {record.code.clone().unwrap_or_default()}
                        }
                        td { style: "border-bottom: 1px solid #eee; padding: 4px 8px;", "{record.year}" }
                        td { style: "border-bottom: 1px solid #eee; padding: 4px 8px;", "{record.population}" }
                    }
                }
            }
        }
    }
}

/// The resolved coordinate pairs, one line per country.
#[component]
fn CoordinateSection() -> Element {
    let state = use_context::<AppState>();
    let coordinates = state.coordinates.read().clone();

    rsx! {
        ChartHeader {
            title: "Geocoding results".to_string(),
            subtitle: "Latitude and longitude per resolved country".to_string(),
        }
        if coordinates.is_empty() {
            p {
                style: "color: #666; font-size: 13px;",
                "No countries have been geocoded yet."
            }
        } else {
            table {
                style: "border-collapse: collapse; font-size: 13px;",
                tbody {
                    for (name, coordinate) in coordinates.iter() {
                        tr {
                            td { style: "border-bottom: 1px solid #eee; padding: 2px 8px;", "{name}" }
                            td { style: "border-bottom: 1px solid #eee; padding: 2px 8px;",
                                "({coordinate.latitude:.4}, {coordinate.longitude:.4})"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// World map of the rows that geocoded, or the "no valid rows" notice.
#[component]
fn MapSection() -> Element {
    let state = use_context::<AppState>();
    let records = state.records.read().clone();
    let located_count = table::located_rows(&records).len();

    rsx! {
        if located_count > 0 {
            ChartHeader {
                title: "Map of countries with population data".to_string(),
                subtitle: format!("{} located rows; circle area scales with population", located_count),
            }
            ChartContainer {
                id: MAP_ID.to_string(),
                min_height: 480,
            }
        } else {
            p {
                style: "color: #666; margin: 16px 0;",
                "No valid country names found or no coordinates found for the countries."
            }
        }
    }
}

/// Year filter plus the population table for that year.
#[component]
fn YearSection() -> Element {
    let mut state = use_context::<AppState>();
    let year = (state.selected_year)();

    rsx! {
        ChartHeader {
            title: format!("Population data for year {}", year),
            subtitle: "Only rows whose country geocoded are listed".to_string(),
        }
        label {
            style: "font-weight: bold;",
            "Year: "
            input {
                r#type: "number",
                value: "{year}",
                style: "width: 80px;",
                onchange: move |evt: Event<FormData>| {
                    if let Ok(parsed) = evt.value().parse::<i32>() {
                        state.selected_year.set(parsed);
                    }
                },
            }
        }
        ChartContainer {
            id: YEAR_TABLE_ID.to_string(),
            min_height: 200,
        }
    }
}
