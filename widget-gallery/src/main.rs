//! Widget Gallery
//!
//! One page exercising every shared GPM building block: plain inputs, file
//! upload, date/time/color pickers, a random-data city map, line/bar/area
//! charts over synthetic series, progress and spinner indicators, and an
//! expandable text panel. Every input echoes its value back as text.
//!
//! All chart data comes from `gpm_data::synth` with fixed seeds, so the page
//! renders identically on every load.

use chrono::{NaiveDate, NaiveTime};
use dioxus::prelude::*;
use dioxus_logger::tracing::Level;
use gloo_timers::future::sleep;
use gpm_chart_ui::components::{ChartContainer, ChartHeader, CsvUploader, Expander, LoadingSpinner, ProgressBar};
use gpm_chart_ui::js_bridge;
use gpm_data::synth::{self, DemoRng};
use gpm_geo::coordinate::Coordinate;
use std::time::Duration;

/// DOM ids D3 renders into.
const GALLERY_MAP_ID: &str = "gallery-map";
const LINE_CHART_ID: &str = "gallery-line-chart";
const BAR_CHART_ID: &str = "gallery-bar-chart";
const AREA_CHART_ID: &str = "gallery-area-chart";

/// Seeds for the synthetic data, fixed so re-renders are stable.
const MAP_SEED: u64 = 0x00C0_FFEE;
const CHART_SEED: u64 = 0x5EED_CAFE;

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    launch(App);
}

#[component]
fn App() -> Element {
    use_effect(|| js_bridge::init_charts());

    rsx! {
        div {
            style: "max-width: 900px; margin: 0 auto; padding: 12px; font-family: system-ui, -apple-system, sans-serif;",

            h1 {
                style: "margin: 0 0 4px 0; font-size: 22px;",
                "Widget Gallery"
            }
            p {
                style: "margin: 0 0 16px 0; color: #666;",
                "A tour of the inputs, indicators, maps and charts the GPM apps are built from."
            }

            InputSection {}
            UploadSection {}
            PickerSection {}
            RandomMapSection {}
            ChartSection {}
            ProgressSection {}
            ExpanderSection {}
        }
    }
}

#[component]
fn InputSection() -> Element {
    let mut text = use_signal(String::new);
    let mut number = use_signal(|| 42.0_f64);
    let mut slider = use_signal(|| 25_i32);
    let mut flavor = use_signal(|| "Vanilla".to_string());

    let text_value = text();
    let number_value = number();
    let doubled = number_value * 2.0;
    let slider_value = slider();
    let flavor_value = flavor();

    rsx! {
        ChartHeader {
            title: "Inputs".to_string(),
            subtitle: "Each input echoes its value back".to_string(),
        }

        div {
            style: "margin: 8px 0;",
            label {
                style: "font-weight: bold;",
                "Text: "
                input {
                    r#type: "text",
                    value: "{text_value}",
                    placeholder: "Type something",
                    oninput: move |evt| text.set(evt.value()),
                }
            }
            p {
                style: "margin: 4px 0; font-size: 13px; color: #555;",
                if text_value.is_empty() {
                    "Nothing typed yet."
                } else {
                    "You wrote: {text_value}"
                }
            }
        }

        div {
            style: "margin: 8px 0;",
            label {
                style: "font-weight: bold;",
                "Number: "
                input {
                    r#type: "number",
                    value: "{number_value}",
                    style: "width: 90px;",
                    onchange: move |evt| {
                        if let Ok(parsed) = evt.value().parse::<f64>() {
                            number.set(parsed);
                        }
                    },
                }
            }
            p {
                style: "margin: 4px 0; font-size: 13px; color: #555;",
                "Twice {number_value} is {doubled}."
            }
        }

        div {
            style: "margin: 8px 0;",
            label {
                style: "font-weight: bold;",
                "Slider: "
                input {
                    r#type: "range",
                    min: "0",
                    max: "100",
                    value: "{slider_value}",
                    oninput: move |evt| {
                        if let Ok(parsed) = evt.value().parse::<i32>() {
                            slider.set(parsed);
                        }
                    },
                }
            }
            p {
                style: "margin: 4px 0; font-size: 13px; color: #555;",
                "Slider value: {slider_value}"
            }
        }

        div {
            style: "margin: 8px 0;",
            label {
                style: "font-weight: bold;",
                "Flavor: "
                select {
                    onchange: move |evt| flavor.set(evt.value()),
                    option { value: "Vanilla", selected: flavor_value == "Vanilla", "Vanilla" }
                    option { value: "Chocolate", selected: flavor_value == "Chocolate", "Chocolate" }
                    option { value: "Strawberry", selected: flavor_value == "Strawberry", "Strawberry" }
                }
            }
            p {
                style: "margin: 4px 0; font-size: 13px; color: #555;",
                "Your favorite flavor is {flavor_value}."
            }
        }
    }
}

#[component]
fn UploadSection() -> Element {
    let mut file_name = use_signal(String::new);
    let mut file_chars = use_signal(|| 0_usize);
    let mut first_line = use_signal(String::new);

    let name_value = file_name();
    let chars_value = file_chars();
    let first_line_value = first_line();

    rsx! {
        ChartHeader {
            title: "File upload".to_string(),
            subtitle: "The file is read in the browser; nothing is sent anywhere".to_string(),
        }
        CsvUploader {
            label: "Upload any CSV".to_string(),
            on_upload: move |(name, contents): (String, String)| {
                file_name.set(name);
                file_chars.set(contents.chars().count());
                first_line.set(contents.lines().next().unwrap_or_default().to_string());
            },
        }
        if !name_value.is_empty() {
            p {
                style: "margin: 4px 0; font-size: 13px; color: #555;",
                "{name_value}: {chars_value} characters; first line: {first_line_value}"
            }
        }
    }
}

#[component]
fn PickerSection() -> Element {
    let mut picked_date = use_signal(|| "1950-07-14".to_string());
    let mut picked_time = use_signal(|| "12:30".to_string());
    let mut picked_color = use_signal(|| "#2196F3".to_string());

    let date_value = picked_date();
    let time_value = picked_time();
    let color_value = picked_color();

    let date_echo = match NaiveDate::parse_from_str(&date_value, "%Y-%m-%d") {
        Ok(date) => date.format("%A, %d %B %Y").to_string(),
        Err(_) => "not a valid date".to_string(),
    };
    let time_echo = NaiveTime::parse_from_str(&time_value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(&time_value, "%H:%M"))
        .map(|time| time.format("%H:%M").to_string())
        .unwrap_or_else(|_| "not a valid time".to_string());

    rsx! {
        ChartHeader {
            title: "Pickers".to_string(),
            subtitle: "Date, time and color".to_string(),
        }

        div {
            style: "margin: 8px 0; display: flex; gap: 16px; align-items: center; flex-wrap: wrap;",
            label {
                style: "font-weight: bold;",
                "Date: "
                input {
                    r#type: "date",
                    value: "{date_value}",
                    onchange: move |evt| picked_date.set(evt.value()),
                }
            }
            label {
                style: "font-weight: bold;",
                "Time: "
                input {
                    r#type: "time",
                    value: "{time_value}",
                    onchange: move |evt| picked_time.set(evt.value()),
                }
            }
            label {
                style: "font-weight: bold;",
                "Color: "
                input {
                    r#type: "color",
                    value: "{color_value}",
                    oninput: move |evt| picked_color.set(evt.value()),
                }
            }
        }
        p {
            style: "margin: 4px 0; font-size: 13px; color: #555;",
            "Picked {date_echo} at {time_echo}, painted in "
            span {
                style: "display: inline-block; width: 12px; height: 12px; border-radius: 2px; background: {color_value}; vertical-align: baseline;",
            }
            " {color_value}."
        }
    }
}

#[component]
fn RandomMapSection() -> Element {
    // Scatter renders once; the seed is fixed so reloads look identical.
    use_effect(|| {
        let mut rng = DemoRng::seeded(MAP_SEED);
        let center = Coordinate::new(37.76, -122.4);
        let points = synth::scatter_around(&mut rng, center, 0.02, 200);

        let data: Vec<serde_json::Value> = points
            .iter()
            .map(|point| {
                serde_json::json!({
                    "lat": point.latitude,
                    "lon": point.longitude,
                })
            })
            .collect();

        let config = serde_json::json!({
            "fit": "points",
            "color": "#E91E63",
        });

        js_bridge::render_point_map(
            GALLERY_MAP_ID,
            &serde_json::to_string(&data).unwrap_or_default(),
            &config.to_string(),
        );
    });

    rsx! {
        ChartHeader {
            title: "Random-data map".to_string(),
            subtitle: "200 synthetic points scattered around San Francisco".to_string(),
        }
        ChartContainer {
            id: GALLERY_MAP_ID.to_string(),
            min_height: 360,
        }
    }
}

#[component]
fn ChartSection() -> Element {
    use_effect(|| {
        let mut rng = DemoRng::seeded(CHART_SEED);

        let walks = synth::multi_series_walk(&mut rng, &["a", "b", "c"], 20);
        let walk_json = series_json(&walks);
        js_bridge::render_line_chart(LINE_CHART_ID, &walk_json, "{}");
        js_bridge::render_area_chart(AREA_CHART_ID, &walk_json, "{}");

        let bins = synth::histogram_bins(&mut rng, 500, 20);
        let bars: Vec<serde_json::Value> = bins
            .iter()
            .enumerate()
            .map(|(index, count)| {
                serde_json::json!({
                    "x": format!("{}", index),
                    "y": count,
                })
            })
            .collect();
        js_bridge::render_bar_chart(
            BAR_CHART_ID,
            &serde_json::to_string(&bars).unwrap_or_default(),
            "{}",
        );
    });

    rsx! {
        ChartHeader {
            title: "Line chart".to_string(),
            subtitle: "Three random walks, 20 steps each".to_string(),
        }
        ChartContainer {
            id: LINE_CHART_ID.to_string(),
            min_height: 330,
        }

        ChartHeader {
            title: "Bar chart".to_string(),
            subtitle: "500 normal draws in 20 buckets".to_string(),
        }
        ChartContainer {
            id: BAR_CHART_ID.to_string(),
            min_height: 330,
        }

        ChartHeader {
            title: "Area chart".to_string(),
            subtitle: "The same walks with the area under each filled".to_string(),
        }
        ChartContainer {
            id: AREA_CHART_ID.to_string(),
            min_height: 330,
        }
    }
}

/// Serialize named walks into the `[{series, points}]` shape the line and
/// area chart scripts expect.
fn series_json(walks: &[(String, Vec<f64>)]) -> String {
    let series: Vec<serde_json::Value> = walks
        .iter()
        .map(|(name, walk)| {
            let points: Vec<serde_json::Value> = walk
                .iter()
                .enumerate()
                .map(|(index, value)| serde_json::json!({"x": index, "y": value}))
                .collect();
            serde_json::json!({"series": name, "points": points})
        })
        .collect();

    serde_json::to_string(&series).unwrap_or_default()
}

#[component]
fn ProgressSection() -> Element {
    let mut fraction = use_signal(|| 0.0_f64);
    let mut running = use_signal(|| false);
    let mut crunching = use_signal(|| false);
    let mut crunched = use_signal(|| false);

    let fraction_value = fraction();
    let running_value = running();
    let crunching_value = crunching();
    let crunched_value = crunched();

    rsx! {
        ChartHeader {
            title: "Progress and spinner".to_string(),
            subtitle: "Purely cosmetic fixed-duration work".to_string(),
        }

        button {
            style: "margin: 4px 8px 4px 0; padding: 6px 12px; border: 1px solid #ccc; border-radius: 4px; background: #fafafa; cursor: pointer;",
            disabled: running_value,
            onclick: move |_| {
                if running_value {
                    return;
                }
                running.set(true);
                spawn(async move {
                    for step in 0..=100 {
                        fraction.set(step as f64 / 100.0);
                        sleep(Duration::from_millis(25)).await;
                    }
                    running.set(false);
                });
            },
            if running_value { "Filling..." } else { "Fill the progress bar" }
        }
        ProgressBar {
            fraction: fraction_value,
            caption: format!("{}%", (fraction_value * 100.0).round()),
        }

        button {
            style: "margin: 12px 8px 4px 0; padding: 6px 12px; border: 1px solid #ccc; border-radius: 4px; background: #fafafa; cursor: pointer;",
            disabled: crunching_value,
            onclick: move |_| {
                if crunching_value {
                    return;
                }
                crunching.set(true);
                crunched.set(false);
                spawn(async move {
                    sleep(Duration::from_secs(2)).await;
                    crunching.set(false);
                    crunched.set(true);
                });
            },
            "Simulate a slow task"
        }
        if crunching_value {
            LoadingSpinner {
                message: "Crunching numbers...".to_string(),
            }
        }
        if crunched_value && !crunching_value {
            p {
                style: "margin: 4px 0; font-size: 13px; color: #2E7D32;",
                "Done!"
            }
        }
    }
}

#[component]
fn ExpanderSection() -> Element {
    rsx! {
        ChartHeader {
            title: "Expander".to_string(),
            subtitle: "Click the summary line to toggle".to_string(),
        }
        Expander {
            summary: "About this gallery".to_string(),
            p {
                style: "margin: 0; font-size: 13px; color: #555;",
                "Every section on this page is built from the shared component \
                 crate: the same uploader, progress bar, spinner and chart \
                 containers the map app uses. Charts and maps are drawn by \
                 D3.js through the JS bridge; the synthetic series behind them \
                 are seeded, so reloading the page reproduces the exact same \
                 pictures."
            }
        }
    }
}
