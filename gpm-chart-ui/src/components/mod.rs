//! Reusable Dioxus RSX components for the GPM demo apps.

mod chart_container;
mod chart_header;
mod csv_uploader;
mod error_display;
mod expander;
mod loading_spinner;
mod progress_bar;
mod status_log;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use csv_uploader::CsvUploader;
pub use error_display::ErrorDisplay;
pub use expander::Expander;
pub use loading_spinner::LoadingSpinner;
pub use progress_bar::ProgressBar;
pub use status_log::StatusLog;
