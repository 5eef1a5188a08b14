//! File input that reads an uploaded CSV into memory.

use dioxus::prelude::*;

/// File uploader for CSV data.
///
/// Reads each chosen file to a string and hands `(file name, contents)` to
/// the caller. Files the browser cannot read are logged and skipped.
#[component]
pub fn CsvUploader(
    #[props(default = String::from("Upload a CSV file"))] label: String,
    on_upload: EventHandler<(String, String)>,
) -> Element {
    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 8px; align-items: center;",
            label {
                style: "font-weight: bold;",
                "{label}: "
            }
            input {
                r#type: "file",
                accept: ".csv",
                onchange: move |evt: Event<FormData>| async move {
                    for file in evt.files() {
                        let name = file.name();
                        match file.read_string().await {
                            Ok(contents) => on_upload.call((name, contents)),
                            Err(e) => log::warn!("Failed to read {}: {}", name, e),
                        }
                    }
                },
            }
        }
    }
}
