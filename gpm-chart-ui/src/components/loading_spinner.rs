//! Spinner shown while the app is busy.

use dioxus::prelude::*;

/// Animated spinner with a message next to it.
#[component]
pub fn LoadingSpinner(
    #[props(default = String::from("Loading data..."))] message: String,
) -> Element {
    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 8px; padding: 16px 0; color: #666;",
            style {
                "@keyframes gpm-spin {{ from {{ transform: rotate(0deg); }} to {{ transform: rotate(360deg); }} }}"
            }
            div {
                style: "width: 16px; height: 16px; border: 2px solid #ccc; border-top-color: #2196F3; border-radius: 50%; animation: gpm-spin 0.8s linear infinite;",
            }
            span { "{message}" }
        }
    }
}
