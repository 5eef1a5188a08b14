//! Horizontal progress bar.

use dioxus::prelude::*;

/// Props for ProgressBar
#[derive(Props, Clone, PartialEq)]
pub struct ProgressBarProps {
    /// Completed fraction; values outside 0..=1 are clamped
    pub fraction: f64,
    /// Optional caption above the bar
    #[props(default = String::new())]
    pub caption: String,
}

/// A determinate progress bar driven by a 0..=1 fraction.
#[component]
pub fn ProgressBar(props: ProgressBarProps) -> Element {
    let percent = (props.fraction.clamp(0.0, 1.0) * 100.0).round();

    rsx! {
        div {
            style: "margin: 8px 0;",
            if !props.caption.is_empty() {
                p {
                    style: "margin: 0 0 4px 0; font-size: 12px; color: #555;",
                    "{props.caption}"
                }
            }
            div {
                style: "background: #eee; border-radius: 4px; height: 10px; overflow: hidden;",
                div {
                    style: "background: #2196F3; height: 100%; width: {percent}%; transition: width 0.1s linear;",
                }
            }
        }
    }
}
