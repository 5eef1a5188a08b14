//! Expandable text panel.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ExpanderProps {
    /// Always-visible summary line
    pub summary: String,
    /// Content revealed when expanded
    pub children: Element,
}

/// Collapsible panel built on the native details/summary elements.
#[component]
pub fn Expander(props: ExpanderProps) -> Element {
    rsx! {
        details {
            style: "margin: 8px 0; border: 1px solid #e0e0e0; border-radius: 4px; padding: 8px 12px;",
            summary {
                style: "cursor: pointer; font-weight: bold;",
                "{props.summary}"
            }
            div {
                style: "padding: 8px 4px 0 4px;",
                {props.children}
            }
        }
    }
}
