//! Informational notice stream.

use crate::state::AppState;
use dioxus::prelude::*;

/// Renders the page's informational notices in order, newest last.
///
/// The map app streams one line per geocoded country through this, the way
/// a console would.
#[component]
pub fn StatusLog() -> Element {
    let state = use_context::<AppState>();
    let notices = state.notices.read().clone();

    rsx! {
        if !notices.is_empty() {
            div {
                style: "font-size: 12px; color: #555; margin: 8px 0; max-height: 180px; overflow-y: auto; border-left: 3px solid #e0e0e0; padding-left: 8px;",
                for notice in notices.iter() {
                    p {
                        style: "margin: 2px 0;",
                        "{notice}"
                    }
                }
            }
        }
    }
}
