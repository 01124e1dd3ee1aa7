//! Status Components
//!
//! Count readout plus the indicators that can replace the card list.

use cardcatalog_core::render::EMPTY_STATE_TEXT;
use cardcatalog_core::LOAD_FAILURE_TEXT;
use dioxus::prelude::*;

/// `"<shown> / <total> cards"`
#[component]
pub fn CountReadout(text: String) -> Element {
    rsx! {
        p { class: "card-count", "aria-live": "polite", "{text}" }
    }
}

/// Shown instead of the card list when the filters match nothing
#[component]
pub fn EmptyState(visible: bool) -> Element {
    rsx! {
        p {
            class: "empty-state",
            hidden: !visible,
            "{EMPTY_STATE_TEXT}"
        }
    }
}

/// Terminal indicator after a failed boot
#[component]
pub fn LoadFailure() -> Element {
    rsx! {
        p { class: "load-failure", role: "alert", "{LOAD_FAILURE_TEXT}" }
    }
}

/// Shown until both boot fetches have settled
#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        p { class: "loading", "Loading\u{2026}" }
    }
}
