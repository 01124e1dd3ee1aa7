//! Mobile category drawer.
//!
//! Mirrors the sidebar and the header search for narrow windows. Closes on
//! its close button, on a click outside the panel, on Escape (handled by
//! the page) and after any category selection.

use cardcatalog_core::CategoryControl;
use cardcatalog_ui::{CategoryList, SearchInput};
use dioxus::prelude::*;

use crate::context::{apply_selection, use_catalog};

/// Slide-in drawer with its own search input and category list
#[component]
pub fn CategoryDrawer(
    /// Whether the drawer is visible
    open: bool,
    /// Same controls the sidebar receives
    controls: Vec<CategoryControl>,
    /// Raw search text shared by every search surface
    search_input: String,
) -> Element {
    let mut controller = use_catalog();

    if !open {
        return rsx! {};
    }

    rsx! {
        div {
            class: "drawer-overlay",
            onclick: move |_| controller.write().close_drawer(),

            div {
                class: "drawer-panel",
                role: "dialog",
                "aria-modal": "true",
                onclick: move |e| e.stop_propagation(),

                div { class: "drawer-header",
                    h2 { class: "sidebar-title", "Categories" }
                    button {
                        class: "drawer-close",
                        "aria-label": "Close categories",
                        onclick: move |_| controller.write().close_drawer(),
                        "\u{00D7}"
                    }
                }

                SearchInput {
                    id: "search-mobile".to_string(),
                    value: search_input,
                    oninput: move |raw: String| controller.write().set_search_term(&raw),
                }

                CategoryList {
                    controls: controls,
                    surface: "mobile".to_string(),
                    on_select: move |value| apply_selection(controller, value),
                }
            }
        }
    }
}
