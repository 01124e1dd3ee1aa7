//! Catalog Header
//!
//! Title, desktop search input and the drawer toggle.

use cardcatalog_ui::SearchInput;
use dioxus::prelude::*;

use crate::context::use_catalog;

/// Top bar of the catalog page.
#[component]
pub fn CatalogHeader(
    /// Raw search text shared by every search surface
    search_input: String,
    /// Whether the mobile drawer is currently open
    drawer_open: bool,
    /// Inputs stay disabled until the catalog has loaded
    ready: bool,
) -> Element {
    let mut controller = use_catalog();

    rsx! {
        header { class: "catalog-header",
            button {
                class: "drawer-toggle",
                "aria-label": "Categories",
                "aria-expanded": if drawer_open { "true" } else { "false" },
                disabled: !ready,
                onclick: move |_| controller.write().toggle_drawer(),
                "\u{2630}"
            }
            h1 { class: "catalog-title", "Card Catalog" }
            SearchInput {
                id: "search-desktop".to_string(),
                value: search_input,
                disabled: !ready,
                oninput: move |raw: String| controller.write().set_search_term(&raw),
            }
        }
    }
}
