//! Catalog page - the single screen of the app.
//!
//! Desktop layout shows the category sidebar next to the cards; narrow
//! windows hide the sidebar and offer the same controls in a drawer.

use cardcatalog_core::BootStatus;
use dioxus::prelude::*;

use crate::components::{CardList, CatalogHeader, CategoryDrawer, CategorySidebar};
use crate::context::use_catalog;

/// Catalog page component.
#[component]
pub fn Catalog() -> Element {
    let mut controller = use_catalog();
    let frame = controller.read().frame().clone();
    let ready = frame.status == BootStatus::Ready;

    // Escape dismisses the drawer from anywhere on the page
    let on_keydown = move |e: KeyboardEvent| {
        if e.key() == Key::Escape {
            controller.write().close_drawer();
        }
    };

    rsx! {
        div {
            class: "catalog-shell",
            tabindex: "0",
            onkeydown: on_keydown,

            CatalogHeader {
                search_input: frame.search_input.clone(),
                drawer_open: frame.drawer_open,
                ready: ready,
            }

            div { class: "catalog-body",
                if ready {
                    CategorySidebar { controls: frame.categories.clone() }
                }
                main { class: "catalog-main",
                    CardList { frame: frame.clone() }
                }
            }

            CategoryDrawer {
                open: frame.drawer_open,
                controls: frame.categories.clone(),
                search_input: frame.search_input.clone(),
            }
        }
    }
}
