//! Desktop category sidebar.

use cardcatalog_core::CategoryControl;
use cardcatalog_ui::CategoryList;
use dioxus::prelude::*;

use crate::context::{apply_selection, use_catalog};

#[component]
pub fn CategorySidebar(controls: Vec<CategoryControl>) -> Element {
    let controller = use_catalog();

    rsx! {
        aside { class: "category-sidebar",
            h2 { class: "sidebar-title", "Categories" }
            CategoryList {
                controls: controls,
                surface: "desktop".to_string(),
                on_select: move |value| apply_selection(controller, value),
            }
        }
    }
}
