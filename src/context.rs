//! Catalog context for the desktop app.
//!
//! The single [`CatalogController`] lives in one signal provided by `App`.
//! Every surface reads its frame from that signal and routes every
//! interaction back through it.
//!
//! ## Usage
//!
//! ```ignore
//! let mut controller = use_catalog();
//! let frame = controller.read().frame().clone();
//! controller.write().set_search_term("borrow");
//! ```

use cardcatalog_core::CatalogController;
use dioxus::prelude::*;

pub use crate::{launch_options, LaunchOptions};

/// Hook to access the catalog controller from context.
pub fn use_catalog() -> Signal<CatalogController> {
    use_context::<Signal<CatalogController>>()
}

/// Route a category control click: a value toggles that category, `None`
/// ("All") clears the filter. Both dismiss the drawer.
pub fn apply_selection(mut controller: Signal<CatalogController>, value: Option<String>) {
    match value {
        Some(category) => controller.write().select_category(&category),
        None => controller.write().clear_category(),
    }
}
