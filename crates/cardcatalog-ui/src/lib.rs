//! Card Catalog UI Components
//!
//! Dioxus components that project a [`cardcatalog_core::RenderFrame`] onto
//! the screen. None of them own catalog state: every value comes in through
//! props and every interaction goes out through an event handler, so the
//! same component can appear on several surfaces (desktop sidebar, mobile
//! drawer) and always show the same thing.

pub mod components;

pub use components::*;
