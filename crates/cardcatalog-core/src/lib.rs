//! Card Catalog Core Library
//!
//! Client-side state and render engine for a searchable catalog of
//! question/answer cards.
//!
//! ## Overview
//!
//! Raw records are fetched from a remote API (with a static-file fallback),
//! normalized into [`Card`]s, and held by a single [`CatalogController`].
//! Every user action re-runs the pure filter and rebuilds a [`RenderFrame`]
//! from scratch, which all registered views project onto their own surface.
//!
//! ## Data flow
//!
//! ```text
//! loader ──► card / category ──► CatalogController ──► filter ──► render ──► views
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use cardcatalog_core::{load_catalog, CatalogConfig, CatalogController, HttpFetcher};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = CatalogConfig::default();
//!     let fetcher = Arc::new(HttpFetcher::new(&config.base_url)?);
//!
//!     let mut controller = CatalogController::new(config.highlight);
//!     controller.install(load_catalog(fetcher, &config).await?);
//!     controller.set_search_term("Borrow");
//!
//!     println!("{}", controller.frame().count_readout());
//!     Ok(())
//! }
//! ```

pub mod card;
pub mod category;
pub mod config;
pub mod error;
pub mod filter;
pub mod loader;
pub mod logging;
pub mod render;
pub mod state;

// Re-exports
pub use card::{normalize_cards, Card};
pub use category::{dedupe_sort, derive_from_cards, display_label, UNCATEGORIZED};
pub use config::CatalogConfig;
pub use error::{CatalogError, CatalogResult};
pub use filter::{filter_cards, normalize_search};
pub use loader::{
    fetcher_from, load_catalog, Catalog, CardsOrigin, CategoriesOrigin, DirFetcher, HttpFetcher,
    ResourceFetcher,
};
pub use render::{
    escape_html, format_answer, render, AnswerBlock, BootStatus, CategoryControl,
    HighlightRule, RenderFrame, RenderedCard, LOAD_FAILURE_TEXT,
};
pub use state::{CatalogController, CatalogView, DrawerState, UiState};
