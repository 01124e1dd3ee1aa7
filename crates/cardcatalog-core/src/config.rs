//! Catalog source configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CatalogResult;
use crate::render::HighlightRule;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_CARDS_PATH: &str = "/api/cards";
pub const DEFAULT_CATEGORIES_PATH: &str = "/api/categories";
pub const DEFAULT_FALLBACK_CARDS_PATH: &str = "/static/cards.json";

/// Where the catalog comes from and how it is displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Origin the resource paths are resolved against (HTTP source only)
    pub base_url: String,
    pub cards_path: String,
    pub categories_path: String,
    /// Static copy of the cards, used only when `cards_path` fails
    pub fallback_cards_path: String,
    pub highlight: HighlightRule,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            cards_path: DEFAULT_CARDS_PATH.to_string(),
            categories_path: DEFAULT_CATEGORIES_PATH.to_string(),
            fallback_cards_path: DEFAULT_FALLBACK_CARDS_PATH.to_string(),
            highlight: HighlightRule::default(),
        }
    }
}

impl CatalogConfig {
    /// Read a JSON config file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> CatalogResult<Self> {
        let bytes = std::fs::read(path)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_highlight(mut self, highlight: HighlightRule) -> Self {
        self.highlight = highlight;
        self
    }
}
