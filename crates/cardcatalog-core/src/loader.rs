//! Data Loader
//!
//! Boots the catalog from two independent resources fetched concurrently:
//!
//! ```text
//!            ┌── cards ──────► primary ──(fail)──► static fallback ──(fail)──► []
//! spawn ─────┤
//!            └── categories ─► primary ──(fail)──► derived from settled cards
//!                      │
//!                  join both ──► Catalog
//! ```
//!
//! Each side recovers on its own. Only a failure of the join itself (a
//! spawned task panicking or being cancelled) is reported to the caller.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures::future::BoxFuture;
use reqwest::header::ACCEPT;
use reqwest::{Client, Url};
use serde_json::Value;

use crate::card::{normalize_cards, Card};
use crate::category::{categories_from_json, derive_from_cards};
use crate::config::CatalogConfig;
use crate::error::{CatalogError, CatalogResult};

/// Source of raw JSON resources, addressed by path (e.g. `/api/cards`).
pub trait ResourceFetcher: Send + Sync {
    fn fetch_json<'a>(&'a self, path: &'a str) -> BoxFuture<'a, CatalogResult<Value>>;
}

/// Fetches resources from an HTTP origin.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    base: Url,
}

impl HttpFetcher {
    pub fn new(base_url: &str) -> CatalogResult<Self> {
        let base = Url::parse(base_url)
            .map_err(|e| CatalogError::InvalidUrl(format!("{base_url}: {e}")))?;
        let client = Client::builder()
            .user_agent(concat!("cardcatalog/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }
}

impl ResourceFetcher for HttpFetcher {
    fn fetch_json<'a>(&'a self, path: &'a str) -> BoxFuture<'a, CatalogResult<Value>> {
        Box::pin(async move {
            let url = self
                .base
                .join(path)
                .map_err(|e| CatalogError::InvalidUrl(format!("{path}: {e}")))?;

            let response = self
                .client
                .get(url.clone())
                .header(ACCEPT, "application/json")
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                return Err(CatalogError::Status {
                    status: status.as_u16(),
                    url: url.to_string(),
                });
            }

            let bytes = response.bytes().await?;
            Ok(serde_json::from_slice(&bytes)?)
        })
    }
}

/// Serves resources from a local directory laid out like the web root.
///
/// `/api/cards` resolves to `<root>/api/cards.json`; paths that already
/// carry an extension (`/static/cards.json`) are used as-is.
#[derive(Debug, Clone)]
pub struct DirFetcher {
    root: PathBuf,
}

impl DirFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn resolve(&self, path: &str) -> PathBuf {
        let mut resolved = self.root.join(path.trim_start_matches('/'));
        if resolved.extension().is_none() {
            resolved.set_extension("json");
        }
        resolved
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ResourceFetcher for DirFetcher {
    fn fetch_json<'a>(&'a self, path: &'a str) -> BoxFuture<'a, CatalogResult<Value>> {
        Box::pin(async move {
            let bytes = tokio::fs::read(self.resolve(path)).await?;
            Ok(serde_json::from_slice(&bytes)?)
        })
    }
}

/// Pick the fetcher for a launch: a local web root when given, HTTP otherwise.
pub fn fetcher_from(root: Option<&Path>, base_url: &str) -> CatalogResult<Arc<dyn ResourceFetcher>> {
    match root {
        Some(root) => Ok(Arc::new(DirFetcher::new(root))),
        None => Ok(Arc::new(HttpFetcher::new(base_url)?)),
    }
}

/// Which path produced the cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardsOrigin {
    Primary,
    Fallback,
    Empty,
}

/// Which path produced the categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoriesOrigin {
    Primary,
    Derived,
}

/// The fully settled result of the boot sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub cards: Vec<Card>,
    pub categories: Vec<String>,
    pub cards_origin: CardsOrigin,
    pub categories_origin: CategoriesOrigin,
}

/// Fetch cards and categories in parallel and join them.
///
/// Per-resource failures are absorbed (fallback, empty set, or derived
/// categories). The only error returned is [`CatalogError::Orchestration`].
pub async fn load_catalog(
    fetcher: Arc<dyn ResourceFetcher>,
    config: &CatalogConfig,
) -> CatalogResult<Catalog> {
    let cards_task = tokio::spawn(load_cards(
        Arc::clone(&fetcher),
        config.cards_path.clone(),
        config.fallback_cards_path.clone(),
    ));
    let categories_task = tokio::spawn(load_categories(
        Arc::clone(&fetcher),
        config.categories_path.clone(),
    ));

    let (cards, categories) = tokio::join!(cards_task, categories_task);

    let (cards, cards_origin) = cards.map_err(|e| {
        tracing::error!("Card loading task failed: {}", e);
        CatalogError::Orchestration(e.to_string())
    })?;
    let categories = categories.map_err(|e| {
        tracing::error!("Category loading task failed: {}", e);
        CatalogError::Orchestration(e.to_string())
    })?;

    let (categories, categories_origin) = match categories {
        Ok(categories) => (categories, CategoriesOrigin::Primary),
        Err(e) => {
            tracing::warn!("Categories unavailable, deriving from cards: {}", e);
            (derive_from_cards(&cards), CategoriesOrigin::Derived)
        }
    };

    tracing::info!(
        cards = cards.len(),
        categories = categories.len(),
        ?cards_origin,
        ?categories_origin,
        "Catalog loaded"
    );

    Ok(Catalog {
        cards,
        categories,
        cards_origin,
        categories_origin,
    })
}

async fn load_cards(
    fetcher: Arc<dyn ResourceFetcher>,
    primary: String,
    fallback: String,
) -> (Vec<Card>, CardsOrigin) {
    match fetcher.fetch_json(&primary).await {
        Ok(payload) => return (normalize_cards(&payload), CardsOrigin::Primary),
        Err(e) => tracing::warn!("Failed to fetch {}: {}", primary, e),
    }

    match fetcher.fetch_json(&fallback).await {
        Ok(payload) => (normalize_cards(&payload), CardsOrigin::Fallback),
        Err(e) => {
            tracing::warn!("Failed to fetch fallback {}: {}", fallback, e);
            (Vec::new(), CardsOrigin::Empty)
        }
    }
}

async fn load_categories(
    fetcher: Arc<dyn ResourceFetcher>,
    path: String,
) -> CatalogResult<Vec<String>> {
    let payload = fetcher.fetch_json(&path).await?;
    categories_from_json(&payload)
}
