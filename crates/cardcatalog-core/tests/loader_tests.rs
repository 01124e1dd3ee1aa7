//! Boot sequence tests
//!
//! Drive `load_catalog` with in-memory, on-disk and HTTP fetchers to verify
//! the independent fallback paths of the two resources.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use cardcatalog_core::{
    load_catalog, CardsOrigin, CatalogConfig, CatalogController, CatalogError, CatalogResult,
    CategoriesOrigin, DirFetcher, HttpFetcher, ResourceFetcher,
};
use futures::future::BoxFuture;
use serde_json::{json, Value};
use tempfile::TempDir;
use tokio::sync::Barrier;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Test Utilities
// ============================================================================

/// Serves a fixed set of resources; everything else is a 404.
#[derive(Default)]
struct MemoryFetcher {
    resources: HashMap<String, Value>,
    calls: Mutex<Vec<String>>,
}

impl MemoryFetcher {
    fn with(mut self, path: &str, payload: Value) -> Self {
        self.resources.insert(path.to_string(), payload);
        self
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl ResourceFetcher for MemoryFetcher {
    fn fetch_json<'a>(&'a self, path: &'a str) -> BoxFuture<'a, CatalogResult<Value>> {
        Box::pin(async move {
            self.calls.lock().unwrap().push(path.to_string());
            self.resources
                .get(path)
                .cloned()
                .ok_or_else(|| CatalogError::Status {
                    status: 404,
                    url: path.to_string(),
                })
        })
    }
}

/// Blocks both primary requests until the other one is in flight too.
struct RendezvousFetcher {
    barrier: Barrier,
}

impl ResourceFetcher for RendezvousFetcher {
    fn fetch_json<'a>(&'a self, path: &'a str) -> BoxFuture<'a, CatalogResult<Value>> {
        Box::pin(async move {
            self.barrier.wait().await;
            match path {
                "/api/cards" => Ok(json!([{"question": "Q", "category": "C"}])),
                _ => Ok(json!(["C"])),
            }
        })
    }
}

/// Panics inside the spawned task, breaking the join itself.
struct PanickingFetcher;

impl ResourceFetcher for PanickingFetcher {
    fn fetch_json<'a>(&'a self, _path: &'a str) -> BoxFuture<'a, CatalogResult<Value>> {
        Box::pin(async move { explode() })
    }
}

fn explode() -> CatalogResult<Value> {
    panic!("fetcher exploded")
}

// ============================================================================
// Happy Path
// ============================================================================

#[tokio::test]
async fn test_both_primaries_succeed() {
    let fetcher = Arc::new(
        MemoryFetcher::default()
            .with(
                "/api/cards",
                json!([
                    {"question": "What is Send?", "answer": "A marker trait", "category": "Concurrency"},
                    {"q": "What is Box?", "a": "A heap pointer", "category": "Memory", "tags": ["heap"]}
                ]),
            )
            .with("/api/categories", json!(["Memory", "concurrency", " Memory "])),
    );

    let catalog = load_catalog(fetcher.clone(), &CatalogConfig::default())
        .await
        .unwrap();

    assert_eq!(catalog.cards.len(), 2);
    assert_eq!(catalog.cards[1].question, "What is Box?");
    assert_eq!(catalog.categories, vec!["concurrency", "Memory"]);
    assert_eq!(catalog.cards_origin, CardsOrigin::Primary);
    assert_eq!(catalog.categories_origin, CategoriesOrigin::Primary);
    assert!(!fetcher.calls().contains(&"/static/cards.json".to_string()));
}

#[tokio::test]
async fn test_requests_run_concurrently() {
    let fetcher = Arc::new(RendezvousFetcher {
        barrier: Barrier::new(2),
    });

    let catalog = tokio::time::timeout(
        Duration::from_secs(5),
        load_catalog(fetcher, &CatalogConfig::default()),
    )
    .await
    .expect("both requests should be in flight at the same time")
    .unwrap();

    assert_eq!(catalog.cards.len(), 1);
    assert_eq!(catalog.categories, vec!["C"]);
}

// ============================================================================
// Fallback Paths
// ============================================================================

#[tokio::test]
async fn test_cards_fall_back_to_static_file() {
    let fetcher = Arc::new(
        MemoryFetcher::default()
            .with("/static/cards.json", json!([{"q": "Q1", "a": "A1"}]))
            .with("/api/categories", json!(["X"])),
    );

    let catalog = load_catalog(fetcher, &CatalogConfig::default())
        .await
        .unwrap();

    assert_eq!(catalog.cards.len(), 1);
    assert_eq!(catalog.cards[0].question, "Q1");
    assert_eq!(catalog.cards[0].answer, "A1");
    assert_eq!(catalog.cards_origin, CardsOrigin::Fallback);
    assert_eq!(catalog.categories, vec!["X"]);
}

#[tokio::test]
async fn test_both_card_sources_fail_yields_empty_set() {
    let fetcher = Arc::new(MemoryFetcher::default().with("/api/categories", json!(["X", "Y"])));

    let catalog = load_catalog(fetcher, &CatalogConfig::default())
        .await
        .unwrap();

    assert!(catalog.cards.is_empty());
    assert_eq!(catalog.cards_origin, CardsOrigin::Empty);
    assert_eq!(catalog.categories, vec!["X", "Y"]);
}

#[tokio::test]
async fn test_categories_derived_when_endpoint_fails() {
    let fetcher = Arc::new(MemoryFetcher::default().with(
        "/api/cards",
        json!([
            {"question": "a", "category": "beta"},
            {"question": "b", "category": " Alpha "},
            {"question": "c"}
        ]),
    ));

    let catalog = load_catalog(fetcher, &CatalogConfig::default())
        .await
        .unwrap();

    assert_eq!(catalog.categories_origin, CategoriesOrigin::Derived);
    assert_eq!(catalog.categories, vec!["", "Alpha", "beta"]);
}

#[tokio::test]
async fn test_categories_derived_from_fallback_cards() {
    let fetcher = Arc::new(
        MemoryFetcher::default().with("/static/cards.json", json!({"q": "solo", "category": "Z"})),
    );

    let catalog = load_catalog(fetcher, &CatalogConfig::default())
        .await
        .unwrap();

    assert_eq!(catalog.cards_origin, CardsOrigin::Fallback);
    assert_eq!(catalog.categories, vec!["Z"]);
}

#[tokio::test]
async fn test_everything_fails_yields_empty_catalog() {
    let fetcher = Arc::new(MemoryFetcher::default());

    let catalog = load_catalog(fetcher, &CatalogConfig::default())
        .await
        .unwrap();

    assert!(catalog.cards.is_empty());
    assert!(catalog.categories.is_empty());
}

#[tokio::test]
async fn test_malformed_categories_payload_is_a_failure() {
    let fetcher = Arc::new(
        MemoryFetcher::default()
            .with("/api/cards", json!([{"question": "q", "category": "K"}]))
            .with("/api/categories", json!({"not": "an array"})),
    );

    let catalog = load_catalog(fetcher, &CatalogConfig::default())
        .await
        .unwrap();

    assert_eq!(catalog.categories_origin, CategoriesOrigin::Derived);
    assert_eq!(catalog.categories, vec!["K"]);
}

// ============================================================================
// Orchestration Failure
// ============================================================================

#[tokio::test]
async fn test_panicking_task_is_an_orchestration_failure() {
    let result = load_catalog(Arc::new(PanickingFetcher), &CatalogConfig::default()).await;
    assert!(matches!(result, Err(CatalogError::Orchestration(_))));

    let mut controller = CatalogController::default();
    controller.fail_boot();
    assert!(controller.frame().to_html().contains("Failed to load cards."));
}

// ============================================================================
// Directory Source
// ============================================================================

#[tokio::test]
async fn test_dir_fetcher_with_fallback_file() {
    let root = TempDir::new().unwrap();
    std::fs::create_dir_all(root.path().join("static")).unwrap();
    std::fs::write(
        root.path().join("static/cards.json"),
        r#"[{"q": "Q1", "a": "A1"}]"#,
    )
    .unwrap();

    let fetcher = Arc::new(DirFetcher::new(root.path()));
    let catalog = load_catalog(fetcher, &CatalogConfig::default())
        .await
        .unwrap();

    assert_eq!(catalog.cards.len(), 1);
    assert_eq!(catalog.cards[0].question, "Q1");
    assert_eq!(catalog.cards[0].answer, "A1");
    assert_eq!(catalog.categories, vec![""]);
}

#[tokio::test]
async fn test_dir_fetcher_invalid_json_falls_back() {
    let root = TempDir::new().unwrap();
    std::fs::create_dir_all(root.path().join("api")).unwrap();
    std::fs::create_dir_all(root.path().join("static")).unwrap();
    std::fs::write(root.path().join("api/cards.json"), "{ broken").unwrap();
    std::fs::write(root.path().join("static/cards.json"), r#"[{"q": "ok"}]"#).unwrap();

    let fetcher = Arc::new(DirFetcher::new(root.path()));
    let catalog = load_catalog(fetcher, &CatalogConfig::default())
        .await
        .unwrap();

    assert_eq!(catalog.cards_origin, CardsOrigin::Fallback);
    assert_eq!(catalog.cards[0].question, "ok");
}

// ============================================================================
// HTTP Source
// ============================================================================

async fn mount_json(server: &MockServer, route: &str, status: u16, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_http_server_error_falls_back_to_static_cards() {
    let server = MockServer::start().await;
    mount_json(&server, "/api/cards", 500, json!({"error": "boom"})).await;
    mount_json(&server, "/static/cards.json", 200, json!([{"q": "Q1", "a": "A1"}])).await;
    mount_json(&server, "/api/categories", 200, json!(["X"])).await;

    let fetcher = Arc::new(HttpFetcher::new(&server.uri()).unwrap());
    let catalog = load_catalog(fetcher, &CatalogConfig::default())
        .await
        .unwrap();

    assert_eq!(catalog.cards_origin, CardsOrigin::Fallback);
    assert_eq!(catalog.cards.len(), 1);
    assert_eq!(catalog.cards[0].question, "Q1");
    assert_eq!(catalog.categories, vec!["X"]);
}

#[tokio::test]
async fn test_http_missing_categories_are_derived() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/api/cards",
        200,
        json!([
            {"question": "a", "category": "Zebra"},
            {"question": "b", "category": "Éclair"}
        ]),
    )
    .await;
    mount_json(&server, "/api/categories", 404, json!({"error": "not found"})).await;

    let fetcher = Arc::new(HttpFetcher::new(&server.uri()).unwrap());
    let catalog = load_catalog(fetcher, &CatalogConfig::default())
        .await
        .unwrap();

    assert_eq!(catalog.cards_origin, CardsOrigin::Primary);
    assert_eq!(catalog.categories_origin, CategoriesOrigin::Derived);
    assert_eq!(catalog.categories, vec!["Éclair", "Zebra"]);
}

#[tokio::test]
async fn test_http_requests_accept_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/cards"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"q": "Q"}])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/categories"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["C"])))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = Arc::new(HttpFetcher::new(&server.uri()).unwrap());
    let catalog = load_catalog(fetcher, &CatalogConfig::default())
        .await
        .unwrap();

    assert_eq!(catalog.cards_origin, CardsOrigin::Primary);
    assert_eq!(catalog.categories_origin, CategoriesOrigin::Primary);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    for request in &requests {
        assert_eq!(
            request.headers.get("accept").map(|v| v.to_str().unwrap()),
            Some("application/json")
        );
    }
}

#[tokio::test]
async fn test_http_status_error_reports_url() {
    let server = MockServer::start().await;
    mount_json(&server, "/api/cards", 503, json!(null)).await;

    let fetcher = HttpFetcher::new(&server.uri()).unwrap();
    let err = fetcher.fetch_json("/api/cards").await.unwrap_err();

    match err {
        CatalogError::Status { status, url } => {
            assert_eq!(status, 503);
            assert!(url.ends_with("/api/cards"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}
