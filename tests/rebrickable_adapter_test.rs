//! Rebrickable adapter tests
//!
//! Runs the adapter against a local HTTP stub; no network access or API key needed.

mod utils;

use brick_checklist_lib::modules::catalog::{
    CatalogRepository, PaginatedFetcher, RateLimitClient, RebrickableAdapter, SetIdentifier,
};
use brick_checklist_lib::modules::checklist::{ChecklistService, InMemoryProgressStore};
use brick_checklist_lib::shared::AppError;
use serde_json::json;
use std::sync::Arc;
use utils::stub_server::StubServer;

const API_KEY: &str = "test-key-123";

fn adapter_for(server: &StubServer) -> RebrickableAdapter {
    let client = RateLimitClient::new(
        "Rebrickable",
        RateLimitClient::create_rate_limiter(100.0, 50),
        "brick-checklist-test".to_string(),
    );
    RebrickableAdapter::with_client(client, API_KEY, &server.base_url)
}

fn set(raw: &str) -> SetIdentifier {
    SetIdentifier::normalize(raw).unwrap()
}

fn part_row(part_num: &str, color_id: i32, quantity: u32) -> serde_json::Value {
    json!({
        "id": 1,
        "inv_part_id": 1,
        "part": {
            "part_num": part_num,
            "name": format!("Brick {}", part_num),
            "part_cat_id": 11,
            "part_img_url": format!("https://cdn.rebrickable.com/media/parts/{}.png", part_num)
        },
        "color": { "id": color_id, "name": "Red", "rgb": "C91A09", "is_trans": false },
        "set_num": "6020-1",
        "quantity": quantity,
        "is_spare": false,
        "element_id": null,
        "num_sets": 3
    })
}

fn parts_page(next: Option<&str>, rows: Vec<serde_json::Value>) -> String {
    json!({
        "count": rows.len(),
        "next": next,
        "previous": null,
        "results": rows
    })
    .to_string()
}

fn set_details() -> String {
    json!({
        "set_num": "6020-1",
        "name": "Magic Wand",
        "year": 2011,
        "theme_id": 513,
        "num_parts": 3,
        "set_img_url": "https://cdn.rebrickable.com/media/sets/6020-1.jpg",
        "set_url": "https://rebrickable.com/sets/6020-1/magic-wand/",
        "last_modified_dt": "2020-01-01T00:00:00Z"
    })
    .to_string()
}

#[tokio::test]
async fn test_fetch_set_meta_sends_api_key() {
    let server = StubServer::start(vec![(
        "/api/v3/lego/sets/6020-1/".to_string(),
        200,
        set_details(),
    )])
    .await;
    let adapter = adapter_for(&server);

    let meta = adapter.fetch_set_meta(&set("6020")).await.unwrap();

    assert_eq!(meta.display_name, "Magic Wand");
    assert_eq!(meta.year, Some(2011));

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].headers.get("authorization").map(String::as_str),
        Some("key test-key-123")
    );
    assert!(!requests[0].target.contains(API_KEY));
}

#[tokio::test]
async fn test_component_page_maps_rows() {
    let server = StubServer::start(vec![(
        "/api/v3/lego/sets/6020-1/parts/?page=1&page_size=1000".to_string(),
        200,
        parts_page(None, vec![part_row("3001", 5, 2), part_row("3003", 0, 1)]),
    )])
    .await;
    let adapter = adapter_for(&server);

    let page = adapter
        .fetch_component_page(&set("6020-1"), 1, 1000)
        .await
        .unwrap();

    assert!(!page.has_next);
    assert_eq!(page.entries.len(), 2);
    assert_eq!(page.entries[0].component_id, "3001");
    assert_eq!(page.entries[0].variant_id, "5");
    assert_eq!(page.entries[0].quantity, 2);
    assert_eq!(page.entries[1].variant_id, "0");
}

#[tokio::test]
async fn test_fetcher_follows_next_cursor() {
    let base = "/api/v3/lego/sets/6020-1/parts/";
    let server = StubServer::start(vec![
        (
            format!("{}?page=1&page_size=2", base),
            200,
            parts_page(
                Some("https://rebrickable.com/api/v3/lego/sets/6020-1/parts/?page=2&page_size=2"),
                vec![part_row("3001", 5, 1), part_row("3002", 5, 1)],
            ),
        ),
        (
            format!("{}?page=2&page_size=2", base),
            200,
            parts_page(None, vec![part_row("3003", 5, 1)]),
        ),
    ])
    .await;
    let fetcher = PaginatedFetcher::new(Arc::new(adapter_for(&server))).with_page_size(2);

    let entries = fetcher.fetch_all_components(&set("6020")).await.unwrap();

    let ids: Vec<_> = entries.iter().map(|e| e.component_id.as_str()).collect();
    assert_eq!(ids, vec!["3001", "3002", "3003"]);
    assert_eq!(
        server.targets(),
        vec![
            format!("{}?page=1&page_size=2", base),
            format!("{}?page=2&page_size=2", base),
        ]
    );
}

#[tokio::test]
async fn test_missing_set_reports_not_found() {
    let server = StubServer::start(vec![]).await;
    let adapter = adapter_for(&server);

    let meta_err = adapter.fetch_set_meta(&set("0000")).await.unwrap_err();
    let page_err = adapter
        .fetch_component_page(&set("0000"), 1, 1000)
        .await
        .unwrap_err();

    for err in [meta_err, page_err] {
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(
            err.to_string(),
            "Set not found. Please check the set number and try again."
        );
    }
}

#[tokio::test]
async fn test_server_errors_use_status_text() {
    let server = StubServer::start(vec![
        (
            "/api/v3/lego/sets/6020-1/".to_string(),
            503,
            r#"{"detail": "down"}"#.to_string(),
        ),
        (
            "/api/v3/lego/sets/6020-1/parts/?page=1&page_size=1000".to_string(),
            500,
            r#"{"detail": "boom"}"#.to_string(),
        ),
    ])
    .await;
    let adapter = adapter_for(&server);

    let meta_err = adapter.fetch_set_meta(&set("6020")).await.unwrap_err();
    assert_eq!(meta_err.status(), Some(503));
    assert_eq!(
        meta_err.to_string(),
        "Error fetching set details: Service Unavailable"
    );

    let page_err = adapter
        .fetch_component_page(&set("6020"), 1, 1000)
        .await
        .unwrap_err();
    assert_eq!(page_err.to_string(), "Error fetching parts: Internal Server Error");

    // One attempt each, no retries
    assert_eq!(server.requests().len(), 2);
}

#[tokio::test]
async fn test_malformed_body_is_serialization_error() {
    let server = StubServer::start(vec![(
        "/api/v3/lego/sets/6020-1/".to_string(),
        200,
        "<html>not json</html>".to_string(),
    )])
    .await;
    let adapter = adapter_for(&server);

    let err = adapter.fetch_set_meta(&set("6020")).await.unwrap_err();
    assert!(matches!(err, AppError::SerializationError(_)));
}

#[tokio::test]
async fn test_end_to_end_load_through_service() {
    let server = StubServer::start(vec![
        (
            "/api/v3/lego/sets/6020-1/".to_string(),
            200,
            set_details(),
        ),
        (
            "/api/v3/lego/sets/6020-1/parts/?page=1&page_size=1000".to_string(),
            200,
            parts_page(None, vec![part_row("3001", 5, 2), part_row("3001", 5, 1)]),
        ),
    ])
    .await;
    let mut service = ChecklistService::new(
        Arc::new(adapter_for(&server)),
        Arc::new(InMemoryProgressStore::new()),
    );

    service.load("6020").await.unwrap();

    let summary = service.summary().unwrap();
    assert_eq!(summary.display_name, "Magic Wand");
    assert_eq!(summary.components.len(), 1);
    assert_eq!(summary.components[0].quantity, 3);
}
