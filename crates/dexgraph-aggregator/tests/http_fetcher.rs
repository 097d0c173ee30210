//! `HttpFetcher` against a local axum server.

#![allow(clippy::unwrap_used, clippy::indexing_slicing, missing_docs)]

use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use dexgraph_aggregator::{
    AggregatorConfig, ApiRoutes, DetailAggregator, FetchStage, Fetcher, HttpFetcher,
    TransportError, list_summaries,
};
use dexgraph_catalog::Catalog;
use serde_json::{Value, json};

async fn charmander() -> Json<Value> {
    Json(json!({"id": 4, "name": "charmander"}))
}

async fn user_agent(headers: HeaderMap) -> Json<Value> {
    let agent = headers
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    Json(json!({ "agent": agent }))
}

async fn broken() -> (StatusCode, &'static str) {
    (StatusCode::OK, "{not json")
}

async fn listing() -> Json<Value> {
    Json(json!({
        "count": 1302,
        "next": "http://elsewhere/pokemon?offset=1&limit=1",
        "previous": null,
        "results": [{"name": "bulbasaur", "url": "http://elsewhere/pokemon/1/"}]
    }))
}

/// Serve the test routes on an ephemeral port and return the base URL.
async fn spawn_server() -> String {
    let app = Router::new()
        .route("/api/v2/pokemon/4", get(charmander))
        .route("/api/v2/pokemon", get(listing))
        .route("/api/v2/agent", get(user_agent))
        .route("/api/v2/broken", get(broken));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/api/v2")
}

fn fetcher(base: &str) -> HttpFetcher {
    let config = AggregatorConfig {
        api_base_url: base.to_owned(),
        user_agent: String::from("dexgraph-tests/1"),
        ..AggregatorConfig::default()
    };
    HttpFetcher::new(&config).unwrap()
}

#[tokio::test]
async fn fetches_json_document() {
    let base = spawn_server().await;
    let doc = fetcher(&base).get(&format!("{base}/pokemon/4")).await.unwrap();
    assert_eq!(doc["name"], "charmander");
    assert_eq!(doc["id"], 4);
}

#[tokio::test]
async fn sends_configured_user_agent() {
    let base = spawn_server().await;
    let doc = fetcher(&base).get(&format!("{base}/agent")).await.unwrap();
    assert_eq!(doc["agent"], "dexgraph-tests/1");
}

#[tokio::test]
async fn non_success_status_is_reported() {
    let base = spawn_server().await;
    let url = format!("{base}/pokemon/9999");
    let err = fetcher(&base).get(&url).await.unwrap_err();
    assert!(matches!(err, TransportError::Status { status: 404, .. }));
    assert_eq!(err.url(), url);
}

#[tokio::test]
async fn unreadable_body_is_decode_error() {
    let base = spawn_server().await;
    let err = fetcher(&base)
        .get(&format!("{base}/broken"))
        .await
        .unwrap_err();
    assert!(matches!(err, TransportError::Decode { .. }));
}

#[tokio::test]
async fn unreachable_host_is_request_error() {
    // Bind and drop to get a port with nothing listening.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let base = format!("http://{addr}");
    let err = fetcher(&base).get(&format!("{base}/x")).await.unwrap_err();
    assert!(matches!(err, TransportError::Request { .. }));
}

#[tokio::test]
async fn listing_takes_first_page_only() {
    let base = spawn_server().await;
    let summaries = list_summaries(&fetcher(&base), &ApiRoutes::new(&base), 1)
        .await
        .unwrap();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].name, "bulbasaur");
}

#[tokio::test]
async fn detail_failure_names_base_stage_over_http() {
    let base = spawn_server().await;
    let aggregator = DetailAggregator::new(
        fetcher(&base),
        ApiRoutes::new(&base),
        Arc::new(Catalog::bundled().unwrap()),
    );
    let err = aggregator.build_profile("missingno", "").await.unwrap_err();
    assert_eq!(err.stage, FetchStage::BaseEntity);
    assert_eq!(err.entity_id, "missingno");
}
