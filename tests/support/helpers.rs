// tests/support/helpers.rs
use super::mocks;
use axum::Router;
use axum::body::{self, Body};
use axum::http::{HeaderMap, Request, StatusCode};
use rt_celebs::application::services::ApplicationServices;
use rt_celebs::config::parse_site_url;
use rt_celebs::domain::content::{ContentRecord, ContentRecordReadRepository};
use rt_celebs::domain::content_type::ContentTypeRegistry;
use rt_celebs::presentation::http::{
    middleware::SiteOrigin, routes::build_router, state::HttpState,
};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

pub const SITE_URL: &str = "https://example.com";

pub async fn make_router_with(
    registry: Arc<dyn ContentTypeRegistry>,
    record_repo: Arc<dyn ContentRecordReadRepository>,
) -> Router {
    let site_url = parse_site_url(SITE_URL).expect("site url");
    let site_origin = SiteOrigin::from_site_url(&site_url).expect("site origin");
    let services = ApplicationServices::bootstrap(registry, record_repo, site_url)
        .await
        .expect("bootstrap services");

    build_router(
        HttpState {
            services: Arc::new(services),
        },
        site_origin,
    )
}

pub async fn make_test_router(records: Vec<ContentRecord>) -> Router {
    make_router_with(
        Arc::new(mocks::InMemoryRegistry::default()),
        Arc::new(mocks::InMemoryRecordRepo::new(records)),
    )
    .await
}

pub async fn make_failing_store_router() -> Router {
    make_router_with(
        Arc::new(mocks::InMemoryRegistry::default()),
        Arc::new(mocks::FailingRecordRepo),
    )
    .await
}

/// Send a GET, optionally with an `Origin` header, and collect the response.
pub async fn send_get(app: &Router, uri: &str, origin: Option<&str>) -> (StatusCode, HeaderMap, Vec<u8>) {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(origin) = origin {
        builder = builder.header("origin", origin);
    }
    let req = builder.body(Body::empty()).unwrap();

    let resp = app.clone().oneshot(req).await.unwrap();
    let (parts, body_stream) = resp.into_parts();
    let bytes = body::to_bytes(body_stream, 1024 * 1024).await.expect("read body");
    (parts.status, parts.headers, bytes.to_vec())
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, HeaderMap, Value) {
    let (status, headers, bytes) = send_get(app, uri, None).await;
    let ct = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json: Value = serde_json::from_slice(&bytes).expect("json body");
    (status, headers, json)
}

pub fn header_u64(headers: &HeaderMap, name: &str) -> u64 {
    headers
        .get(name)
        .unwrap_or_else(|| panic!("missing header {name}"))
        .to_str()
        .unwrap()
        .parse()
        .unwrap()
}

pub fn item_ids(json: &Value) -> Vec<i64> {
    json["items"]
        .as_array()
        .expect("items array")
        .iter()
        .map(|item| item["id"].as_i64().unwrap())
        .collect()
}
