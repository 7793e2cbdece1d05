// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::celebs,
    middleware::{SiteOrigin, site_origin_cors},
    openapi::{self, StatusResponse},
};
use axum::{Extension, Router, middleware, routing::get};
use tower_http::trace::TraceLayer;

pub const API_NAMESPACE: &str = "/rt/v1";

pub fn build_router(state: HttpState, site_origin: SiteOrigin) -> Router {
    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route(&format!("{API_NAMESPACE}/celebs"), get(celebs::list_celebs))
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
        .layer(middleware::from_fn_with_state(site_origin, site_origin_cors))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
