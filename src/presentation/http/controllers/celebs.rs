// src/presentation/http/controllers/celebs.rs
use crate::application::queries::celebs::ListCelebsQuery;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::openapi::CelebListResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::RawQuery,
    http::{HeaderMap, HeaderName, HeaderValue},
};
use url::form_urlencoded;
use utoipa::IntoParams;

pub const TOTAL_HEADER: &str = "x-wp-total";
pub const TOTAL_PAGES_HEADER: &str = "x-wp-totalpages";

/// Kept as raw strings: malformed values are coerced, never rejected.
#[derive(Debug, Default, PartialEq, Eq, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CelebListParams {
    /// 1-based page number. Defaults to 1; values below 1 become 1.
    #[param(value_type = Option<u32>, example = 1)]
    pub page: Option<String>,
    /// Items per page. Defaults to 10; clamped into 1..=100.
    #[param(value_type = Option<u32>, example = 10)]
    pub per_page: Option<String>,
}

impl CelebListParams {
    /// Unknown keys are ignored; a repeated key keeps its last value.
    pub fn from_query(query: &str) -> Self {
        let mut params = Self::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "page" => params.page = Some(value.into_owned()),
                "per_page" => params.per_page = Some(value.into_owned()),
                _ => {}
            }
        }
        params
    }
}

#[utoipa::path(
    get,
    path = "/rt/v1/celebs",
    params(CelebListParams),
    responses(
        (status = 200, description = "Published celebrity profiles, newest first.", body = CelebListResponse,
            headers(
                ("X-WP-Total" = u64, description = "Number of published profiles."),
                ("X-WP-TotalPages" = u64, description = "Number of pages at the effective per_page.")
            )
        ),
        (status = 500, description = "Content store unavailable.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Celebs"
)]
pub async fn list_celebs(
    Extension(state): Extension<HttpState>,
    RawQuery(query): RawQuery,
) -> HttpResult<(HeaderMap, Json<CelebListResponse>)> {
    let params = CelebListParams::from_query(query.as_deref().unwrap_or_default());
    let page = state
        .services
        .celeb_queries
        .list_celebs(ListCelebsQuery {
            page: params.page,
            per_page: params.per_page,
        })
        .await
        .into_http()?;

    let mut headers = HeaderMap::new();
    headers.insert(
        HeaderName::from_static(TOTAL_HEADER),
        HeaderValue::from(page.total),
    );
    headers.insert(
        HeaderName::from_static(TOTAL_PAGES_HEADER),
        HeaderValue::from(page.total_pages),
    );

    Ok((headers, Json(page.into())))
}
