// src/presentation/http/middleware/site_origin.rs
//! Echo CORS headers to browsers calling from the site's own origin.
//!
//! Runs over every response the router produces. Requests from any other
//! origin, or without an `Origin` header, pass through untouched and the
//! browser's same-origin policy does the rest. Preflight requests get no
//! special treatment here.
use crate::config::ConfigError;
use axum::{
    extract::{Request, State},
    http::{HeaderValue, header},
    middleware::Next,
    response::Response,
};
use url::Url;

pub const ALLOW_METHODS: &str = "GET, POST, OPTIONS";
pub const ALLOW_HEADERS: &str = "Authorization, Content-Type, X-WP-Nonce";

/// `scheme://host[:port]` of the hosting site, without path or trailing slash.
#[derive(Debug, Clone)]
pub struct SiteOrigin {
    origin: String,
    header: HeaderValue,
}

impl SiteOrigin {
    pub fn from_site_url(site_url: &Url) -> Result<Self, ConfigError> {
        let url_origin = site_url.origin();
        if !url_origin.is_tuple() {
            return Err(ConfigError::Invalid(format!(
                "site url has no origin: {site_url}"
            )));
        }

        let origin = url_origin.ascii_serialization();
        let header = HeaderValue::from_str(&origin)
            .map_err(|err| ConfigError::Invalid(format!("site origin {origin}: {err}")))?;
        Ok(Self { origin, header })
    }

    pub fn as_str(&self) -> &str {
        &self.origin
    }

    /// Exact comparison after dropping trailing slashes from the request value.
    pub fn matches(&self, request_origin: &str) -> bool {
        request_origin.trim_end_matches('/') == self.origin
    }
}

pub async fn site_origin_cors(
    State(site): State<SiteOrigin>,
    req: Request,
    next: Next,
) -> Response {
    let permitted = req
        .headers()
        .get(header::ORIGIN)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| site.matches(value));

    let mut response = next.run(req).await;

    if permitted {
        let headers = response.headers_mut();
        headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, site.header.clone());
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOW_METHODS),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
            HeaderValue::from_static("true"),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOW_HEADERS),
        );
    }

    response
}
