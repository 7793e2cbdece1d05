// src/presentation/http/openapi.rs
use crate::application::dto::{CelebSummaryDto, OffsetPage};
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

/// Pagination envelope for the celebrity listing.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CelebListResponse {
    pub items: Vec<CelebSummaryDto>,
    pub total: u64,
    pub total_pages: u64,
    pub page: u32,
    pub per_page: u32,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::celebs::list_celebs,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            CelebListResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::application::dto::CelebSummaryDto
        )
    ),
    tags(
        (name = "Celebs", description = "Celebrity profile listing"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "RT Celebs API",
        description = "Paginated read-only listing of published celebrity profiles",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub fn docs_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

/// Write the pretty-printed API document to `path`, creating parent
/// directories as needed.
pub fn write_openapi_snapshot(path: &Path) -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &spec)?;
    writer.flush()
}

impl From<OffsetPage<CelebSummaryDto>> for CelebListResponse {
    fn from(page: OffsetPage<CelebSummaryDto>) -> Self {
        Self {
            items: page.items,
            total: page.total,
            total_pages: page.total_pages,
            page: page.page,
            per_page: page.per_page,
        }
    }
}
