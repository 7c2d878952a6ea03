use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use cenik_catalog::ProductStore;
use cenik_core::{PdfReport, ReportPipeline};
use cenik_types::{NewProduct, ProductRecord};

use crate::error::ApiError;

/// Shared service state; cheap to clone per request.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProductStore>,
    pub pipeline: Arc<ReportPipeline>,
}

impl AppState {
    pub fn new(store: Arc<dyn ProductStore>, pipeline: ReportPipeline) -> Self {
        Self {
            store,
            pipeline: Arc::new(pipeline),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route("/products/report", get(download_report))
        .route(
            "/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn serve(addr: SocketAddr, state: AppState) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("catalog service listening on {addr}");
    axum::serve(listener, router(state)).await
}

async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductRecord>>, ApiError> {
    Ok(Json(state.store.list()?))
}

async fn create_product(
    State(state): State<AppState>,
    Json(product): Json<NewProduct>,
) -> Result<(StatusCode, Json<ProductRecord>), ApiError> {
    let record = state.store.insert(product)?;
    Ok((StatusCode::CREATED, Json(record)))
}

async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ProductRecord>, ApiError> {
    Ok(Json(state.store.get(id)?))
}

async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(product): Json<NewProduct>,
) -> Result<Json<ProductRecord>, ApiError> {
    Ok(Json(state.store.update(id, product)?))
}

async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.store.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// The report always covers the entire catalog in storage order: one
/// snapshot is taken and the build runs on it alone, so concurrent catalog
/// writes cannot tear a document.
async fn download_report(State(state): State<AppState>) -> Result<Response, ApiError> {
    let records = state.store.list()?;
    let report = state.pipeline.generate(&records)?;
    log::info!(
        "serving product report: {} records, {} bytes",
        records.len(),
        report.bytes.len()
    );
    Ok((
        [
            (header::CONTENT_TYPE, PdfReport::CONTENT_TYPE),
            (header::CONTENT_DISPOSITION, PdfReport::CONTENT_DISPOSITION),
        ],
        report.bytes,
    )
        .into_response())
}
