use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cenik_catalog::CatalogError;
use cenik_core::ReportError;

/// Error envelope returned by every handler, as a JSON body with the
/// matching status code.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        let status = match err {
            CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
            CatalogError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            CatalogError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, err.to_string())
    }
}

impl From<ReportError> for ApiError {
    fn from(err: ReportError) -> Self {
        // No partial document ever leaves the service; the caller may
        // simply retry against a fresh snapshot.
        log::error!("report generation failed: {err}");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.message }));
        (self.status, body).into_response()
    }
}
