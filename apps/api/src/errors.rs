use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    /// The request carried no `resumeData` (absent or null).
    #[error("Resume data is required")]
    MissingResumeData,

    /// Block construction or layout failed. Style derivation never lands here;
    /// it degrades to defaults instead of failing the request.
    #[error("{0}")]
    Render(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::MissingResumeData => StatusCode::BAD_REQUEST,
            AppError::Render(e) => {
                tracing::error!("Rendering failed: {e:?}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
