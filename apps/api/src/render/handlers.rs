//! Axum route handler for the render API.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::resume::{present, ResumeData};
use crate::models::theme::Theme;
use crate::render::render_resume;
use crate::state::AppState;

/// Body of `POST /generate-resume`. `resumeData` is required (null counts as
/// absent); `theme` is optional and falls back to the injected default.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResumeRequest {
    #[serde(default)]
    pub resume_data: Option<ResumeData>,
    #[serde(default)]
    pub theme: Option<Theme>,
}

/// POST /generate-resume
///
/// Renders the supplied resume data into a PDF and returns the bytes with a
/// suggested download filename. 400 when `resumeData` is missing, 500 when
/// rendering fails; never a partial document.
pub async fn handle_generate_resume(
    State(state): State<AppState>,
    Json(request): Json<GenerateResumeRequest>,
) -> Result<Response, AppError> {
    let data = request.resume_data.ok_or(AppError::MissingResumeData)?;
    let theme = request.theme.unwrap_or_else(|| state.default_theme.clone());

    let filename = suggested_filename(&data);
    let bytes = render_resume(&data, &theme)?;
    info!(filename = %filename, size = bytes.len(), "generated resume PDF");

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        bytes,
    )
        .into_response())
}

/// `{fullName with spaces → underscores}_Resume.pdf`, defaulting the name to
/// `Resume` when none is supplied.
fn suggested_filename(data: &ResumeData) -> String {
    let full_name = data
        .personal_info
        .as_ref()
        .and_then(|p| present(&p.full_name))
        .unwrap_or("Resume");
    format!("{}_Resume.pdf", full_name.replace(' ', "_"))
}
