//! Axum route handlers for the Export API.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::content::ContentFormat;
use crate::convert::{convert, Document};
use crate::errors::AppError;
use crate::export::docx::{render_docx, DOCX_CONTENT_TYPE};
use crate::export::filename::sanitize_filename;
use crate::export::layout::{estimate_pages, PageEstimate};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub content: String,
    #[serde(default)]
    pub format: ContentFormat,
    /// Download name without directories; only used by the DOCX endpoint.
    #[serde(default)]
    pub filename: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DocumentResponse {
    pub document: Document,
    pub page_estimate: PageEstimate,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/export/document
///
/// Converts the content and returns the document model with a page estimate,
/// so the editor can preview what the DOCX will contain.
pub async fn handle_export_document(
    State(state): State<AppState>,
    Json(request): Json<ExportRequest>,
) -> Result<Json<DocumentResponse>, AppError> {
    let document = build_document(&state, &request)?;
    let page_estimate = estimate_pages(&document, &state.page_config);

    Ok(Json(DocumentResponse {
        document,
        page_estimate,
    }))
}

/// POST /api/v1/export/docx
///
/// Converts the content and returns a `.docx` attachment.
pub async fn handle_export_docx(
    State(state): State<AppState>,
    Json(request): Json<ExportRequest>,
) -> Result<Response, AppError> {
    let document = build_document(&state, &request)?;
    let filename = sanitize_filename(request.filename.as_deref(), "docx");

    let bytes = tokio::task::spawn_blocking(move || render_docx(&document))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("DOCX render task failed: {e}")))??;

    info!(filename = %filename, bytes = bytes.len(), "DOCX export complete");

    let headers = [
        (header::CONTENT_TYPE, DOCX_CONTENT_TYPE.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ),
    ];
    Ok((headers, Bytes::from(bytes)).into_response())
}

// ────────────────────────────────────────────────────────────────────────────
// Internal helpers
// ────────────────────────────────────────────────────────────────────────────

fn validate(state: &AppState, request: &ExportRequest) -> Result<(), AppError> {
    if request.content.trim().is_empty() {
        return Err(AppError::Validation("content cannot be empty".to_string()));
    }
    let limit = state.config.max_content_bytes;
    if request.content.len() > limit {
        return Err(AppError::Validation(format!(
            "content exceeds the {limit}-byte limit"
        )));
    }
    Ok(())
}

fn build_document(state: &AppState, request: &ExportRequest) -> Result<Document, AppError> {
    validate(state, request)?;

    let tree = request.format.parse(&request.content)?;
    let document = convert(&tree);
    if document.is_empty() {
        warn!(format = ?request.format, "Content produced no paragraphs");
    }

    info!(
        format = ?request.format,
        input_bytes = request.content.len(),
        paragraphs = document.paragraphs.len(),
        runs = document.run_count(),
        "Content converted"
    );
    Ok(document)
}
