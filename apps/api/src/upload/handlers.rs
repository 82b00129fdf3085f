use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use chrono::Local;
use tracing::info;

use crate::analysis::analyze_document;
use crate::analysis::models::AnalysisResult;
use crate::errors::AppError;
use crate::extraction::SourceDocument;
use crate::state::AppState;
use crate::upload::storage::{allowed_file, discard, persist, storage_filename};

/// Multipart field carrying the document.
pub const RESUME_FIELD: &str = "resume";

/// POST /upload
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResult>, AppError> {
    let mut upload: Option<(String, Bytes)> = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(RESUME_FIELD) {
            let filename = field.file_name().unwrap_or_default().to_string();
            let data = field.bytes().await?;
            upload = Some((filename, data));
            break;
        }
    }

    let (filename, data) =
        upload.ok_or_else(|| AppError::Validation("No file uploaded".to_string()))?;
    if filename.is_empty() {
        return Err(AppError::Validation("No file selected".to_string()));
    }
    if !allowed_file(&filename) {
        return Err(AppError::Validation(
            "Invalid file type. Please upload PDF, DOCX, or TXT".to_string(),
        ));
    }

    let name = storage_filename(&filename, Local::now());
    let path = persist(&state.config.upload_folder, &name, &data).await?;
    info!("Stored upload at {} ({} bytes)", path.display(), data.len());

    let stored = path.clone();
    let outcome = tokio::task::spawn_blocking(move || {
        SourceDocument::load(&stored).map(|document| analyze_document(&document))
    })
    .await;

    // The stored file never outlives the request.
    discard(&path).await;

    let analysis = outcome.map_err(|e| AppError::Internal(e.into()))???;
    info!(
        "Analyzed {}: {} ({})",
        name, analysis.overall_score, analysis.rating
    );
    Ok(Json(analysis))
}
