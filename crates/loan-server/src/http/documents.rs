//! Upload, download, and signing of documents.

use axum::extract::{Multipart, Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Redirect, Response};
use loan_core::uploads::{
    DEFAULT_CATEGORY, UploadRejection, content_type_for, validate_upload_name,
};

use super::{to_application, to_dashboard_with_notice};
use crate::error::ServerError;
use crate::state::AppState;

const FILE_FIELD: &str = "document";
const CATEGORY_FIELD: &str = "category";

struct UploadedFile {
    name: String,
    bytes: Vec<u8>,
}

/// Store one file against an application.
///
/// Rejections are reported in a fixed order: missing file part, blank
/// filename, disallowed extension, unknown application.
pub async fn upload(
    State(state): State<AppState>,
    Path(app_id): Path<i64>,
    mut multipart: Multipart,
) -> Result<Redirect, ServerError> {
    let mut file = None;
    let mut category = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            // A `document` field without a filename is a plain form value,
            // not a file part.
            Some(FILE_FIELD) if file.is_none() => {
                let Some(filename) = field.file_name().map(str::to_owned) else {
                    continue;
                };
                let bytes = field.bytes().await?;
                file = Some(UploadedFile {
                    name: filename,
                    bytes: bytes.to_vec(),
                });
            }
            Some(CATEGORY_FIELD) => {
                let text = field.text().await?;
                if !text.trim().is_empty() {
                    category = Some(text);
                }
            }
            _ => {}
        }
    }

    let file = file.ok_or(UploadRejection::MissingFilePart)?;
    let safe_name = validate_upload_name(&file.name, state.files.allowed_extensions())?;

    if state.service.find_application(app_id).await?.is_none() {
        return Err(ServerError::NotFound("Application not found".into()));
    }

    let key = state.files.save(app_id, &safe_name, &file.bytes).await?;
    state
        .service
        .create_document(
            app_id,
            &key,
            &safe_name,
            category.as_deref().unwrap_or(DEFAULT_CATEGORY),
        )
        .await?;
    Ok(to_application(app_id))
}

pub async fn download(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Response, ServerError> {
    match state.files.read(&filename).await? {
        Some(bytes) => Ok((
            [(header::CONTENT_TYPE, content_type_for(&filename))],
            bytes,
        )
            .into_response()),
        None => Ok((StatusCode::NOT_FOUND, "Document not found").into_response()),
    }
}

pub async fn sign(
    State(state): State<AppState>,
    Path(doc_id): Path<i64>,
) -> Result<Redirect, ServerError> {
    match state.service.sign_document(doc_id).await? {
        Some(document) => Ok(to_application(document.application_id)),
        None => Ok(to_dashboard_with_notice(&format!(
            "Document {doc_id} not found"
        ))),
    }
}
