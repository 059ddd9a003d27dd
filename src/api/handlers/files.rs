use axum::extract::{Multipart, Path, State};
use axum::Json;
use bytes::Bytes;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::response::{ApiError, AppQuery, JSend, Page, Pagination};
use crate::file_store::DeleteOutcome;
use crate::storage::models::FileRecord;
use crate::vocabulary::{EntryKind, MimeCategory};
use crate::AppState;

// ============================================================================
// Types
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct FileResponse {
    pub byte_size: u64,
    pub created_at: String,
    pub entry_kind: EntryKind,
    pub id: String,
    pub mime_category: Option<MimeCategory>,
    pub mime_type: String,
    pub name: String,
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct ListFilesParams {
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
    #[serde(default)]
    pub entry_kind: Option<EntryKind>,
    #[serde(default)]
    pub mime_category: Option<MimeCategory>,
}

fn default_limit() -> u32 {
    20
}

/// What happened to the blob when its record was deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlobOutcome {
    Deleted,
    NotFound,
    Failed,
    /// Another record still points at the same url, so the blob was kept.
    Shared,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteFileResponse {
    pub id: String,
    pub blob: BlobOutcome,
}

// ============================================================================
// Handlers
// ============================================================================

/// Multipart upload. `file` is required; `name` overrides the part's file name.
pub async fn upload_file(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<JSend<FileResponse>>, ApiError> {
    let mut file_data: Option<Bytes> = None;
    let mut file_name: Option<String> = None;
    let mut file_content_type: Option<String> = None;
    let mut name: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Invalid multipart data: {e}")))?
    {
        let field_name = field.name().unwrap_or_default().to_string();

        match field_name.as_str() {
            "file" => {
                file_name = field.file_name().map(|s| s.to_string());
                file_content_type = field.content_type().map(|s| s.to_string());

                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::bad_request(format!("Failed to read file: {e}")))?;
                file_data = Some(data);
            }
            "name" => {
                name = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| ApiError::bad_request(format!("Invalid name: {e}")))?,
                );
            }
            _ => {
                // Ignore unknown fields
            }
        }
    }

    let file_data = file_data.ok_or_else(|| ApiError::bad_request("file field is required"))?;
    let desired_name = name
        .or(file_name)
        .ok_or_else(|| ApiError::bad_request("a file name or name field is required"))?;

    let record = store_upload(
        &state,
        &desired_name,
        file_content_type.as_deref(),
        file_data,
    )
    .await?;
    Ok(JSend::success(file_to_response(&record)))
}

/// Save the blob, then record it. A failed record write removes the blob again.
pub async fn store_upload(
    state: &AppState,
    desired_name: &str,
    content_type: Option<&str>,
    data: Bytes,
) -> Result<FileRecord, ApiError> {
    if data.len() as u64 > state.config.max_upload_size {
        return Err(ApiError::payload_too_large(format!(
            "File exceeds maximum upload size of {} bytes",
            state.config.max_upload_size
        )));
    }

    // Multipart Content-Type wins unless it is the generic fallback
    let mime_type = content_type
        .filter(|ct| !ct.is_empty() && *ct != "application/octet-stream")
        .map(|ct| ct.to_string())
        .or_else(|| {
            mime_guess::from_path(desired_name)
                .first()
                .map(|m| m.to_string())
        })
        .unwrap_or_else(|| "application/octet-stream".to_string());

    let byte_size = data.len() as u64;
    let url = state.file_store.save(data, desired_name).await?;

    let collided = match state.db.url_exists(&url) {
        Ok(collided) => collided,
        Err(e) => {
            state.file_store.delete(&url).await;
            return Err(e.into());
        }
    };
    if collided {
        tracing::warn!(url = %url, "Stored name collided; the earlier upload was overwritten");
    }

    let record = FileRecord {
        id: uuid::Uuid::new_v4().to_string(),
        name: desired_name.trim().to_string(),
        url,
        entry_kind: EntryKind::File,
        mime_category: MimeCategory::from_mime(&mime_type),
        mime_type,
        byte_size,
        created_at: Utc::now(),
    };

    if let Err(e) = state.db.put_file(&record) {
        // Best-effort cleanup of the stored blob
        state.file_store.delete(&record.url).await;
        return Err(e.into());
    }

    tracing::debug!(file_id = %record.id, url = %record.url, "Created file");
    Ok(record)
}

pub async fn get_file(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<JSend<FileResponse>>, ApiError> {
    let file = state
        .db
        .get_file(&id)?
        .ok_or_else(|| ApiError::not_found("File not found"))?;

    Ok(JSend::success(file_to_response(&file)))
}

pub async fn delete_file(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<JSend<DeleteFileResponse>>, ApiError> {
    let file = state
        .db
        .delete_file(&id)?
        .ok_or_else(|| ApiError::not_found("File not found"))?;

    // The record is gone either way; the blob outcome is reported, never raised.
    let blob = if state.db.url_exists(&file.url)? {
        tracing::warn!(file_id = %id, url = %file.url, "Blob still referenced; keeping it");
        BlobOutcome::Shared
    } else {
        match state.file_store.delete(&file.url).await {
            DeleteOutcome::Deleted => BlobOutcome::Deleted,
            DeleteOutcome::NotFound => BlobOutcome::NotFound,
            DeleteOutcome::Failed(_) => BlobOutcome::Failed,
        }
    };

    tracing::debug!(file_id = %id, blob = ?blob, "Deleted file");
    Ok(JSend::success(DeleteFileResponse { id, blob }))
}

pub async fn list_files(
    State(state): State<Arc<AppState>>,
    AppQuery(params): AppQuery<ListFilesParams>,
) -> Result<Json<JSend<Page<FileResponse>>>, ApiError> {
    if params.limit == 0 {
        return Err(ApiError::bad_request("limit must be greater than 0"));
    }

    let files = state
        .db
        .list_files(params.entry_kind, params.mime_category)?;
    let total = files.len() as u64;
    let items: Vec<FileResponse> = files
        .iter()
        .skip(params.offset as usize)
        .take(params.limit as usize)
        .map(file_to_response)
        .collect();

    Ok(JSend::success(Page {
        items,
        pagination: Pagination {
            limit: params.limit,
            offset: params.offset,
            total,
        },
    }))
}

// ============================================================================
// Helpers
// ============================================================================

fn file_to_response(file: &FileRecord) -> FileResponse {
    FileResponse {
        byte_size: file.byte_size,
        created_at: file.created_at.to_rfc3339(),
        entry_kind: file.entry_kind,
        id: file.id.clone(),
        mime_category: file.mime_category,
        mime_type: file.mime_type.clone(),
        name: file.name.clone(),
        url: file.url.clone(),
    }
}
