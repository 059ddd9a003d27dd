use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::response::{ApiError, JSend};
use crate::AppState;

// ============================================================================
// Types
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PurgeResponse {
    pub files_deleted: u64,
    pub blobs_deleted: u64,
}

// ============================================================================
// Handlers
// ============================================================================

pub async fn health() -> Json<JSend<HealthResponse>> {
    JSend::success(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Drop every record, then every blob those records referenced (best-effort).
pub async fn admin_purge(
    State(state): State<Arc<AppState>>,
) -> Result<Json<JSend<PurgeResponse>>, ApiError> {
    let stats = state.db.purge_all()?;

    let mut blobs_deleted = 0;
    for url in &stats.urls {
        if state.file_store.delete(url).await.is_deleted() {
            blobs_deleted += 1;
        }
    }

    tracing::warn!(files = stats.files, blobs = blobs_deleted, "Purged all data");

    Ok(JSend::success(PurgeResponse {
        files_deleted: stats.files,
        blobs_deleted,
    }))
}
