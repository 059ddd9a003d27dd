use axum::extract::{Path, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::api::response::ApiError;
use crate::file_store::URL_PREFIX;
use crate::AppState;

/// Serve blob bytes by reference path.
/// Route: GET /uploads/*name
pub async fn serve_upload(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Response, ApiError> {
    let reference = format!("{URL_PREFIX}{name}");
    let data = state.file_store.read(&reference).await?;

    // Prefer the recorded MIME type; blobs without a record fall back to a guess
    let mime_type = match state.db.get_file_by_url(&reference)? {
        Some(file) => file.mime_type,
        None => mime_guess::from_path(&name)
            .first_or_octet_stream()
            .to_string(),
    };

    let mut response = (StatusCode::OK, data).into_response();
    let headers = response.headers_mut();

    headers.insert(
        header::CONTENT_TYPE,
        mime_type
            .parse()
            .unwrap_or(HeaderValue::from_static("application/octet-stream")),
    );

    // Stored blobs are never rewritten in place
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static("public, max-age=3600"),
    );

    Ok(response)
}
