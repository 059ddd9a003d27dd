use axum::extract::State;
use axum::Json;
use std::sync::Arc;

use crate::api::response::{ApiError, AppJson, JSend};
use crate::intent::Intent;
use crate::AppState;

/// Forward a menu selection to the intent sink and echo it back.
pub async fn post_intent(
    State(state): State<Arc<AppState>>,
    AppJson(intent): AppJson<Intent>,
) -> Result<Json<JSend<Intent>>, ApiError> {
    state.intents.emit(&intent);
    Ok(JSend::success(intent))
}
