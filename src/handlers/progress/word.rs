use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};

use crate::{
    AppState,
    data::models::{ApiResponse, ProgressError, WordProgress},
    utils::current_user_id,
};

pub async fn word_progress(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(word_id): Path<String>,
) -> Result<Json<ApiResponse<WordProgress>>, ProgressError> {
    let user_id = current_user_id(&headers, &state.config);
    let progress = state.service.word_progress(&user_id, &word_id)?;

    Ok(Json(ApiResponse::ok(progress)))
}
