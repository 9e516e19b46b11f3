use axum::{
    extract::{Json, State},
    routing::post,
    Router,
};
use validator::Validate;

use crate::{
    AppState,
    data::models::{ApiResponse, NewWord, ProgressError},
};

pub async fn add_word(
    State(state): State<AppState>,
    Json(payload): Json<NewWord>,
) -> Result<Json<ApiResponse<NewWord>>, ProgressError> {
    payload.validate()?;
    state.service.add_word(&payload)?;

    log::info!("Word {} saved to catalog", payload.word_id);
    Ok(Json(ApiResponse::ok(payload)))
}

pub fn words_router(state: AppState) -> Router {
    Router::new()
        .route("/", post(add_word))
        .with_state(state)
}
