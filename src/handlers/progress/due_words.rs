use axum::{
    extract::{Query, State},
    http::HeaderMap,
    Json,
};

use crate::{
    AppState,
    data::models::{ApiResponse, DueWordsParams, ProgressError, WordProgress},
    utils::current_user_id,
};

pub async fn due_words(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<DueWordsParams>,
) -> Result<Json<ApiResponse<Vec<WordProgress>>>, ProgressError> {
    let user_id = current_user_id(&headers, &state.config);
    let limit = params.limit.unwrap_or(state.config.review_limit);

    let words = state
        .service
        .due_words(&user_id, params.language_id.as_deref(), limit)?;

    Ok(Json(ApiResponse::ok(words)))
}
