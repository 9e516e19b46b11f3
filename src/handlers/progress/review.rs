use axum::{extract::State, http::HeaderMap, Json};
use validator::Validate;

use crate::{
    AppState,
    data::models::{ApiResponse, ProgressError, WordReviewRequest},
    features::progress::{Review, ReviewOutcome},
    utils::current_user_id,
};

pub async fn record_word_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<WordReviewRequest>,
) -> Result<Json<ApiResponse<ReviewOutcome>>, ProgressError> {
    payload.validate()?;
    let review = Review::try_from(&payload)?;

    let user_id = current_user_id(&headers, &state.config);
    let outcome = state
        .service
        .record_review(&user_id, &payload.word_id, review)
        .map_err(|e| {
            log::warn!("Review for word {} failed: {}", payload.word_id, e);
            e
        })?;

    Ok(Json(ApiResponse::ok(outcome)))
}
