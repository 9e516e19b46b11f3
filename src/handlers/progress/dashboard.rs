use axum::{
    extract::{Query, State},
    http::HeaderMap,
    Json,
};

use crate::{
    AppState,
    data::models::{ApiResponse, LanguageFilter, LearningStats, ProgressError},
    utils::current_user_id,
};

pub async fn dashboard(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(filter): Query<LanguageFilter>,
) -> Result<Json<ApiResponse<LearningStats>>, ProgressError> {
    let user_id = current_user_id(&headers, &state.config);
    let stats = state
        .service
        .learning_stats(&user_id, filter.language_id.as_deref())?;

    Ok(Json(ApiResponse::ok(stats)))
}
