pub mod dashboard;
pub mod due_words;
pub mod review;
pub mod word;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

pub fn progress_router(state: AppState) -> Router {
    Router::new()
        .route("/dashboard", get(dashboard::dashboard))
        .route("/word-review", post(review::record_word_review))
        .route("/due-words", get(due_words::due_words))
        .route("/words/{word_id}", get(word::word_progress))
        .with_state(state)
}
