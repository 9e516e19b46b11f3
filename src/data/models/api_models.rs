use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request payload for recording a review.
///
/// Either `correct` or an explicit `quality` must be present.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WordReviewRequest {
    #[validate(length(min = 1, message = "Invalid word ID"))]
    pub word_id: String,
    pub correct: Option<bool>,
    #[validate(range(max = 5, message = "Quality must be between 0 and 5"))]
    pub quality: Option<u8>,
    #[validate(range(min = 0.0, message = "Response time must be positive"))]
    pub response_time: Option<f64>, // Seconds
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageFilter {
    pub language_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DueWordsParams {
    pub language_id: Option<String>,
    pub limit: Option<usize>,
}

/// Standard API envelope
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self { success: true, data }
    }
}
