use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::data::models::ProgressError;

impl IntoResponse for ProgressError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ProgressError::WordNotFound(_) | ProgressError::ProgressNotFound(_) => {
                (StatusCode::NOT_FOUND, self.to_string())
            }
            ProgressError::InvalidReview(_) | ProgressError::ValidationError(_) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            ProgressError::DatabaseError(e) => {
                log::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Database error: {}", e),
                )
            }
            ProgressError::PoolError(e) => {
                log::error!("Failed to get DB connection: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to get DB connection".to_string(),
                )
            }
        };

        let body = json!({
            "success": false,
            "error": message,
            "status": status.as_u16()
        });

        (status, axum::Json(body)).into_response()
    }
}
