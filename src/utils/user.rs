use axum::http::HeaderMap;

use crate::config::AppConfig;

pub const USER_HEADER: &str = "x-user-id";

/// The acting user: the `x-user-id` header, or the configured default user.
pub fn current_user_id(headers: &HeaderMap, config: &AppConfig) -> String {
    match headers.get(USER_HEADER).map(|value| value.to_str()) {
        Some(Ok(id)) if !id.trim().is_empty() => id.trim().to_string(),
        Some(Err(e)) => {
            log::warn!("Ignoring unreadable {} header: {}", USER_HEADER, e);
            config.default_user_id.clone()
        }
        _ => config.default_user_id.clone(),
    }
}
