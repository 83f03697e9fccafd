//! Inbound API-key check for the JSON routes.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use super::{error::ApiError, AppState};

pub const API_KEY_HEADER: &str = "X-API-Key";

/// Reject the request with 401 unless `X-API-Key` matches the configured
/// key. An unconfigured (empty) key fails closed. Runs before any handler,
/// so no upstream call is made for unauthorized requests.
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let provided = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok());
    match provided {
        Some(key) if !state.settings.api_key.is_empty() && key == state.settings.api_key => {
            next.run(request).await
        }
        _ => ApiError::Unauthorized.into_response(),
    }
}
