//! Login stub. No credential is checked and no session is created.

use axum::extract::State;
use serde::{Deserialize, Serialize};

use super::{success, ApiJson, ApiResult};
use crate::AppState;

/// Only the username is read; any password sent along is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub redirect: String,
}

/// POST /api/login - Always succeeds.
pub async fn login(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> ApiResult<LoginResponse> {
    tracing::info!(username = %request.username, "Login");
    success(
        LoginResponse {
            redirect: "/".to_string(),
        },
        state.repo.revision_id(),
    )
}
