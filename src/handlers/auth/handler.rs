//! Authentication handler implementations

use axum::{extract::State, Json};
use validator::Validate;

use crate::{
    error::AppResult,
    handlers::envelope::ApiResponse,
    services::AuthService,
    state::AppState,
};

use super::{
    request::LoginRequest,
    response::{AuthResponse, SessionUser},
};

/// Login with username and password
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<ApiResponse<AuthResponse>>> {
    payload.validate()?;

    let (user, access_token, expires_in) = AuthService::login(
        state.db(),
        &state.config().jwt,
        &payload.username,
        &payload.password,
    )
    .await?;

    Ok(ApiResponse::ok(AuthResponse {
        access_token,
        token_type: "Bearer".to_string(),
        expires_in,
        user: SessionUser {
            id: user.id,
            username: user.username,
            admin_type: user.admin_type,
            problem_permission: user.problem_permission,
        },
    }))
}
