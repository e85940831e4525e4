//! Authentication response DTOs

use serde::Serialize;
use uuid::Uuid;

/// Authentication token response
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: SessionUser,
}

/// The account a token was issued to
#[derive(Debug, Serialize)]
pub struct SessionUser {
    pub id: Uuid,
    pub username: String,
    pub admin_type: String,
    pub problem_permission: String,
}
