//! Authentication request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::MAX_USERNAME_LENGTH;

/// User login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = MAX_USERNAME_LENGTH))]
    pub username: String,

    #[validate(length(min = 1))]
    pub password: String,
}
