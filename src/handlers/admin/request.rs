//! Admin request DTOs

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::constants::{
    DEFAULT_GENERATED_PASSWORD_LENGTH, MAX_AFFIX_LENGTH, MAX_EMAIL_LENGTH,
    MAX_GENERATED_PASSWORD_LENGTH, MAX_REALNAME_LENGTH, MAX_USERNAME_LENGTH,
};

/// Import users request: rows of `[username, password, email]`
#[derive(Debug, Deserialize)]
pub struct ImportUsersRequest {
    pub users: Vec<Vec<String>>,
}

/// Edit user request
#[derive(Debug, Deserialize, Validate)]
pub struct EditUserRequest {
    pub id: Uuid,

    #[validate(length(min = 1, max = MAX_USERNAME_LENGTH))]
    pub username: String,

    #[validate(length(max = MAX_REALNAME_LENGTH))]
    pub realname: Option<String>,

    /// Blank or absent keeps the current password
    #[serde(default)]
    pub password: Option<String>,

    #[validate(email, length(max = MAX_EMAIL_LENGTH))]
    pub email: String,

    pub admin_type: String,
    pub problem_permission: String,
    pub open_api: bool,
    pub two_factor_auth: bool,
    pub is_disabled: bool,
}

impl EditUserRequest {
    /// New password, if one was given
    pub fn new_password(&self) -> Option<&str> {
        self.password.as_deref().filter(|p| !p.is_empty())
    }
}

fn default_password_length() -> u64 {
    DEFAULT_GENERATED_PASSWORD_LENGTH
}

/// Generate numbered users request
#[derive(Debug, Deserialize, Validate)]
pub struct GenerateUsersRequest {
    #[serde(default)]
    #[validate(length(max = MAX_AFFIX_LENGTH))]
    pub prefix: String,

    #[serde(default)]
    #[validate(length(max = MAX_AFFIX_LENGTH))]
    pub suffix: String,

    pub number_from: i64,
    pub number_to: i64,

    #[serde(default = "default_password_length")]
    #[validate(range(min = 1, max = MAX_GENERATED_PASSWORD_LENGTH))]
    pub password_length: u64,
}

/// Query parameters of `GET /admin/user`
#[derive(Debug, Default, Deserialize)]
pub struct UserListQuery {
    pub id: Option<String>,
    pub lectureid: Option<String>,
    pub contestid: Option<String>,
    pub admin_type: Option<String>,
    pub keyword: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Query parameters of `DELETE /admin/user`
#[derive(Debug, Deserialize)]
pub struct DeleteUsersQuery {
    /// Comma separated user ids
    pub id: Option<String>,
}

/// Query parameters of `GET /admin/generate_user`
#[derive(Debug, Deserialize)]
pub struct DownloadQuery {
    pub file_id: Option<String>,
}
