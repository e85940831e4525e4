//! Admin response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    analysis::LectureReport,
    models::{Lecture, SignupClass, User},
};

/// Compact user view nested inside roster rows
#[derive(Debug, Clone, Serialize)]
pub struct RosterUser {
    pub id: Uuid,
    pub realname: Option<String>,
    pub username: String,
    pub email: Option<String>,
    pub admin_type: String,
    pub problem_permission: String,
    pub create_time: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
    pub two_factor_auth: bool,
    pub open_api: bool,
    pub is_disabled: bool,
}

impl From<&User> for RosterUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            realname: user.realname.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            admin_type: user.admin_type.clone(),
            problem_permission: user.problem_permission.clone(),
            create_time: user.create_time,
            last_login: user.last_login,
            two_factor_auth: user.two_factor_auth,
            open_api: user.open_api,
            is_disabled: user.is_disabled,
        }
    }
}

/// Contest roster row with its user
#[derive(Debug, Serialize)]
pub struct SignupResponse {
    #[serde(flatten)]
    pub signup: SignupClass,
    pub user: Option<RosterUser>,
}

/// Lecture roster row with its user, lecture and score report
#[derive(Debug, Serialize)]
pub struct LectureSignupResponse {
    #[serde(flatten)]
    pub signup: SignupClass,
    pub user: Option<RosterUser>,
    pub lecture: Option<Lecture>,
    #[serde(flatten)]
    pub report: LectureReport,
}

/// Generated users response
#[derive(Debug, Serialize)]
pub struct GeneratedUsersResponse {
    pub file_id: String,
}
