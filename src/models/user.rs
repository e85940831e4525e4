//! User model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::constants::{admin_types, problem_permissions};

/// User database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: Option<String>,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub realname: Option<String>,
    pub phonenum: Option<String>,
    pub admin_type: String,
    pub problem_permission: String,
    pub is_disabled: bool,
    pub open_api: bool,
    pub open_api_appkey: Option<String>,
    pub two_factor_auth: bool,
    #[serde(skip_serializing)]
    pub tfa_token: Option<String>,
    pub create_time: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

/// Admin and Super Admin accounts are left out of student rosters
pub fn is_admin_type(admin_type: &str) -> bool {
    matches!(admin_type, admin_types::ADMIN | admin_types::SUPER_ADMIN)
}

/// Problem permission that goes with an admin type.
///
/// Only plain admins keep the permission they were given; super admins
/// always get every problem and everybody else gets none.
pub fn problem_permission_for(admin_type: &str, requested: &str) -> &'static str {
    match admin_type {
        admin_types::ADMIN => problem_permissions::ALL
            .iter()
            .copied()
            .find(|p| *p == requested)
            .unwrap_or(problem_permissions::NONE),
        admin_types::SUPER_ADMIN => problem_permissions::ALL_PROBLEMS,
        _ => problem_permissions::NONE,
    }
}

/// A user about to be inserted, with its password already hashed
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: Option<String>,
    pub password_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_problem_permission_follows_admin_type() {
        assert_eq!(problem_permission_for(admin_types::ADMIN, "Own"), "Own");
        assert_eq!(problem_permission_for(admin_types::ADMIN, "bogus"), "None");
        assert_eq!(problem_permission_for(admin_types::SUPER_ADMIN, "None"), "All");
        assert_eq!(problem_permission_for(admin_types::TA_ADMIN, "All"), "None");
        assert_eq!(problem_permission_for(admin_types::REGULAR_USER, "Semi"), "None");
    }

    #[test]
    fn test_is_admin_type() {
        assert!(is_admin_type("Admin"));
        assert!(is_admin_type("Super Admin"));
        assert!(!is_admin_type("TA Admin"));
        assert!(!is_admin_type("Regular User"));
    }
}
