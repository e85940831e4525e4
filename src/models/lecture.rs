//! Lecture and roster models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Lecture database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Lecture {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub status: bool,
    pub created_by: Option<Uuid>,
    pub create_time: DateTime<Utc>,
}

/// Roster row binding a student to a lecture or a contest
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct SignupClass {
    pub id: Uuid,
    pub lecture_id: Option<Uuid>,
    pub contest_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub realname: Option<String>,
    pub schoolssn: Option<String>,
    pub isallow: bool,
    pub created_at: DateTime<Utc>,
}

/// Teaching assistant assignment to a lecture
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct TaAdminClass {
    pub id: Uuid,
    pub user_id: Uuid,
    pub lecture_id: Uuid,
    pub realname: Option<String>,
    /// Whether the TA may read the lecture's score reports
    pub score_isallow: bool,
}
