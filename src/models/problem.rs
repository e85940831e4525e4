//! Problem model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Problem database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Problem {
    pub id: Uuid,
    /// Public display id (`_id`), unique within a contest
    pub display_id: String,
    pub contest_id: Option<Uuid>,
    pub title: String,
    pub total_score: i32,
    pub create_time: DateTime<Utc>,
}

/// Problem of a lecture together with the kind of contest it belongs to
#[derive(Debug, Clone, FromRow)]
pub struct LectureProblem {
    pub id: Uuid,
    pub display_id: String,
    pub contest_id: Uuid,
    pub lecture_contest_type: Option<String>,
    pub total_score: i32,
}
