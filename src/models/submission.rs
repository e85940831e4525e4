//! Submission model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::constants::VERDICT_ACCEPTED;

/// Submission database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Submission {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Denormalized author name, renamed together with the user
    pub username: String,
    pub problem_id: Uuid,
    pub contest_id: Option<Uuid>,
    pub result: String,
    pub score: Option<i32>,
    pub create_time: DateTime<Utc>,
}

impl Submission {
    /// Check if the submission solved its problem
    pub fn is_accepted(&self) -> bool {
        self.result == VERDICT_ACCEPTED
    }
}
