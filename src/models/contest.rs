//! Contest model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::constants::contest_kinds;

/// Contest database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Contest {
    pub id: Uuid,
    pub title: String,
    pub lecture_id: Option<Uuid>,
    pub lecture_contest_type: Option<String>,
    pub rule_type: String,
    pub create_time: DateTime<Utc>,
}

/// Kind of a lecture contest, tallied separately in score reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContestKind {
    Practice,
    Assignment,
}

impl ContestKind {
    /// Get kind as string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Practice => contest_kinds::PRACTICE,
            Self::Assignment => contest_kinds::ASSIGNMENT,
        }
    }

    /// Parse kind from the stored column; anything else is not tallied
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            contest_kinds::PRACTICE => Some(Self::Practice),
            contest_kinds::ASSIGNMENT => Some(Self::Assignment),
            _ => None,
        }
    }
}

impl std::fmt::Display for ContestKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// OI rank record: one user's scores in one contest
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct OiContestRank {
    pub id: Uuid,
    pub contest_id: Uuid,
    pub user_id: Uuid,
    pub total_score: i32,
    /// Object mapping problem id to score
    pub submission_info: serde_json::Value,
}
