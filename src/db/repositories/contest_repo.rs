//! Contest repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Contest, OiContestRank},
};

/// Repository for contest database operations
pub struct ContestRepository;

impl ContestRepository {
    /// Find contest by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Contest>> {
        let contest = sqlx::query_as::<_, Contest>(r#"SELECT * FROM contests WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(contest)
    }

    /// OI rank records of a contest for the given users, skipping disabled accounts
    pub async fn oi_ranks_for_users(
        pool: &PgPool,
        contest_id: &Uuid,
        user_ids: &[Uuid],
    ) -> AppResult<Vec<OiContestRank>> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ranks = sqlx::query_as::<_, OiContestRank>(
            r#"
            SELECT r.* FROM oi_contest_ranks r
            JOIN users u ON u.id = r.user_id
            WHERE r.contest_id = $1 AND r.user_id = ANY($2) AND NOT u.is_disabled
            "#,
        )
        .bind(contest_id)
        .bind(user_ids)
        .fetch_all(pool)
        .await?;

        Ok(ranks)
    }
}
