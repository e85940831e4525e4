//! Submission repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::Submission};

/// Repository for submission database operations
pub struct SubmissionRepository;

impl SubmissionRepository {
    /// Submissions of the given users to the given problems, oldest first
    pub async fn list_for_users_and_problems(
        pool: &PgPool,
        user_ids: &[Uuid],
        problem_ids: &[Uuid],
    ) -> AppResult<Vec<Submission>> {
        if user_ids.is_empty() || problem_ids.is_empty() {
            return Ok(Vec::new());
        }

        let submissions = sqlx::query_as::<_, Submission>(
            r#"
            SELECT * FROM submissions
            WHERE user_id = ANY($1) AND problem_id = ANY($2)
            ORDER BY create_time
            "#,
        )
        .bind(user_ids)
        .bind(problem_ids)
        .fetch_all(pool)
        .await?;

        Ok(submissions)
    }
}
