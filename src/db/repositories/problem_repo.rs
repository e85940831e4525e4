//! Problem repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{LectureProblem, Problem},
};

/// Repository for problem database operations
pub struct ProblemRepository;

impl ProblemRepository {
    /// Problems of a contest, newest first
    pub async fn list_by_contest(pool: &PgPool, contest_id: &Uuid) -> AppResult<Vec<Problem>> {
        let problems = sqlx::query_as::<_, Problem>(
            r#"SELECT * FROM problems WHERE contest_id = $1 ORDER BY create_time DESC"#,
        )
        .bind(contest_id)
        .fetch_all(pool)
        .await?;

        Ok(problems)
    }

    /// Problems of every contest belonging to a lecture
    pub async fn list_by_lecture(
        pool: &PgPool,
        lecture_id: &Uuid,
    ) -> AppResult<Vec<LectureProblem>> {
        let problems = sqlx::query_as::<_, LectureProblem>(
            r#"
            SELECT p.id, p.display_id, c.id AS contest_id, c.lecture_contest_type, p.total_score
            FROM problems p
            JOIN contests c ON c.id = p.contest_id
            WHERE c.lecture_id = $1
            ORDER BY c.create_time, p.display_id
            "#,
        )
        .bind(lecture_id)
        .fetch_all(pool)
        .await?;

        Ok(problems)
    }
}
