//! Lecture repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Lecture, TaAdminClass},
};

/// Repository for lecture database operations
pub struct LectureRepository;

impl LectureRepository {
    /// Find lecture by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Lecture>> {
        let lecture = sqlx::query_as::<_, Lecture>(r#"SELECT * FROM lectures WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(lecture)
    }

    /// TA assignment of a user to a lecture, if any
    pub async fn find_ta(
        pool: &PgPool,
        user_id: &Uuid,
        lecture_id: &Uuid,
    ) -> AppResult<Option<TaAdminClass>> {
        let ta = sqlx::query_as::<_, TaAdminClass>(
            r#"SELECT * FROM ta_admin_class WHERE user_id = $1 AND lecture_id = $2"#,
        )
        .bind(user_id)
        .bind(lecture_id)
        .fetch_optional(pool)
        .await?;

        Ok(ta)
    }
}
