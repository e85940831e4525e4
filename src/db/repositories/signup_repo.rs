//! Roster (signup) repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::admin_types,
    error::AppResult,
    models::{SignupClass, User},
};

/// Admin accounts never appear in student rosters
const EXCLUDED_ADMIN_TYPES: &[&str] = &[admin_types::ADMIN, admin_types::SUPER_ADMIN];

/// Which roster to read
#[derive(Debug, Clone, Copy)]
pub enum Roster {
    Lecture(Uuid),
    Contest(Uuid),
}

/// Repository for roster database operations
pub struct SignupRepository;

impl SignupRepository {
    /// Page of a roster ordered by real name, admins excluded
    pub async fn list(
        pool: &PgPool,
        roster: Roster,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<SignupClass>, i64)> {
        let (lecture_id, contest_id) = match roster {
            Roster::Lecture(id) => (Some(id), None),
            Roster::Contest(id) => (None, Some(id)),
        };

        let signups = sqlx::query_as::<_, SignupClass>(
            r#"
            SELECT s.* FROM signup_class s
            LEFT JOIN users u ON u.id = s.user_id
            WHERE
                ($1::uuid IS NULL OR s.lecture_id = $1)
                AND ($2::uuid IS NULL OR s.contest_id = $2)
                AND (u.id IS NULL OR NOT (u.admin_type = ANY($3)))
            ORDER BY s.realname, s.created_at
            OFFSET $4 LIMIT $5
            "#,
        )
        .bind(lecture_id)
        .bind(contest_id)
        .bind(EXCLUDED_ADMIN_TYPES)
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM signup_class s
            LEFT JOIN users u ON u.id = s.user_id
            WHERE
                ($1::uuid IS NULL OR s.lecture_id = $1)
                AND ($2::uuid IS NULL OR s.contest_id = $2)
                AND (u.id IS NULL OR NOT (u.admin_type = ANY($3)))
            "#,
        )
        .bind(lecture_id)
        .bind(contest_id)
        .bind(EXCLUDED_ADMIN_TYPES)
        .fetch_one(pool)
        .await?;

        Ok((signups, total))
    }

    /// Users referenced by a page of roster rows
    pub async fn users_of(pool: &PgPool, signups: &[SignupClass]) -> AppResult<Vec<User>> {
        let ids: Vec<Uuid> = signups.iter().filter_map(|s| s.user_id).collect();
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let users = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE id = ANY($1)"#)
            .bind(&ids)
            .fetch_all(pool)
            .await?;

        Ok(users)
    }
}
