//! User repository

use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{NewUser, User},
};

/// Admin-editable columns of a user
#[derive(Debug, Clone)]
pub struct UserAdminUpdate<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub realname: Option<&'a str>,
    pub admin_type: &'a str,
    pub problem_permission: &'a str,
    pub is_disabled: bool,
    pub password_hash: Option<&'a str>,
    pub open_api: bool,
    pub open_api_appkey: Option<&'a str>,
    pub two_factor_auth: bool,
    pub tfa_token: Option<&'a str>,
}

/// Repository for user database operations
pub struct UserRepository;

impl UserRepository {
    /// Insert users and one empty profile per user.
    ///
    /// Runs on the caller's connection so it can share a transaction.
    pub async fn bulk_create(conn: &mut PgConnection, users: &[NewUser]) -> AppResult<Vec<Uuid>> {
        let usernames: Vec<&str> = users.iter().map(|u| u.username.as_str()).collect();
        let emails: Vec<Option<&str>> = users.iter().map(|u| u.email.as_deref()).collect();
        let hashes: Vec<&str> = users.iter().map(|u| u.password_hash.as_str()).collect();

        let ids: Vec<Uuid> = sqlx::query_scalar(
            r#"
            INSERT INTO users (username, email, password_hash)
            SELECT * FROM UNNEST($1::text[], $2::text[], $3::text[])
            RETURNING id
            "#,
        )
        .bind(&usernames)
        .bind(&emails)
        .bind(&hashes)
        .fetch_all(&mut *conn)
        .await?;

        sqlx::query(r#"INSERT INTO user_profiles (user_id) SELECT UNNEST($1::uuid[])"#)
            .bind(&ids)
            .execute(&mut *conn)
            .await?;

        Ok(ids)
    }

    /// Find user by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    /// Find user by ID, locking the row for update
    pub async fn find_by_id_for_update(
        conn: &mut PgConnection,
        id: &Uuid,
    ) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE id = $1 FOR UPDATE"#)
            .bind(id)
            .fetch_optional(conn)
            .await?;

        Ok(user)
    }

    /// Find user by username
    pub async fn find_by_username(pool: &PgPool, username: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE username = $1"#)
            .bind(username)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    /// Whether another user already has this username
    pub async fn username_taken_by_other(
        conn: &mut PgConnection,
        username: &str,
        id: &Uuid,
    ) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"SELECT EXISTS (SELECT 1 FROM users WHERE username = $1 AND id <> $2)"#,
        )
        .bind(username)
        .bind(id)
        .fetch_one(conn)
        .await?;

        Ok(exists)
    }

    /// Whether another user already has this email
    pub async fn email_taken_by_other(
        conn: &mut PgConnection,
        email: &str,
        id: &Uuid,
    ) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"SELECT EXISTS (SELECT 1 FROM users WHERE email = $1 AND id <> $2)"#,
        )
        .bind(email)
        .bind(id)
        .fetch_one(conn)
        .await?;

        Ok(exists)
    }

    /// Apply an admin edit
    pub async fn update_admin(
        conn: &mut PgConnection,
        id: &Uuid,
        update: &UserAdminUpdate<'_>,
    ) -> AppResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET
                username = $2,
                email = $3,
                realname = $4,
                admin_type = $5,
                problem_permission = $6,
                is_disabled = $7,
                password_hash = COALESCE($8, password_hash),
                open_api = $9,
                open_api_appkey = $10,
                two_factor_auth = $11,
                tfa_token = $12
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(update.username)
        .bind(update.email)
        .bind(update.realname)
        .bind(update.admin_type)
        .bind(update.problem_permission)
        .bind(update.is_disabled)
        .bind(update.password_hash)
        .bind(update.open_api)
        .bind(update.open_api_appkey)
        .bind(update.two_factor_auth)
        .bind(update.tfa_token)
        .fetch_one(conn)
        .await?;

        Ok(user)
    }

    /// Rename the denormalized author name on a user's submissions
    pub async fn rename_submissions(
        conn: &mut PgConnection,
        old_username: &str,
        new_username: &str,
    ) -> AppResult<u64> {
        let result = sqlx::query(r#"UPDATE submissions SET username = $2 WHERE username = $1"#)
            .bind(old_username)
            .bind(new_username)
            .execute(conn)
            .await?;

        Ok(result.rows_affected())
    }

    /// List users, newest first, optionally filtered by keyword
    pub async fn list(
        pool: &PgPool,
        keyword: Option<&str>,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<User>, i64)> {
        let pattern = keyword.map(|k| format!("%{}%", escape_like(k)));

        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT u.* FROM users u
            LEFT JOIN user_profiles p ON p.user_id = u.id
            WHERE
                $1::text IS NULL
                OR u.phonenum ILIKE $1 ESCAPE '\'
                OR u.realname ILIKE $1 ESCAPE '\'
                OR u.username ILIKE $1 ESCAPE '\'
                OR p.real_name ILIKE $1 ESCAPE '\'
                OR u.email ILIKE $1 ESCAPE '\'
            ORDER BY u.create_time DESC
            OFFSET $2 LIMIT $3
            "#,
        )
        .bind(&pattern)
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM users u
            LEFT JOIN user_profiles p ON p.user_id = u.id
            WHERE
                $1::text IS NULL
                OR u.phonenum ILIKE $1 ESCAPE '\'
                OR u.realname ILIKE $1 ESCAPE '\'
                OR u.username ILIKE $1 ESCAPE '\'
                OR p.real_name ILIKE $1 ESCAPE '\'
                OR u.email ILIKE $1 ESCAPE '\'
            "#,
        )
        .bind(&pattern)
        .fetch_one(pool)
        .await?;

        Ok((users, total))
    }

    /// List users of one admin type together with every super admin
    pub async fn list_by_admin_type(
        pool: &PgPool,
        admin_type: &str,
        super_admin: &str,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<User>, i64)> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT * FROM users
            WHERE admin_type = $1 OR admin_type = $2
            ORDER BY create_time DESC
            OFFSET $3 LIMIT $4
            "#,
        )
        .bind(admin_type)
        .bind(super_admin)
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let total: i64 = sqlx::query_scalar(
            r#"SELECT COUNT(*) FROM users WHERE admin_type = $1 OR admin_type = $2"#,
        )
        .bind(admin_type)
        .bind(super_admin)
        .fetch_one(pool)
        .await?;

        Ok((users, total))
    }

    /// Delete users by ID, returning how many rows were removed
    pub async fn delete_many(pool: &PgPool, ids: &[Uuid]) -> AppResult<u64> {
        let result = sqlx::query(r#"DELETE FROM users WHERE id = ANY($1)"#)
            .bind(ids)
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Update last login time
    pub async fn update_last_login(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        sqlx::query(r#"UPDATE users SET last_login = NOW() WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }
}

/// Escape `LIKE` metacharacters so the keyword matches literally
fn escape_like(keyword: &str) -> String {
    let mut escaped = String::with_capacity(keyword.len());
    for c in keyword.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
