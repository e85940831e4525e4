//! User administration service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::{admin_types, MIN_PASSWORD_LENGTH, SECRET_TOKEN_LENGTH},
    db::repositories::{UserAdminUpdate, UserRepository},
    error::{AppError, AppResult},
    handlers::admin::request::EditUserRequest,
    models::{problem_permission_for, NewUser, User},
    utils::{crypto, validation},
};

/// Admin service for user management
pub struct AdminService;

impl AdminService {
    /// Create users from `[username, password, email]` rows in one transaction.
    ///
    /// Any malformed row rejects the whole import before anything is written.
    pub async fn import_users(pool: &PgPool, rows: Vec<Vec<String>>) -> AppResult<usize> {
        for row in &rows {
            validation::validate_import_row(row).map_err(AppError::Validation)?;
        }
        if rows.is_empty() {
            return Ok(0);
        }

        let users = tokio::task::spawn_blocking(move || {
            rows.into_iter()
                .map(|mut row| {
                    let email = row.pop().filter(|e| !e.is_empty());
                    let password = row.pop().unwrap_or_default();
                    let username = row.pop().unwrap_or_default();
                    Ok(NewUser {
                        username,
                        email,
                        password_hash: crypto::hash_password(&password)?,
                    })
                })
                .collect::<AppResult<Vec<_>>>()
        })
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing task failed: {}", e)))??;

        let mut tx = pool.begin().await?;
        let ids = UserRepository::bulk_create(&mut tx, &users).await?;
        tx.commit().await?;

        tracing::info!(count = ids.len(), "Imported users");
        Ok(ids.len())
    }

    /// Apply an administrator's edit to a user
    pub async fn edit_user(pool: &PgPool, req: &EditUserRequest) -> AppResult<User> {
        validation::validate_admin_type(&req.admin_type)
            .map_err(|e| AppError::Validation(e.to_string()))?;
        validation::validate_problem_permission(&req.problem_permission)
            .map_err(|e| AppError::Validation(e.to_string()))?;
        if let Some(password) = req.new_password() {
            if (password.chars().count() as u64) < MIN_PASSWORD_LENGTH {
                return Err(AppError::Validation(
                    "Password must be at least 6 characters".to_string(),
                ));
            }
        }

        let username = req.username.to_lowercase();
        let email = req.email.to_lowercase();
        let password_hash = match req.new_password().map(str::to_string) {
            Some(password) => Some(
                tokio::task::spawn_blocking(move || crypto::hash_password(&password))
                    .await
                    .map_err(|e| {
                        AppError::Internal(anyhow::anyhow!("Password hashing task failed: {}", e))
                    })??,
            ),
            None => None,
        };

        let mut tx = pool.begin().await?;

        let user = UserRepository::find_by_id_for_update(&mut tx, &req.id)
            .await?
            .ok_or_else(|| AppError::NotFound("User does not exist".to_string()))?;

        if UserRepository::username_taken_by_other(&mut tx, &username, &user.id).await? {
            return Err(AppError::AlreadyExists("Username already exists".to_string()));
        }
        if UserRepository::email_taken_by_other(&mut tx, &email, &user.id).await? {
            return Err(AppError::AlreadyExists("Email already exists".to_string()));
        }

        let open_api_appkey =
            carry_secret(req.open_api, user.open_api, user.open_api_appkey.clone());
        let tfa_token =
            carry_secret(req.two_factor_auth, user.two_factor_auth, user.tfa_token.clone());

        let update = UserAdminUpdate {
            username: &username,
            email: &email,
            realname: req.realname.as_deref(),
            admin_type: &req.admin_type,
            problem_permission: problem_permission_for(&req.admin_type, &req.problem_permission),
            is_disabled: req.is_disabled,
            password_hash: password_hash.as_deref(),
            open_api: req.open_api,
            open_api_appkey: open_api_appkey.as_deref(),
            two_factor_auth: req.two_factor_auth,
            tfa_token: tfa_token.as_deref(),
        };
        let updated = UserRepository::update_admin(&mut tx, &user.id, &update).await?;

        if user.username != updated.username {
            let renamed =
                UserRepository::rename_submissions(&mut tx, &user.username, &updated.username)
                    .await?;
            tracing::debug!(
                old = %user.username,
                new = %updated.username,
                submissions = renamed,
                "Renamed submission authors"
            );
        }

        tx.commit().await?;

        tracing::info!(
            user_id = %updated.id,
            username = %updated.username,
            "User updated by admin"
        );
        Ok(updated)
    }

    /// Get user by ID
    pub async fn get_user(pool: &PgPool, id: &Uuid) -> AppResult<User> {
        UserRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("User does not exist".to_string()))
    }

    /// List users newest first, optionally filtered by keyword
    pub async fn list_users(
        pool: &PgPool,
        keyword: Option<&str>,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<User>, i64)> {
        let keyword = keyword.map(str::trim).filter(|k| !k.is_empty());
        UserRepository::list(pool, keyword, offset, limit).await
    }

    /// List accounts of an admin type, always including super admins
    pub async fn list_admins(
        pool: &PgPool,
        admin_type: &str,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<User>, i64)> {
        UserRepository::list_by_admin_type(
            pool,
            admin_type,
            admin_types::SUPER_ADMIN,
            offset,
            limit,
        )
        .await
    }

    /// Delete users by comma separated IDs; the requester cannot delete themself
    pub async fn delete_users(pool: &PgPool, requester_id: &Uuid, raw_ids: &str) -> AppResult<u64> {
        let ids = validation::parse_id_list(raw_ids).map_err(AppError::Validation)?;
        if ids.is_empty() {
            return Err(AppError::Validation(
                "Invalid Parameter, id is required".to_string(),
            ));
        }
        if ids.contains(requester_id) {
            return Err(AppError::Forbidden(
                "Current user can not be deleted".to_string(),
            ));
        }

        let deleted = UserRepository::delete_many(pool, &ids).await?;
        tracing::info!(requested = ids.len(), deleted, "Deleted users");
        Ok(deleted)
    }
}

/// Secret that goes with an on/off switch: cleared when off, kept while it
/// stays on, freshly generated when switched on.
fn carry_secret(enabled: bool, was_enabled: bool, current: Option<String>) -> Option<String> {
    if !enabled {
        return None;
    }
    match current {
        Some(secret) if was_enabled => Some(secret),
        _ => Some(crypto::generate_secure_token(SECRET_TOKEN_LENGTH)),
    }
}
