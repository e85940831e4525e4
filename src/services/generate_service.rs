//! Bulk user generation service

use sqlx::PgPool;

use crate::{
    constants::MAX_GENERATED_USERS,
    db::repositories::UserRepository,
    error::{AppError, AppResult},
    export::{credentials_workbook, Credential, ExportStore},
    handlers::admin::request::GenerateUsersRequest,
    models::NewUser,
    utils::{crypto, validation},
};

/// Service creating numbered accounts with random passwords
pub struct GenerateService;

impl GenerateService {
    /// Create `prefix{n}suffix` for every n in the range, store the
    /// credential sheet and return its file id.
    pub async fn generate_users(
        pool: &PgPool,
        store: &ExportStore,
        req: &GenerateUsersRequest,
    ) -> AppResult<String> {
        validation::validate_generated_username_length(
            &req.prefix,
            &req.suffix,
            req.number_from,
            req.number_to,
        )
        .map_err(|e| AppError::Validation(e.to_string()))?;
        if req.number_from > req.number_to {
            return Err(AppError::Validation(
                "Start number must be lower than end number".to_string(),
            ));
        }

        let count = i128::from(req.number_to) - i128::from(req.number_from) + 1;
        if count > i128::from(MAX_GENERATED_USERS) {
            return Err(AppError::Validation(format!(
                "Cannot generate more than {} users at once",
                MAX_GENERATED_USERS
            )));
        }

        let credentials = plan_credentials(req);

        let (users, sheet) = tokio::task::spawn_blocking(move || -> AppResult<_> {
            let users = credentials
                .iter()
                .map(|c| {
                    Ok(NewUser {
                        username: c.username.clone(),
                        email: None,
                        password_hash: crypto::hash_password(&c.password)?,
                    })
                })
                .collect::<AppResult<Vec<_>>>()?;
            let sheet = credentials_workbook(&credentials)?;
            Ok((users, sheet))
        })
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("User generation task failed: {}", e)))??;

        let mut tx = pool.begin().await?;
        UserRepository::bulk_create(&mut tx, &users).await?;

        // sheet must exist before the accounts are committed
        let file_id = store.save(&sheet).await?;
        tx.commit().await?;

        tracing::info!(
            count = users.len(),
            prefix = %req.prefix,
            suffix = %req.suffix,
            file_id = %file_id,
            "Generated users"
        );
        Ok(file_id)
    }
}

/// Usernames and fresh random passwords for the requested range
fn plan_credentials(req: &GenerateUsersRequest) -> Vec<Credential> {
    (req.number_from..=req.number_to)
        .map(|n| Credential {
            username: format!("{}{}{}", req.prefix, n, req.suffix),
            password: crypto::generate_secure_token(req.password_length as usize),
        })
        .collect()
}
