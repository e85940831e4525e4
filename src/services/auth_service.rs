//! Authentication service

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::{
    config::JwtConfig,
    db::repositories::UserRepository,
    error::{AppError, AppResult},
    models::User,
    utils::crypto,
};

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user_id
    pub username: String,
    pub admin_type: String,
    pub exp: i64,
    pub iat: i64,
}

/// Authentication service
pub struct AuthService;

impl AuthService {
    /// Login with username and password
    pub async fn login(
        pool: &PgPool,
        jwt: &JwtConfig,
        username: &str,
        password: &str,
    ) -> AppResult<(User, String, i64)> {
        let user = UserRepository::find_by_username(pool, username)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !crypto::verify_password(password, &user.password_hash)? {
            return Err(AppError::InvalidCredentials);
        }

        if user.is_disabled {
            return Err(AppError::Forbidden("Your account has been disabled".to_string()));
        }

        UserRepository::update_last_login(pool, &user.id).await?;

        let (token, expires_in) = Self::issue_token(&user, jwt)?;
        tracing::info!(user_id = %user.id, username = %user.username, "User logged in");

        Ok((user, token, expires_in))
    }

    /// Verify JWT token and extract claims
    pub fn verify_token(token: &str, secret: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }

    /// Generate an access token for a user
    pub fn issue_token(user: &User, jwt: &JwtConfig) -> AppResult<(String, i64)> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(jwt.expiry_hours);
        let expires_in = jwt.expiry_hours * 3600;

        let claims = Claims {
            sub: user.id.to_string(),
            username: user.username.clone(),
            admin_type: user.admin_type.clone(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(jwt.secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Token generation failed: {}", e)))?;

        Ok((token, expires_in))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn jwt() -> JwtConfig {
        JwtConfig {
            secret: "test-secret".to_string(),
            expiry_hours: 1,
        }
    }

    fn user() -> User {
        User {
            id: Uuid::new_v4(),
            username: "root".to_string(),
            email: None,
            password_hash: String::new(),
            realname: None,
            phonenum: None,
            admin_type: "Super Admin".to_string(),
            problem_permission: "All".to_string(),
            is_disabled: false,
            open_api: false,
            open_api_appkey: None,
            two_factor_auth: false,
            tfa_token: None,
            create_time: Utc::now(),
            last_login: None,
        }
    }

    #[test]
    fn test_issue_and_verify_token() {
        let user = user();
        let (token, expires_in) = AuthService::issue_token(&user, &jwt()).unwrap();
        assert_eq!(expires_in, 3600);

        let claims = AuthService::verify_token(&token, "test-secret").unwrap();
        assert_eq!(claims.sub, user.id.to_string());
        assert_eq!(claims.admin_type, "Super Admin");
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let (token, _) = AuthService::issue_token(&user(), &jwt()).unwrap();
        let err = AuthService::verify_token(&token, "other-secret").unwrap_err();
        assert!(matches!(err, AppError::InvalidToken));
    }

    #[test]
    fn test_expired_token_rejected() {
        let config = JwtConfig {
            secret: "test-secret".to_string(),
            expiry_hours: -2,
        };
        let (token, _) = AuthService::issue_token(&user(), &config).unwrap();
        let err = AuthService::verify_token(&token, "test-secret").unwrap_err();
        assert!(matches!(err, AppError::TokenExpired));
    }
}
