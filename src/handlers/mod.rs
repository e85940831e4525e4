//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod admin;
pub mod auth;
pub mod contest_info;
pub mod envelope;
pub mod health;

use axum::{middleware, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    constants::API_BASE_PATH,
    middleware::{auth::auth_middleware, logging::logging_middleware},
    state::AppState,
};

/// Create all API routes
pub fn routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(contest_info::routes())
        .nest("/auth", auth::routes())
        .nest(
            "/admin",
            admin::routes().route_layer(middleware::from_fn_with_state(
                state.clone(),
                auth_middleware,
            )),
        )
}

/// Build the application with its middleware stack
pub fn app(state: AppState) -> Router {
    Router::new()
        .nest(API_BASE_PATH, routes(&state))
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use chrono::Utc;
    use tower::ServiceExt;
    use uuid::Uuid;

    use super::*;
    use crate::{
        config::{Config, DatabaseConfig, ExportConfig, JwtConfig, ServerConfig},
        export::ExportStore,
        models::User,
        services::AuthService,
        test_utils::lazy_pool,
    };

    fn test_config(export_dir: &Path) -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                rust_log: "info".to_string(),
            },
            database: DatabaseConfig {
                url: "postgres://coursejudge@127.0.0.1:1/coursejudge".to_string(),
                max_connections: 1,
            },
            jwt: JwtConfig {
                secret: "router-test-secret".to_string(),
                expiry_hours: 1,
            },
            export: ExportConfig {
                dir: export_dir.to_path_buf(),
            },
        }
    }

    fn test_state(export_dir: &Path) -> AppState {
        AppState::new(lazy_pool(), test_config(export_dir))
    }

    fn bearer(state: &AppState, admin_type: &str) -> String {
        bearer_for(state, Uuid::new_v4(), admin_type)
    }

    fn bearer_for(state: &AppState, id: Uuid, admin_type: &str) -> String {
        let user = User {
            id,
            username: "root".to_string(),
            email: None,
            password_hash: String::new(),
            realname: None,
            phonenum: None,
            admin_type: admin_type.to_string(),
            problem_permission: "None".to_string(),
            is_disabled: false,
            open_api: false,
            open_api_appkey: None,
            two_factor_auth: false,
            tfa_token: None,
            create_time: Utc::now(),
            last_login: None,
        };
        let (token, _) = AuthService::issue_token(&user, &state.config().jwt).unwrap();
        format!("Bearer {}", token)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_unreachable_database() {
        let dir = tempfile::tempdir().unwrap();
        let response = app(test_state(dir.path()))
            .oneshot(Request::get("/api/v1/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "degraded");
        assert_eq!(json["database"], false);
    }

    #[tokio::test]
    async fn test_admin_routes_require_token() {
        let dir = tempfile::tempdir().unwrap();
        let response = app(test_state(dir.path()))
            .oneshot(Request::get("/api/v1/admin/user").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let json = body_json(response).await;
        assert_eq!(json["error"], "UNAUTHORIZED");
    }

    #[tokio::test]
    async fn test_regular_user_cannot_list_users() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path());
        let token = bearer(&state, "Regular User");

        let response = app(state)
            .oneshot(
                Request::get("/api/v1/admin/user")
                    .header(header::AUTHORIZATION, token)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_contest_info_without_contest_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let response = app(test_state(dir.path()))
            .oneshot(Request::get("/api/v1/contest_info").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert!(json["error"].is_null());
        assert!(json["data"].is_null());
    }

    #[tokio::test]
    async fn test_download_is_one_shot() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path());
        let token = bearer(&state, "Super Admin");
        let file_id = ExportStore::new(dir.path().to_path_buf())
            .save(b"sheet")
            .await
            .unwrap();
        let uri = format!("/api/v1/admin/generate_user?file_id={}", file_id);
        let router = app(state);

        let response = router
            .clone()
            .oneshot(
                Request::get(&uri)
                    .header(header::AUTHORIZATION, &token)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=users.xlsx"
        );
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/xlsx");
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"sheet");

        let response = router
            .oneshot(
                Request::get(&uri)
                    .header(header::AUTHORIZATION, &token)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["data"], "File does not exist");
    }

    #[tokio::test]
    async fn test_download_rejects_illegal_file_id() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path());
        let token = bearer(&state, "Super Admin");

        let response = app(state)
            .oneshot(
                Request::get("/api/v1/admin/generate_user?file_id=..%2Fetc")
                    .header(header::AUTHORIZATION, token)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["data"], "Illegal file_id");
    }

    #[tokio::test]
    async fn test_current_user_cannot_delete_themself() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path());
        let me = Uuid::new_v4();
        let token = bearer_for(&state, me, "Super Admin");
        let uri = format!("/api/v1/admin/user?id={},{}", Uuid::new_v4(), me);

        let response = app(state)
            .oneshot(
                Request::delete(&uri)
                    .header(header::AUTHORIZATION, token)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(body_json(response).await["data"], "Current user can not be deleted");
    }

    #[tokio::test]
    async fn test_delete_requires_ids() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path());
        let token = bearer(&state, "Super Admin");

        let response = app(state)
            .oneshot(
                Request::delete("/api/v1/admin/user")
                    .header(header::AUTHORIZATION, token)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["data"], "Invalid Parameter, id is required");
    }
}
