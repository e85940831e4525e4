//! Admin handler implementations

use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    constants::{EXPORT_CONTENT_TYPE, EXPORT_DOWNLOAD_NAME},
    error::{AppError, AppResult},
    export::ExportStore,
    handlers::envelope::{page_window, ApiResponse, Page},
    middleware::auth::AuthenticatedUser,
    services::{AdminService, GenerateService, RosterService},
    state::AppState,
    utils::validation,
};

use super::{
    request::{
        DeleteUsersQuery, DownloadQuery, EditUserRequest, GenerateUsersRequest,
        ImportUsersRequest, UserListQuery,
    },
    response::GeneratedUsersResponse,
};

/// Parse a single id query parameter
fn parse_uuid(name: &str, raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw.trim()).map_err(|_| AppError::Validation(format!("Invalid {}", name)))
}

/// Non-empty query parameter value
fn param(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn export_store(state: &AppState) -> ExportStore {
    ExportStore::new(state.config().export.dir.clone())
}

/// Import users
pub async fn import_users(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<ImportUsersRequest>,
) -> AppResult<impl IntoResponse> {
    auth_user.require_super_admin()?;

    AdminService::import_users(state.db(), payload.users).await?;

    Ok(ApiResponse::empty())
}

/// Edit a user
pub async fn edit_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<EditUserRequest>,
) -> AppResult<impl IntoResponse> {
    auth_user.require_super_admin()?;
    payload.validate()?;

    let user = AdminService::edit_user(state.db(), &payload).await?;

    Ok(ApiResponse::ok(user))
}

/// List users, admins, or a roster depending on the query
pub async fn list_users(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Query(query): Query<UserListQuery>,
) -> AppResult<axum::response::Response> {
    let (offset, limit) = page_window(query.limit, query.offset);
    let pool = state.db();

    if let Some(admin_type) = param(&query.admin_type) {
        auth_user.require_super_admin()?;
        let (results, total) = AdminService::list_admins(pool, admin_type, offset, limit).await?;
        return Ok(ApiResponse::ok(Page { results, total }).into_response());
    }

    if let Some(raw) = param(&query.contestid) {
        auth_user.require_super_admin()?;
        let contest_id = parse_uuid("contestid", raw)?;
        let (results, total) =
            RosterService::contest_signups(pool, &contest_id, offset, limit).await?;
        return Ok(ApiResponse::ok(Page { results, total }).into_response());
    }

    if let Some(raw) = param(&query.lectureid) {
        let lecture_id = parse_uuid("lectureid", raw)?;
        if !RosterService::can_view_lecture_scores(pool, &auth_user, &lecture_id).await? {
            return Err(AppError::Forbidden(
                "No permission to view this lecture's scores".to_string(),
            ));
        }
        let (results, total) =
            RosterService::lecture_roster(pool, &lecture_id, offset, limit).await?;
        return Ok(ApiResponse::ok(Page { results, total }).into_response());
    }

    auth_user.require_admin()?;

    if let Some(raw) = param(&query.id) {
        let user_id = parse_uuid("id", raw)?;
        let user = AdminService::get_user(pool, &user_id).await?;
        return Ok(ApiResponse::ok(user).into_response());
    }

    let (results, total) =
        AdminService::list_users(pool, query.keyword.as_deref(), offset, limit).await?;
    Ok(ApiResponse::ok(Page { results, total }).into_response())
}

/// Delete users
pub async fn delete_users(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Query(query): Query<DeleteUsersQuery>,
) -> AppResult<impl IntoResponse> {
    auth_user.require_super_admin()?;

    let raw_ids = param(&query.id).ok_or_else(|| {
        AppError::Validation("Invalid Parameter, id is required".to_string())
    })?;
    AdminService::delete_users(state.db(), &auth_user.id, raw_ids).await?;

    Ok(ApiResponse::empty())
}

/// Generate numbered users and their credential sheet
pub async fn generate_users(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<GenerateUsersRequest>,
) -> AppResult<impl IntoResponse> {
    auth_user.require_super_admin()?;
    payload.validate()?;

    let file_id =
        GenerateService::generate_users(state.db(), &export_store(&state), &payload).await?;

    Ok(ApiResponse::ok(GeneratedUsersResponse { file_id }))
}

/// Download a credential sheet once
pub async fn download_users(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Query(query): Query<DownloadQuery>,
) -> AppResult<impl IntoResponse> {
    auth_user.require_super_admin()?;

    let file_id = query.file_id.unwrap_or_default();
    validation::validate_file_id(&file_id).map_err(|e| AppError::Validation(e.to_string()))?;

    let bytes = export_store(&state).take(&file_id).await?;

    Ok((
        [
            (header::CONTENT_TYPE, EXPORT_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={}", EXPORT_DOWNLOAD_NAME),
            ),
        ],
        bytes,
    ))
}
