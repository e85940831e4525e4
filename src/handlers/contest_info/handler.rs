//! Contest info handler implementations

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    handlers::envelope::{page_window, ApiResponse, Page},
    services::RosterService,
    state::AppState,
};

use super::request::ContestInfoQuery;

/// Public OI score sheet of a contest
pub async fn contest_score_sheet(
    State(state): State<AppState>,
    Query(query): Query<ContestInfoQuery>,
) -> AppResult<Response> {
    let Some(raw) = query.contest_id.as_deref().filter(|v| !v.is_empty()) else {
        return Ok(ApiResponse::empty().into_response());
    };
    let contest_id = Uuid::parse_str(raw.trim())
        .map_err(|_| AppError::Validation("Invalid contest_id".to_string()))?;

    let (offset, limit) = page_window(query.limit, query.offset);
    let (results, total) =
        RosterService::contest_score_sheet(state.db(), &contest_id, offset, limit).await?;

    Ok(ApiResponse::ok(Page { results, total }).into_response())
}
