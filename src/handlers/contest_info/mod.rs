//! Public contest information

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Contest info routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/contest_info", get(handler::contest_score_sheet))
}
