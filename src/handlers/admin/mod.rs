//! Admin management handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{routing::post, Router};

use crate::state::AppState;

/// Admin routes
pub fn routes() -> Router<AppState> {
    Router::new()
        // User management
        .route(
            "/user",
            post(handler::import_users)
                .put(handler::edit_user)
                .get(handler::list_users)
                .delete(handler::delete_users),
        )
        // Bulk generation
        .route(
            "/generate_user",
            post(handler::generate_users).get(handler::download_users),
        )
}
