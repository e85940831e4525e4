//! CourseJudge - Administrative API
//!
//! This library provides the administrative backend for a lecture and
//! contest judge platform.
//!
//! # Features
//!
//! - User import, editing, search and bulk deletion
//! - Bulk generation of numbered accounts with an Excel credentials sheet
//! - Lecture rosters with per-student score reports
//! - Contest rosters and public contest score sheets
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Analysis**: Pure score aggregation
//! - **Export**: Credential workbook generation
//! - **Repositories**: Database access
//! - **Models**: Domain models

pub mod analysis;
pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod export;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
