//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod contest;
pub mod lecture;
pub mod problem;
pub mod submission;
pub mod user;

pub use contest::*;
pub use lecture::*;
pub use problem::*;
pub use submission::*;
pub use user::*;
