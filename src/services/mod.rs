//! Business logic services

pub mod admin_service;
pub mod auth_service;
pub mod generate_service;
pub mod roster_service;

pub use admin_service::AdminService;
pub use auth_service::AuthService;
pub use generate_service::GenerateService;
pub use roster_service::RosterService;
