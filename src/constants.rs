//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// AUTHENTICATION DEFAULTS
// =============================================================================

/// Default JWT token expiry in hours
pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;

/// Minimum password length when an admin sets one
pub const MIN_PASSWORD_LENGTH: u64 = 6;

/// Username maximum length
pub const MAX_USERNAME_LENGTH: u64 = 32;

/// Real name maximum length
pub const MAX_REALNAME_LENGTH: u64 = 32;

/// Email maximum length
pub const MAX_EMAIL_LENGTH: u64 = 64;

/// Length of generated open api app keys and 2FA tokens
pub const SECRET_TOKEN_LENGTH: usize = 32;

// =============================================================================
// USER IMPORT / GENERATION
// =============================================================================

/// Maximum length of each field in an imported user row
pub const MAX_IMPORT_FIELD_LENGTH: usize = 64;

/// Maximum prefix / suffix length for generated usernames
pub const MAX_AFFIX_LENGTH: u64 = 16;

/// Default generated password length
pub const DEFAULT_GENERATED_PASSWORD_LENGTH: u64 = 8;

/// Maximum generated password length
pub const MAX_GENERATED_PASSWORD_LENGTH: u64 = 16;

/// Maximum number of accounts created by one generate request
pub const MAX_GENERATED_USERS: i64 = 1000;

/// Length of the random export file id
pub const EXPORT_FILE_ID_LENGTH: usize = 8;

/// Default directory for generated credential workbooks
pub const DEFAULT_EXPORT_DIR: &str = "/tmp";

/// Download file name presented to the browser
pub const EXPORT_DOWNLOAD_NAME: &str = "users.xlsx";

/// Content type of the credential workbook download
pub const EXPORT_CONTENT_TYPE: &str = "application/xlsx";

// =============================================================================
// ADMIN TYPES
// =============================================================================

/// Admin type identifiers as stored in `users.admin_type`
pub mod admin_types {
    pub const REGULAR_USER: &str = "Regular User";
    pub const ADMIN: &str = "Admin";
    pub const TA_ADMIN: &str = "TA Admin";
    pub const SUPER_ADMIN: &str = "Super Admin";

    /// All admin types
    pub const ALL: &[&str] = &[REGULAR_USER, ADMIN, TA_ADMIN, SUPER_ADMIN];
}

/// Problem permission identifiers as stored in `users.problem_permission`
pub mod problem_permissions {
    pub const NONE: &str = "None";
    pub const OWN: &str = "Own";
    pub const SEMI: &str = "Semi";
    pub const ALL_PROBLEMS: &str = "All";

    /// All problem permissions
    pub const ALL: &[&str] = &[NONE, OWN, SEMI, ALL_PROBLEMS];
}

// =============================================================================
// LECTURE CONTESTS
// =============================================================================

/// Lecture contest kinds
pub mod contest_kinds {
    pub const PRACTICE: &str = "practice";
    pub const ASSIGNMENT: &str = "assignment";
}

/// Submission verdict that counts as solved
pub const VERDICT_ACCEPTED: &str = "accepted";

// =============================================================================
// API VERSIONING
// =============================================================================

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";

// =============================================================================
// PAGINATION
// =============================================================================

/// Default page size for paginated results
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size for paginated results
pub const MAX_PAGE_SIZE: i64 = 250;
