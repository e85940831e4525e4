//! Utility functions

pub mod crypto;
pub mod validation;

pub use crypto::{generate_secure_token, hash_password, verify_password};
pub use validation::{parse_id_list, validate_file_id, validate_import_row};
