//! Input validation utilities

use std::sync::LazyLock;

use regex::Regex;
use uuid::Uuid;

use crate::constants::{self, MAX_IMPORT_FIELD_LENGTH, MAX_USERNAME_LENGTH};

static FILE_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]+$").expect("valid file id regex"));

/// Validate an export file id
pub fn validate_file_id(file_id: &str) -> Result<(), &'static str> {
    if file_id.is_empty() {
        return Err("Invalid Parameter, file_id is required");
    }
    if !FILE_ID_RE.is_match(file_id) {
        return Err("Illegal file_id");
    }
    Ok(())
}

/// Validate admin type
pub fn validate_admin_type(admin_type: &str) -> Result<(), &'static str> {
    if constants::admin_types::ALL.contains(&admin_type) {
        Ok(())
    } else {
        Err("Invalid admin type")
    }
}

/// Validate problem permission
pub fn validate_problem_permission(permission: &str) -> Result<(), &'static str> {
    if constants::problem_permissions::ALL.contains(&permission) {
        Ok(())
    } else {
        Err("Invalid problem permission")
    }
}

/// Validate one `[username, password, email]` row of a user import
pub fn validate_import_row(row: &[String]) -> Result<(), String> {
    let malformed = || format!("Error occurred while processing data '{:?}'", row);

    if row.len() != 3 {
        return Err(malformed());
    }
    if row[0].chars().count() as u64 > MAX_USERNAME_LENGTH {
        return Err(malformed());
    }
    if row.iter().any(|field| field.chars().count() > MAX_IMPORT_FIELD_LENGTH) {
        return Err(malformed());
    }
    Ok(())
}

/// Check that `prefix{n}suffix` fits in a username for every n in the range
pub fn validate_generated_username_length(
    prefix: &str,
    suffix: &str,
    number_from: i64,
    number_to: i64,
) -> Result<(), &'static str> {
    let digits = number_from
        .to_string()
        .len()
        .max(number_to.to_string().len());
    if (digits + prefix.chars().count() + suffix.chars().count()) as u64 > MAX_USERNAME_LENGTH {
        return Err("Username should not more than 32 characters");
    }
    Ok(())
}

/// Parse a comma separated list of user ids
pub fn parse_id_list(raw: &str) -> Result<Vec<Uuid>, String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| Uuid::parse_str(s).map_err(|_| format!("Invalid user id: {}", s)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_validate_file_id() {
        assert!(validate_file_id("aB3dE6gH").is_ok());
        assert_eq!(validate_file_id(""), Err("Invalid Parameter, file_id is required"));
        assert_eq!(validate_file_id("../x"), Err("Illegal file_id"));
        assert_eq!(validate_file_id("abc.xlsx"), Err("Illegal file_id"));
    }

    #[test]
    fn test_validate_import_row() {
        assert!(validate_import_row(&row(&["alice", "pw123456", "a@x.io"])).is_ok());
        assert!(validate_import_row(&row(&["alice", "pw123456"])).is_err());
        assert!(validate_import_row(&row(&["alice", "pw", "a@x.io", "extra"])).is_err());

        let long_name = "u".repeat(33);
        let err = validate_import_row(&row(&[&long_name, "pw", "a@x.io"])).unwrap_err();
        assert!(err.starts_with("Error occurred while processing data"));

        let long_password = "p".repeat(65);
        assert!(validate_import_row(&row(&["bob", &long_password, "b@x.io"])).is_err());
    }

    #[test]
    fn test_generated_username_limit() {
        // 10 + 10 + 4 digits = 24
        assert!(validate_generated_username_length("aaaaaaaaaa", "bbbbbbbbbb", 1, 1000).is_ok());
        // 16 + 16 + 1 digit = 33
        let affix = "x".repeat(16);
        assert!(validate_generated_username_length(&affix, &affix, 1, 9).is_err());
        // 16 + 15 + 1 digit = 32
        let shorter = "y".repeat(15);
        assert!(validate_generated_username_length(&affix, &shorter, 1, 9).is_ok());
        // sign counts as a character
        assert!(validate_generated_username_length(&affix, &shorter, -1, 9).is_err());
    }

    #[test]
    fn test_parse_id_list() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let ids = parse_id_list(&format!("{},{}", a, b)).unwrap();
        assert_eq!(ids, vec![a, b]);

        assert!(parse_id_list("12,abc").is_err());
        assert!(parse_id_list(",").unwrap().is_empty());
    }

    #[test]
    fn test_validate_admin_type() {
        assert!(validate_admin_type("Super Admin").is_ok());
        assert!(validate_admin_type("root").is_err());
        assert!(validate_problem_permission("Semi").is_ok());
        assert!(validate_problem_permission("Most").is_err());
    }
}
