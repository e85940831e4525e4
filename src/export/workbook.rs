//! Credentials sheet layout

use rust_xlsxwriter::Workbook;

use crate::error::AppResult;

/// Width of the username and password columns
const COLUMN_WIDTH: f64 = 20.0;

/// A generated account and its plain-text password
#[derive(Debug, Clone)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

/// Render credentials as an xlsx document: a `Username`/`Password` header
/// row followed by one row per account.
pub fn credentials_workbook(credentials: &[Credential]) -> AppResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.set_column_width(0, COLUMN_WIDTH)?;
    worksheet.set_column_width(1, COLUMN_WIDTH)?;
    worksheet.write_string(0, 0, "Username")?;
    worksheet.write_string(0, 1, "Password")?;

    for (row, credential) in (1u32..).zip(credentials) {
        worksheet.write_string(row, 0, credential.username.as_str())?;
        worksheet.write_string(row, 1, credential.password.as_str())?;
    }

    Ok(workbook.save_to_buffer()?)
}
