//! Credential workbook export
//!
//! Generated accounts are handed to the administrator as an `.xlsx` sheet.
//! The sheet is parked in the export directory under a random id and removed
//! as soon as it is downloaded.

pub mod store;
pub mod workbook;

pub use store::ExportStore;
pub use workbook::{credentials_workbook, Credential};
