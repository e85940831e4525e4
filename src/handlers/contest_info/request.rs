//! Contest info request DTOs

use serde::Deserialize;

/// Query parameters of the public contest score sheet
#[derive(Debug, Default, Deserialize)]
pub struct ContestInfoQuery {
    pub contest_id: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
