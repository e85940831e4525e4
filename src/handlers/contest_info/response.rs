//! Contest info response DTOs

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::SignupClass;

/// Signup row with the student's OI scores, keyed by problem display id
#[derive(Debug, Serialize)]
pub struct ContestSignupResponse {
    #[serde(flatten)]
    pub signup: SignupClass,
    #[serde(rename = "totalScore")]
    pub total_score: i64,
    #[serde(rename = "lecDict")]
    pub lec_dict: BTreeMap<String, i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    #[test]
    fn test_score_sheet_row_shape() {
        let row = ContestSignupResponse {
            signup: SignupClass {
                id: Uuid::nil(),
                lecture_id: None,
                contest_id: Some(Uuid::nil()),
                user_id: None,
                realname: Some("Kim".to_string()),
                schoolssn: None,
                isallow: true,
                created_at: Utc::now(),
            },
            total_score: 150,
            lec_dict: BTreeMap::from([("A".to_string(), 100), ("B".to_string(), 50)]),
        };

        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["realname"], "Kim");
        assert_eq!(json["totalScore"], 150);
        assert_eq!(json["lecDict"]["B"], 50);
    }
}
