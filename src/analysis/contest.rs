//! Contest score sheets built from OI rank records

use std::collections::{BTreeMap, HashMap};

use uuid::Uuid;

use crate::models::{OiContestRank, Problem};

/// Scores of one contest, keyed by problem display id
#[derive(Debug, Clone)]
pub struct ContestScores {
    display_ids: HashMap<Uuid, String>,
    blank: BTreeMap<String, i64>,
}

impl ContestScores {
    /// Every problem of the contest starts at zero
    pub fn new(problems: &[Problem]) -> Self {
        let display_ids = problems
            .iter()
            .map(|p| (p.id, p.display_id.clone()))
            .collect();
        let blank = problems
            .iter()
            .map(|p| (p.display_id.clone(), 0))
            .collect();

        Self { display_ids, blank }
    }

    /// Total score and per-problem scores of one student.
    ///
    /// Entries of `submission_info` that do not name a problem of this
    /// contest are skipped.
    pub fn sheet(&self, rank: Option<&OiContestRank>) -> (i64, BTreeMap<String, i64>) {
        let mut scores = self.blank.clone();
        let Some(rank) = rank else {
            return (0, scores);
        };

        if let Some(info) = rank.submission_info.as_object() {
            for (problem_id, value) in info {
                let Some(display_id) = Uuid::parse_str(problem_id)
                    .ok()
                    .and_then(|id| self.display_ids.get(&id))
                else {
                    continue;
                };
                let score = value
                    .as_i64()
                    .or_else(|| value.as_f64().map(|f| f.round() as i64))
                    .unwrap_or(0);
                scores.insert(display_id.clone(), score);
            }
        }

        (i64::from(rank.total_score), scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn problem(display_id: &str) -> Problem {
        Problem {
            id: Uuid::new_v4(),
            display_id: display_id.to_string(),
            contest_id: None,
            title: display_id.to_string(),
            total_score: 100,
            create_time: Utc::now(),
        }
    }

    fn rank(total_score: i32, submission_info: serde_json::Value) -> OiContestRank {
        OiContestRank {
            id: Uuid::new_v4(),
            contest_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            total_score,
            submission_info,
        }
    }

    #[test]
    fn test_missing_rank_is_all_zero() {
        let scores = ContestScores::new(&[problem("A"), problem("B")]);
        let (total, sheet) = scores.sheet(None);

        assert_eq!(total, 0);
        assert_eq!(sheet.len(), 2);
        assert!(sheet.values().all(|v| *v == 0));
    }

    #[test]
    fn test_rank_translated_to_display_ids() {
        let a = problem("A");
        let b = problem("B");
        let scores = ContestScores::new(&[a.clone(), b.clone()]);
        let record = rank(
            70,
            json!({
                a.id.to_string(): 50,
                b.id.to_string(): 20.4,
                Uuid::new_v4().to_string(): 99,
                "not-a-uuid": 1,
            }),
        );

        let (total, sheet) = scores.sheet(Some(&record));

        assert_eq!(total, 70);
        assert_eq!(sheet.len(), 2);
        assert_eq!(sheet["A"], 50);
        assert_eq!(sheet["B"], 20);
    }
}
