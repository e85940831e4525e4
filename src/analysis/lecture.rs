//! Lecture progress reports

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use uuid::Uuid;

use crate::models::{ContestKind, LectureProblem, Submission};

use super::{percent, round2};

/// A problem of the lecture as seen by the tally
#[derive(Debug, Clone)]
struct TrackedProblem {
    display_id: String,
    kind: Option<ContestKind>,
    total_score: i32,
}

/// Per-student progress over every contest of a lecture
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LectureReport {
    pub total_practice: i64,
    pub sub_practice: i64,
    pub solve_practice: i64,
    pub total_assign: i64,
    pub sub_assign: i64,
    pub solve_assign: i64,
    pub total_problem: i64,
    pub try_problem: i64,
    pub solve_problem: i64,
    pub total_score: i64,
    pub max_score: i64,
    pub avg_score: f64,
    pub progress: f64,
    /// Display id to score of the latest attempt
    pub lec_dict: BTreeMap<String, i64>,
}

/// Score tally for one lecture, reusable across all of its students
#[derive(Debug, Clone)]
pub struct LectureAnalysis {
    problems: HashMap<Uuid, TrackedProblem>,
    total_practice: i64,
    total_assign: i64,
    max_score: i64,
}

impl LectureAnalysis {
    /// Build the tally from the lecture's problems
    pub fn new(problems: &[LectureProblem]) -> Self {
        let mut tracked = HashMap::with_capacity(problems.len());
        let mut total_practice = 0;
        let mut total_assign = 0;
        let mut max_score = 0i64;

        for problem in problems {
            let kind = problem
                .lecture_contest_type
                .as_deref()
                .and_then(ContestKind::parse);
            match kind {
                Some(ContestKind::Practice) => total_practice += 1,
                Some(ContestKind::Assignment) => total_assign += 1,
                None => {}
            }
            max_score += i64::from(problem.total_score);
            tracked.insert(
                problem.id,
                TrackedProblem {
                    display_id: problem.display_id.clone(),
                    kind,
                    total_score: problem.total_score,
                },
            );
        }

        Self {
            problems: tracked,
            total_practice,
            total_assign,
            max_score,
        }
    }

    /// Number of problems in the lecture
    pub fn total_problems(&self) -> i64 {
        self.problems.len() as i64
    }

    /// Report for a student whose scores are not shown: only lecture totals
    pub fn empty_report(&self) -> LectureReport {
        LectureReport {
            total_problem: self.total_problems(),
            max_score: self.max_score,
            ..Default::default()
        }
    }

    /// Tally one student's submissions.
    ///
    /// Only the latest attempt per problem counts. Submissions for problems
    /// outside the lecture are ignored.
    pub fn report(&self, submissions: &[Submission]) -> LectureReport {
        let mut latest: HashMap<Uuid, &Submission> = HashMap::new();
        for submission in submissions {
            if !self.problems.contains_key(&submission.problem_id) {
                continue;
            }
            latest
                .entry(submission.problem_id)
                .and_modify(|current| {
                    if submission.create_time >= current.create_time {
                        *current = submission;
                    }
                })
                .or_insert(submission);
        }

        let mut report = self.empty_report();
        report.total_practice = self.total_practice;
        report.total_assign = self.total_assign;

        for (problem_id, submission) in latest {
            let Some(problem) = self.problems.get(&problem_id) else {
                continue;
            };
            let solved = submission.is_accepted();
            let score = i64::from(submission.score.unwrap_or(if solved {
                problem.total_score
            } else {
                0
            }));

            report.try_problem += 1;
            report.total_score += score;
            if solved {
                report.solve_problem += 1;
            }
            match problem.kind {
                Some(ContestKind::Practice) => {
                    report.sub_practice += 1;
                    report.solve_practice += i64::from(solved);
                }
                Some(ContestKind::Assignment) => {
                    report.sub_assign += 1;
                    report.solve_assign += i64::from(solved);
                }
                None => {}
            }
            report.lec_dict.insert(problem.display_id.clone(), score);
        }

        report.avg_score = if report.try_problem > 0 {
            round2(report.total_score as f64 / report.try_problem as f64)
        } else {
            0.0
        };
        report.progress = percent(report.solve_problem, report.total_problem);

        report
    }
}
