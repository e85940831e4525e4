//! Roster and score report service

use std::collections::HashMap;

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    analysis::{ContestScores, LectureAnalysis},
    db::repositories::{
        ContestRepository, LectureRepository, ProblemRepository, Roster, SignupRepository,
        SubmissionRepository,
    },
    error::{AppError, AppResult},
    handlers::{
        admin::response::{LectureSignupResponse, RosterUser, SignupResponse},
        contest_info::response::ContestSignupResponse,
    },
    middleware::AuthenticatedUser,
    models::{Submission, User},
};

/// Service reading lecture and contest rosters
pub struct RosterService;

impl RosterService {
    /// Whether `user` may read the score reports of a lecture
    pub async fn can_view_lecture_scores(
        pool: &PgPool,
        user: &AuthenticatedUser,
        lecture_id: &Uuid,
    ) -> AppResult<bool> {
        if user.is_admin() {
            return Ok(true);
        }

        let ta = LectureRepository::find_ta(pool, &user.id, lecture_id).await?;
        Ok(ta.is_some_and(|ta| ta.score_isallow))
    }

    /// Contest roster with each student's account
    pub async fn contest_signups(
        pool: &PgPool,
        contest_id: &Uuid,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<SignupResponse>, i64)> {
        let (signups, total) =
            SignupRepository::list(pool, Roster::Contest(*contest_id), offset, limit).await?;
        let users = users_by_id(SignupRepository::users_of(pool, &signups).await?);

        let rows = signups
            .into_iter()
            .map(|signup| SignupResponse {
                user: signup.user_id.and_then(|id| users.get(&id)).map(RosterUser::from),
                signup,
            })
            .collect();

        Ok((rows, total))
    }

    /// Lecture roster with a score report for every student
    pub async fn lecture_roster(
        pool: &PgPool,
        lecture_id: &Uuid,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<LectureSignupResponse>, i64)> {
        let (signups, total) =
            SignupRepository::list(pool, Roster::Lecture(*lecture_id), offset, limit).await?;
        let users = users_by_id(SignupRepository::users_of(pool, &signups).await?);
        let lecture = LectureRepository::find_by_id(pool, lecture_id).await?;

        let problems = ProblemRepository::list_by_lecture(pool, lecture_id).await?;
        let analysis = LectureAnalysis::new(&problems);

        let scored_users: Vec<Uuid> = signups
            .iter()
            .filter(|s| s.isallow)
            .filter_map(|s| s.user_id)
            .filter(|id| users.contains_key(id))
            .collect();
        let problem_ids: Vec<Uuid> = problems.iter().map(|p| p.id).collect();
        let submissions =
            SubmissionRepository::list_for_users_and_problems(pool, &scored_users, &problem_ids)
                .await?;

        let mut by_user: HashMap<Uuid, Vec<Submission>> = HashMap::new();
        for submission in submissions {
            by_user.entry(submission.user_id).or_default().push(submission);
        }

        tracing::debug!(
            lecture_id = %lecture_id,
            students = signups.len(),
            scored = scored_users.len(),
            problems = problems.len(),
            "Building lecture roster"
        );

        let rows = signups
            .into_iter()
            .map(|signup| {
                let user = signup.user_id.and_then(|id| users.get(&id));
                let report = match user {
                    Some(user) if signup.isallow => analysis
                        .report(by_user.get(&user.id).map(Vec::as_slice).unwrap_or(&[])),
                    _ => analysis.empty_report(),
                };
                LectureSignupResponse {
                    user: user.map(RosterUser::from),
                    lecture: lecture.clone(),
                    report,
                    signup,
                }
            })
            .collect();

        Ok((rows, total))
    }

    /// Public score sheet of a contest built from its OI rank records
    pub async fn contest_score_sheet(
        pool: &PgPool,
        contest_id: &Uuid,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<ContestSignupResponse>, i64)> {
        ContestRepository::find_by_id(pool, contest_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Contest does not exist".to_string()))?;

        let problems = ProblemRepository::list_by_contest(pool, contest_id).await?;
        let scores = ContestScores::new(&problems);

        let (signups, total) =
            SignupRepository::list(pool, Roster::Contest(*contest_id), offset, limit).await?;
        let user_ids: Vec<Uuid> = signups.iter().filter_map(|s| s.user_id).collect();
        let ranks: HashMap<Uuid, _> =
            ContestRepository::oi_ranks_for_users(pool, contest_id, &user_ids)
                .await?
                .into_iter()
                .map(|rank| (rank.user_id, rank))
                .collect();

        let rows = signups
            .into_iter()
            .map(|signup| {
                let rank = signup.user_id.and_then(|id| ranks.get(&id));
                let (total_score, lec_dict) = scores.sheet(rank);
                ContestSignupResponse {
                    signup,
                    total_score,
                    lec_dict,
                }
            })
            .collect();

        Ok((rows, total))
    }
}

fn users_by_id(users: Vec<User>) -> HashMap<Uuid, User> {
    users.into_iter().map(|u| (u.id, u)).collect()
}
