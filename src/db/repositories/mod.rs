//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod contest_repo;
pub mod lecture_repo;
pub mod problem_repo;
pub mod signup_repo;
pub mod submission_repo;
pub mod user_repo;

pub use contest_repo::ContestRepository;
pub use lecture_repo::LectureRepository;
pub use problem_repo::ProblemRepository;
pub use signup_repo::{Roster, SignupRepository};
pub use submission_repo::SubmissionRepository;
pub use user_repo::{UserAdminUpdate, UserRepository};
