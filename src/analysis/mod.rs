//! Score aggregation
//!
//! Pure tallying over rows already loaded from the database: lecture
//! progress reports and contest score sheets. Nothing here performs I/O.

pub mod contest;
pub mod lecture;

pub use contest::ContestScores;
pub use lecture::{LectureAnalysis, LectureReport};

/// Round to two decimal places
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Percentage of `part` in `whole`, 0 when `whole` is 0
pub(crate) fn percent(part: i64, whole: i64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    round2(part as f64 / whole as f64 * 100.0)
}
