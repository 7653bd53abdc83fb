use thiserror::Error;

use super::benchmark::{MAX_COHORT_SIZE, MIN_COHORT_SIZE};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error(
        "benchmark cohort must contain between {min} and {max} distinct employees, got {size}",
        min = MIN_COHORT_SIZE,
        max = MAX_COHORT_SIZE
    )]
    InvalidCohortSize { size: usize },

    #[error("benchmark employee id must not be blank")]
    BlankBenchmarkId,
}
