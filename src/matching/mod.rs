mod benchmark;
mod degradation;
mod error;
mod estimation;
mod fixture;
mod ranking;
mod request;
mod scoring;
#[cfg(test)]
pub(crate) mod test_support;
mod weights;

pub use benchmark::{BenchmarkCohort, BenchmarkStatistics};
pub use degradation::{AttemptStatus, DataLevel, LevelAttempt, MatchOutcome, run_matching};
pub use ranking::RankedCandidate;
pub use request::MatchRequest;
pub use weights::{Dimension, WeightVector, select_weights};
