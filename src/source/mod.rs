mod demo;
mod schema;
mod sqlite;
#[cfg(test)]
mod tests;

use anyhow::{Result, anyhow};

use crate::matching::{BenchmarkCohort, MatchRequest};
use crate::model::{EmployeeRecord, PoolCandidate, PopulationEntry};

pub use demo::{DemoCounts, seed_demo_dataset};
pub use schema::{
    DB_SCHEMA_VERSION, configure_connection, counted_tables, ensure_schema, table_count,
};
pub use sqlite::SqliteSource;

pub const SYNTHETIC_POOL_LIMIT: usize = 35;

pub trait EmployeeSource {
    fn fetch_population(&self) -> Result<Vec<PopulationEntry>>;

    fn fetch_match_inputs(&self, request: &MatchRequest) -> Result<Vec<EmployeeRecord>>;

    fn fetch_candidate_pool(
        &self,
        cohort: &BenchmarkCohort,
        limit: usize,
    ) -> Result<Vec<PoolCandidate>>;
}

/// Stands in for a data provider that could not be reached; every call fails.
#[derive(Debug, Clone)]
pub struct OfflineSource {
    reason: String,
}

impl OfflineSource {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl EmployeeSource for OfflineSource {
    fn fetch_population(&self) -> Result<Vec<PopulationEntry>> {
        Err(anyhow!("employee source offline: {}", self.reason))
    }

    fn fetch_match_inputs(&self, _request: &MatchRequest) -> Result<Vec<EmployeeRecord>> {
        Err(anyhow!("employee source offline: {}", self.reason))
    }

    fn fetch_candidate_pool(
        &self,
        _cohort: &BenchmarkCohort,
        _limit: usize,
    ) -> Result<Vec<PoolCandidate>> {
        Err(anyhow!("employee source offline: {}", self.reason))
    }
}
