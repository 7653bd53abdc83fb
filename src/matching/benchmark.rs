use serde::Serialize;

use super::error::MatchError;
use crate::model::EmployeeRecord;

pub const MIN_COHORT_SIZE: usize = 2;
pub const MAX_COHORT_SIZE: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BenchmarkCohort {
    ids: Vec<String>,
}

impl BenchmarkCohort {
    pub fn new<I, S>(ids: I) -> Result<Self, MatchError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique = Vec::<String>::new();
        for id in ids {
            let id = id.into().trim().to_string();
            if id.is_empty() {
                return Err(MatchError::BlankBenchmarkId);
            }
            if unique.iter().all(|value| value != &id) {
                unique.push(id);
            }
        }

        if !(MIN_COHORT_SIZE..=MAX_COHORT_SIZE).contains(&unique.len()) {
            return Err(MatchError::InvalidCohortSize { size: unique.len() });
        }

        Ok(Self { ids: unique })
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn contains(&self, employee_id: &str) -> bool {
        self.ids.iter().any(|id| id == employee_id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct BenchmarkStatistics {
    pub member_count: usize,
    pub competency_avg: f64,
    pub iq_avg: f64,
    pub gtq_avg: f64,
    pub work_efficiency_avg: f64,
    pub performance_avg: f64,
}

pub fn aggregate_benchmark(
    population: &[EmployeeRecord],
    cohort: &BenchmarkCohort,
) -> BenchmarkStatistics {
    let members = population
        .iter()
        .filter(|record| cohort.contains(&record.employee_id))
        .collect::<Vec<&EmployeeRecord>>();

    if members.is_empty() {
        return BenchmarkStatistics::default();
    }

    let count = members.len() as f64;
    let mean = |signal: fn(&EmployeeRecord) -> f64| -> f64 {
        members.iter().map(|record| signal(record)).sum::<f64>() / count
    };

    BenchmarkStatistics {
        member_count: members.len(),
        competency_avg: mean(|record| record.competency_score),
        iq_avg: mean(|record| record.iq),
        gtq_avg: mean(|record| record.gtq),
        work_efficiency_avg: mean(|record| record.work_efficiency_score),
        performance_avg: mean(|record| record.performance_rating),
    }
}
