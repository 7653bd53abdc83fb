use serde::Serialize;

use super::benchmark::BenchmarkCohort;
use crate::model::PopulationEntry;

#[derive(Debug, Clone, Serialize)]
pub struct MatchRequest {
    pub job_vacancy_id: String,
    pub role_name: String,
    pub job_level: String,
    pub cohort: BenchmarkCohort,
    pub use_ml_weights: bool,
    #[serde(skip)]
    pub population: Vec<PopulationEntry>,
}

impl MatchRequest {
    pub fn new(job_vacancy_id: impl Into<String>, cohort: BenchmarkCohort) -> Self {
        Self {
            job_vacancy_id: job_vacancy_id.into(),
            role_name: String::new(),
            job_level: String::new(),
            cohort,
            use_ml_weights: true,
            population: Vec::new(),
        }
    }

    pub fn with_role(mut self, role_name: impl Into<String>, job_level: impl Into<String>) -> Self {
        self.role_name = role_name.into();
        self.job_level = job_level.into();
        self
    }

    pub fn with_ml_weights(mut self, use_ml_weights: bool) -> Self {
        self.use_ml_weights = use_ml_weights;
        self
    }

    pub fn with_population(mut self, population: Vec<PopulationEntry>) -> Self {
        self.population = population;
        self
    }
}
