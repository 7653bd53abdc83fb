use anyhow::Result;
use rand::Rng;
use serde::Serialize;
use tracing::{info, warn};

use super::benchmark::{BenchmarkStatistics, aggregate_benchmark};
use super::estimation::{
    POSITION_HEURISTIC_FRACTIONS, PositionKeywords, SYNTHETIC_POOL_RANGES, fixed_fraction_scores,
    jittered_estimate, position_estimate, randomized_fraction_scores, relative_competency,
};
use super::fixture::{manual_fixture, synthetic_display_name};
use super::ranking::{CandidateProfile, RankedCandidate, rank_candidates};
use super::request::MatchRequest;
use super::scoring::score_candidate;
use super::weights::{WeightVector, select_weights};
use crate::source::{EmployeeSource, SYNTHETIC_POOL_LIMIT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DataLevel {
    Live,
    PopulationHeuristic,
    SyntheticNames,
    ManualFixture,
}

impl DataLevel {
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Live => Some(Self::PopulationHeuristic),
            Self::PopulationHeuristic => Some(Self::SyntheticNames),
            Self::SyntheticNames => Some(Self::ManualFixture),
            Self::ManualFixture => None,
        }
    }

    pub fn ordinal(self) -> u8 {
        match self {
            Self::Live => 1,
            Self::PopulationHeuristic => 2,
            Self::SyntheticNames => 3,
            Self::ManualFixture => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::PopulationHeuristic => "population_heuristic",
            Self::SyntheticNames => "synthetic_names",
            Self::ManualFixture => "manual_fixture",
        }
    }

    pub fn is_degraded(self) -> bool {
        self != Self::Live
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankedTable {
    pub candidates: Vec<RankedCandidate>,
    pub benchmark: Option<BenchmarkStatistics>,
}

#[derive(Debug)]
pub enum StageOutcome {
    Ranked(RankedTable),
    Empty(String),
    Failed(anyhow::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttemptStatus {
    Produced,
    Empty,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelAttempt {
    pub level: DataLevel,
    pub status: AttemptStatus,
    pub detail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchOutcome {
    pub level: DataLevel,
    pub weights: WeightVector,
    pub attempts: Vec<LevelAttempt>,
    pub benchmark: Option<BenchmarkStatistics>,
    pub candidates: Vec<RankedCandidate>,
}

impl MatchOutcome {
    pub fn is_degraded(&self) -> bool {
        self.level.is_degraded()
    }
}

/// Walks the fallback levels top-down until one produces a table. The manual
/// fixture has no external dependency, so the walk always terminates with a
/// non-empty result.
pub fn run_matching<S, R>(source: &S, request: &MatchRequest, rng: &mut R) -> MatchOutcome
where
    S: EmployeeSource + ?Sized,
    R: Rng + ?Sized,
{
    let weights = select_weights(request.use_ml_weights);
    let mut attempts = Vec::<LevelAttempt>::new();
    let mut level = DataLevel::Live;

    loop {
        let outcome = match level {
            DataLevel::Live => rank_live(source, request, &weights),
            DataLevel::PopulationHeuristic => rank_population(request, &weights, rng),
            DataLevel::SyntheticNames => rank_synthetic_pool(source, request, &weights, rng),
            DataLevel::ManualFixture => StageOutcome::Ranked(rank_manual_fixture(&weights)),
        };

        match outcome {
            StageOutcome::Ranked(table) => {
                attempts.push(LevelAttempt {
                    level,
                    status: AttemptStatus::Produced,
                    detail: None,
                });
                info!(
                    level = level.as_str(),
                    candidates = table.candidates.len(),
                    weights = weights.policy().as_str(),
                    "talent ranking produced"
                );
                return MatchOutcome {
                    level,
                    weights,
                    attempts,
                    benchmark: table.benchmark,
                    candidates: table.candidates,
                };
            }
            StageOutcome::Empty(reason) => {
                warn!(level = level.as_str(), reason = %reason, "level produced no candidates");
                attempts.push(LevelAttempt {
                    level,
                    status: AttemptStatus::Empty,
                    detail: Some(reason),
                });
            }
            StageOutcome::Failed(err) => {
                warn!(level = level.as_str(), error = %err, "level failed");
                attempts.push(LevelAttempt {
                    level,
                    status: AttemptStatus::Failed,
                    detail: Some(format!("{err:#}")),
                });
            }
        }

        level = level.next().unwrap_or(DataLevel::ManualFixture);
    }
}

fn stage<F>(empty_reason: &str, build: F) -> StageOutcome
where
    F: FnOnce() -> Result<Option<RankedTable>>,
{
    match build() {
        Ok(Some(table)) if !table.candidates.is_empty() => StageOutcome::Ranked(table),
        Ok(_) => StageOutcome::Empty(empty_reason.to_string()),
        Err(err) => StageOutcome::Failed(err),
    }
}

pub fn rank_live<S>(source: &S, request: &MatchRequest, weights: &WeightVector) -> StageOutcome
where
    S: EmployeeSource + ?Sized,
{
    stage("live query returned no candidates", || {
        let population = source.fetch_match_inputs(request)?;
        if population.is_empty() {
            return Ok(None);
        }

        let benchmark = aggregate_benchmark(&population, &request.cohort);
        if benchmark.member_count < request.cohort.len() {
            warn!(
                requested = request.cohort.len(),
                found = benchmark.member_count,
                "benchmark employees missing from population"
            );
        }

        let scored = population
            .iter()
            .filter(|record| !request.cohort.contains(&record.employee_id))
            .map(|record| {
                (
                    CandidateProfile::from(record),
                    score_candidate(record, &benchmark),
                )
            })
            .collect::<Vec<_>>();

        Ok(Some(RankedTable {
            candidates: rank_candidates(scored, weights),
            benchmark: Some(benchmark),
        }))
    })
}

pub fn rank_population<R>(
    request: &MatchRequest,
    weights: &WeightVector,
    rng: &mut R,
) -> StageOutcome
where
    R: Rng + ?Sized,
{
    stage("population has no candidates outside the cohort", || {
        let keywords = PositionKeywords::new()?;

        let scored = request
            .population
            .iter()
            .filter(|entry| !request.cohort.contains(&entry.employee_id))
            .map(|entry| {
                let estimate = position_estimate(&keywords, entry, request.use_ml_weights);
                let estimate = jittered_estimate(estimate, rng);
                (
                    CandidateProfile::from(entry),
                    fixed_fraction_scores(estimate, &POSITION_HEURISTIC_FRACTIONS),
                )
            })
            .collect::<Vec<_>>();

        if scored.is_empty() {
            return Ok(None);
        }

        Ok(Some(RankedTable {
            candidates: rank_candidates(scored, weights),
            benchmark: None,
        }))
    })
}

pub fn rank_synthetic_pool<S, R>(
    source: &S,
    request: &MatchRequest,
    weights: &WeightVector,
    rng: &mut R,
) -> StageOutcome
where
    S: EmployeeSource + ?Sized,
    R: Rng + ?Sized,
{
    stage("candidate pool query returned no rows", || {
        let pool = source
            .fetch_candidate_pool(&request.cohort, SYNTHETIC_POOL_LIMIT)?
            .into_iter()
            .filter(|candidate| !request.cohort.contains(&candidate.employee_id))
            .collect::<Vec<_>>();
        if pool.is_empty() {
            return Ok(None);
        }

        let pool_max = pool
            .iter()
            .map(|candidate| candidate.competency_score)
            .fold(f64::NEG_INFINITY, f64::max);

        let scored = pool
            .iter()
            .enumerate()
            .map(|(position, candidate)| {
                let mut profile = CandidateProfile::from(candidate);
                if let Some(name) = synthetic_display_name(position) {
                    profile.name = name.to_string();
                }
                let competency = relative_competency(candidate.competency_score, pool_max);
                let scores = randomized_fraction_scores(
                    competency,
                    candidate.tenure_months,
                    &SYNTHETIC_POOL_RANGES,
                    rng,
                );
                (profile, scores)
            })
            .collect::<Vec<_>>();

        Ok(Some(RankedTable {
            candidates: rank_candidates(scored, weights),
            benchmark: None,
        }))
    })
}

pub fn rank_manual_fixture(weights: &WeightVector) -> RankedTable {
    RankedTable {
        candidates: rank_candidates(manual_fixture(), weights),
        benchmark: None,
    }
}
