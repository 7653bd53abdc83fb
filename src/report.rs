use std::collections::BTreeMap;

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::matching::{
    BenchmarkStatistics, DataLevel, Dimension, LevelAttempt, MatchOutcome, MatchRequest,
    RankedCandidate, WeightVector,
};
use crate::util::now_utc_string;

pub const DIMENSION_TARGET: f64 = 80.0;
pub const HIGH_MATCH_THRESHOLD: f64 = 80.0;
pub const HIGH_QUALITY_THRESHOLD: f64 = 75.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PoolAssessment {
    Excellent,
    Moderate,
    Limited,
}

impl PoolAssessment {
    pub fn from_average(average: f64) -> Self {
        if average > 80.0 {
            Self::Excellent
        } else if average > 70.0 {
            Self::Moderate
        } else {
            Self::Limited
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Moderate => "moderate",
            Self::Limited => "limited",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FitTier {
    Exceptional,
    Strong,
    Baseline,
}

impl FitTier {
    pub fn from_match_rate(match_rate: f64) -> Self {
        if match_rate > 90.0 {
            Self::Exceptional
        } else if match_rate > 80.0 {
            Self::Strong
        } else {
            Self::Baseline
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Exceptional => "exceptional",
            Self::Strong => "strong",
            Self::Baseline => "baseline",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionAverage {
    pub dimension: Dimension,
    pub average: f64,
    pub gap_to_target: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupAverage {
    pub group: String,
    pub candidates: usize,
    pub average_match_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopCandidate {
    pub employee_id: String,
    pub name: String,
    pub match_rate: f64,
    pub tier: FitTier,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingSummary {
    pub total_candidates: usize,
    pub average_match_rate: f64,
    pub max_match_rate: f64,
    pub min_match_rate: f64,
    pub std_dev_match_rate: f64,
    pub high_matches: usize,
    pub high_quality_share: f64,
    pub pool_assessment: PoolAssessment,
    pub top_candidate: Option<TopCandidate>,
    pub dimension_averages: Vec<DimensionAverage>,
    pub by_job_level: Vec<GroupAverage>,
    pub by_directorate: Vec<GroupAverage>,
    pub by_department: Vec<GroupAverage>,
}

impl RankingSummary {
    pub fn from_candidates(candidates: &[RankedCandidate]) -> Self {
        let rates = candidates
            .iter()
            .map(|candidate| candidate.match_rate)
            .collect::<Vec<f64>>();
        let average = mean(&rates);

        let dimension_averages = Dimension::ALL
            .iter()
            .map(|dimension| {
                let values = candidates
                    .iter()
                    .map(|candidate| candidate.scores.get(*dimension))
                    .collect::<Vec<f64>>();
                let average = mean(&values);
                DimensionAverage {
                    dimension: *dimension,
                    average,
                    gap_to_target: DIMENSION_TARGET - average,
                }
            })
            .collect();

        let high_quality = rates
            .iter()
            .filter(|rate| **rate > HIGH_QUALITY_THRESHOLD)
            .count();

        Self {
            total_candidates: candidates.len(),
            average_match_rate: average,
            max_match_rate: rates.iter().copied().fold(None, max_of).unwrap_or(0.0),
            min_match_rate: rates.iter().copied().fold(None, min_of).unwrap_or(0.0),
            std_dev_match_rate: sample_std_dev(&rates),
            high_matches: rates
                .iter()
                .filter(|rate| **rate > HIGH_MATCH_THRESHOLD)
                .count(),
            high_quality_share: if candidates.is_empty() {
                0.0
            } else {
                100.0 * high_quality as f64 / candidates.len() as f64
            },
            pool_assessment: PoolAssessment::from_average(average),
            top_candidate: candidates.first().map(|candidate| TopCandidate {
                employee_id: candidate.profile.employee_id.clone(),
                name: candidate.profile.name.clone(),
                match_rate: candidate.match_rate,
                tier: FitTier::from_match_rate(candidate.match_rate),
            }),
            dimension_averages,
            by_job_level: group_averages(candidates, |candidate| &candidate.profile.job_level),
            by_directorate: group_averages(candidates, |candidate| {
                &candidate.profile.directorate
            }),
            by_department: group_averages(candidates, |candidate| &candidate.profile.department),
        }
    }

    pub fn strongest_dimension(&self) -> Option<&DimensionAverage> {
        self.dimension_averages
            .iter()
            .max_by(|left, right| left.average.total_cmp(&right.average))
    }

    pub fn weakest_dimension(&self) -> Option<&DimensionAverage> {
        self.dimension_averages
            .iter()
            .max_by(|left, right| left.gap_to_target.total_cmp(&right.gap_to_target))
    }

    pub fn insights(&self, level: DataLevel) -> Vec<String> {
        let mut out = Vec::new();
        if level.is_degraded() {
            out.push(format!(
                "Ranking produced from fallback level {} ({}); treat scores as estimates.",
                level.ordinal(),
                level.as_str()
            ));
        }
        if self.total_candidates == 0 {
            out.push("No candidates were ranked.".to_string());
            return out;
        }

        out.push(format!(
            "Talent pool quality is {} with an average match of {:.1}%.",
            self.pool_assessment.as_str(),
            self.average_match_rate
        ));
        if let Some(top) = &self.top_candidate {
            out.push(format!(
                "{} leads at {:.1}% ({} fit).",
                top.name,
                top.match_rate,
                top.tier.as_str()
            ));
        }
        out.push(format!(
            "{} of {} candidates exceed {:.0}% match; {:.1}% exceed {:.0}%.",
            self.high_matches,
            self.total_candidates,
            HIGH_MATCH_THRESHOLD,
            self.high_quality_share,
            HIGH_QUALITY_THRESHOLD
        ));
        if let Some(strongest) = self.strongest_dimension() {
            out.push(format!(
                "Strongest dimension: {} ({:.1}).",
                strongest.dimension.label(),
                strongest.average
            ));
        }
        if let Some(weakest) = self
            .weakest_dimension()
            .filter(|weakest| weakest.gap_to_target > 0.0)
        {
            out.push(format!(
                "Largest development gap: {} at {:.1} points below target.",
                weakest.dimension.label(),
                weakest.gap_to_target
            ));
        }
        out
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RankingReport {
    pub generated_at: String,
    pub job_vacancy_id: String,
    pub role_name: String,
    pub job_level: String,
    pub benchmark_ids: Vec<String>,
    pub data_level: DataLevel,
    pub data_level_ordinal: u8,
    pub degraded: bool,
    pub attempts: Vec<LevelAttempt>,
    pub weights: WeightVector,
    pub benchmark: Option<BenchmarkStatistics>,
    pub summary: RankingSummary,
    pub insights: Vec<String>,
    pub ranking_digest: String,
    pub returned: usize,
    pub candidates: Vec<RankedCandidate>,
}

impl RankingReport {
    pub fn build(request: &MatchRequest, outcome: MatchOutcome, limit: Option<usize>) -> Self {
        let summary = RankingSummary::from_candidates(&outcome.candidates);
        let insights = summary.insights(outcome.level);
        let ranking_digest = ranking_digest(&outcome.candidates);
        let degraded = outcome.is_degraded();

        let mut candidates = outcome.candidates;
        if let Some(limit) = limit {
            candidates.truncate(limit);
        }

        Self {
            generated_at: now_utc_string(),
            job_vacancy_id: request.job_vacancy_id.clone(),
            role_name: request.role_name.clone(),
            job_level: request.job_level.clone(),
            benchmark_ids: request.cohort.ids().to_vec(),
            data_level: outcome.level,
            data_level_ordinal: outcome.level.ordinal(),
            degraded,
            attempts: outcome.attempts,
            weights: outcome.weights,
            benchmark: outcome.benchmark,
            summary,
            insights,
            ranking_digest,
            returned: candidates.len(),
            candidates,
        }
    }
}

pub fn ranking_digest(candidates: &[RankedCandidate]) -> String {
    let mut hasher = Sha256::new();
    for candidate in candidates {
        hasher.update(candidate.profile.employee_id.as_bytes());
        hasher.update(b"\t");
        hasher.update(format!("{:.1}", candidate.match_rate).as_bytes());
        hasher.update(b"\n");
    }
    format!("{:x}", hasher.finalize())
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

fn sample_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let average = mean(values);
    let squared = values
        .iter()
        .map(|value| (value - average).powi(2))
        .sum::<f64>();
    (squared / (values.len() - 1) as f64).sqrt()
}

fn max_of(acc: Option<f64>, value: f64) -> Option<f64> {
    Some(acc.map_or(value, |current| current.max(value)))
}

fn min_of(acc: Option<f64>, value: f64) -> Option<f64> {
    Some(acc.map_or(value, |current| current.min(value)))
}

fn group_averages<F>(candidates: &[RankedCandidate], key: F) -> Vec<GroupAverage>
where
    F: Fn(&RankedCandidate) -> &String,
{
    let mut groups = BTreeMap::<&str, (usize, f64)>::new();
    for candidate in candidates {
        let entry = groups.entry(key(candidate).as_str()).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += candidate.match_rate;
    }

    let mut out = groups
        .into_iter()
        .map(|(group, (count, total))| GroupAverage {
            group: group.to_string(),
            candidates: count,
            average_match_rate: total / count as f64,
        })
        .collect::<Vec<_>>();
    out.sort_by(|left, right| {
        right
            .average_match_rate
            .total_cmp(&left.average_match_rate)
            .then_with(|| left.group.cmp(&right.group))
    });
    out
}
