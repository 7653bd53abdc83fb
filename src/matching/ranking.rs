use serde::Serialize;

use super::scoring::DimensionScores;
use super::weights::{Dimension, WeightVector};
use crate::model::{EmployeeRecord, PoolCandidate, PopulationEntry};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateProfile {
    pub employee_id: String,
    pub name: String,
    pub role: String,
    pub division: String,
    pub department: String,
    pub directorate: String,
    pub job_level: String,
    pub tenure_months: u32,
}

impl From<&EmployeeRecord> for CandidateProfile {
    fn from(record: &EmployeeRecord) -> Self {
        Self {
            employee_id: record.employee_id.clone(),
            name: record.full_name.clone(),
            role: record.role.clone(),
            division: record.division.clone(),
            department: record.department.clone(),
            directorate: record.directorate.clone(),
            job_level: record.job_level.clone(),
            tenure_months: record.tenure_months,
        }
    }
}

impl From<&PopulationEntry> for CandidateProfile {
    fn from(entry: &PopulationEntry) -> Self {
        Self {
            employee_id: entry.employee_id.clone(),
            name: entry.full_name.clone(),
            role: entry.position.clone(),
            division: entry.division.clone(),
            department: entry.department.clone(),
            directorate: entry.directorate.clone(),
            job_level: entry.grade.clone(),
            tenure_months: entry.tenure_months,
        }
    }
}

impl From<&PoolCandidate> for CandidateProfile {
    fn from(candidate: &PoolCandidate) -> Self {
        Self {
            employee_id: candidate.employee_id.clone(),
            name: candidate.full_name.clone(),
            role: candidate.role.clone(),
            division: candidate.division.clone(),
            department: candidate.department.clone(),
            directorate: candidate.directorate.clone(),
            job_level: candidate.job_level.clone(),
            tenure_months: candidate.tenure_months,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedCandidate {
    pub rank: usize,
    pub match_rate: f64,
    #[serde(flatten)]
    pub profile: CandidateProfile,
    pub scores: DimensionScores,
}

pub fn composite_score(scores: &DimensionScores, weights: &WeightVector) -> f64 {
    Dimension::ALL
        .iter()
        .map(|dimension| weights.get(*dimension) * scores.get(*dimension))
        .sum()
}

pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Sorts by match rate descending; equal rates keep their input order.
pub fn rank_candidates(
    scored: Vec<(CandidateProfile, DimensionScores)>,
    weights: &WeightVector,
) -> Vec<RankedCandidate> {
    let mut indexed = scored
        .into_iter()
        .enumerate()
        .map(|(index, (profile, scores))| {
            let match_rate = round_to_tenth(composite_score(&scores, weights));
            (index, match_rate, profile, scores)
        })
        .collect::<Vec<_>>();

    indexed.sort_by(|left, right| right.1.total_cmp(&left.1).then(left.0.cmp(&right.0)));

    indexed
        .into_iter()
        .enumerate()
        .map(|(position, (_, match_rate, profile, scores))| RankedCandidate {
            rank: position + 1,
            match_rate,
            profile,
            scores,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::weights::{EQUAL_WEIGHTS, ML_WEIGHTS};

    fn profile(employee_id: &str) -> CandidateProfile {
        CandidateProfile {
            employee_id: employee_id.to_string(),
            name: format!("Candidate {employee_id}"),
            role: "Analyst".to_string(),
            division: "BI".to_string(),
            department: "Analytics".to_string(),
            directorate: "Technology".to_string(),
            job_level: "Level 7".to_string(),
            tenure_months: 24,
        }
    }

    fn uniform(value: f64) -> DimensionScores {
        DimensionScores::new(value, value, value, value, value)
    }

    #[test]
    fn composite_uses_selected_weights() {
        let scores = DimensionScores::new(100.0, 0.0, 0.0, 0.0, 0.0);
        assert!((composite_score(&scores, &ML_WEIGHTS) - 64.6).abs() < 1e-9);
        assert!((composite_score(&scores, &EQUAL_WEIGHTS) - 20.0).abs() < 1e-9);
    }

    #[test]
    fn rank_sorts_descending_and_rounds_to_one_decimal() {
        let ranked = rank_candidates(
            vec![
                (profile("A"), uniform(61.04)),
                (profile("B"), uniform(88.26)),
                (profile("C"), uniform(74.0)),
            ],
            &EQUAL_WEIGHTS,
        );

        let ids = ranked
            .iter()
            .map(|candidate| candidate.profile.employee_id.as_str())
            .collect::<Vec<&str>>();
        assert_eq!(ids, vec!["B", "C", "A"]);
        assert_eq!(ranked[0].match_rate, 88.3);
        assert_eq!(ranked[2].match_rate, 61.0);
        assert_eq!(
            ranked.iter().map(|candidate| candidate.rank).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn ties_keep_retrieval_order() {
        let ranked = rank_candidates(
            vec![
                (profile("first"), uniform(70.0)),
                (profile("top"), uniform(90.0)),
                (profile("second"), uniform(70.0)),
                (profile("third"), uniform(70.04)),
            ],
            &ML_WEIGHTS,
        );

        let ids = ranked
            .iter()
            .map(|candidate| candidate.profile.employee_id.as_str())
            .collect::<Vec<&str>>();
        assert_eq!(ids, vec!["top", "first", "second", "third"]);
    }

    #[test]
    fn ranking_is_idempotent() {
        let input = vec![
            (profile("A"), DimensionScores::new(80.0, 70.0, 60.0, 85.0, 90.0)),
            (profile("B"), DimensionScores::new(95.0, 60.0, 75.0, 75.0, 50.0)),
            (profile("C"), DimensionScores::new(80.0, 70.0, 60.0, 85.0, 90.0)),
        ];

        let first = rank_candidates(input.clone(), &ML_WEIGHTS);
        let second = rank_candidates(input, &ML_WEIGHTS);
        assert_eq!(first, second);
        for (left, right) in first.iter().zip(&second) {
            assert_eq!(left.match_rate.to_bits(), right.match_rate.to_bits());
        }
    }
}
