use super::ranking::{CandidateProfile, RankedCandidate, rank_candidates};
use super::scoring::DimensionScores;
use super::weights::WeightVector;
use crate::model::{EmployeeRecord, PopulationEntry, RawEmployeeRow};

pub(crate) fn employee(employee_id: &str, competency_score: f64) -> EmployeeRecord {
    RawEmployeeRow {
        employee_id: employee_id.to_string(),
        full_name: Some(format!("Employee {employee_id}")),
        role: Some("Analyst".to_string()),
        job_level: Some("Level 7".to_string()),
        tenure_months: Some(30),
        competency_score: Some(competency_score),
        ..RawEmployeeRow::default()
    }
    .into_record()
}

pub(crate) fn roster_entry(
    employee_id: &str,
    position: &str,
    tenure_months: u32,
) -> PopulationEntry {
    PopulationEntry {
        employee_id: employee_id.to_string(),
        full_name: format!("Employee {employee_id}"),
        position: position.to_string(),
        grade: "Level 7".to_string(),
        directorate: "Technology".to_string(),
        department: "Data Analytics".to_string(),
        division: "Business Intelligence".to_string(),
        company: "Acme".to_string(),
        tenure_months,
    }
}

/// Ranks candidates whose five dimension scores all equal `score`.
pub(crate) fn flat_ranking(
    rows: &[(&str, &str, &str, f64)],
    weights: &WeightVector,
) -> Vec<RankedCandidate> {
    let scored = rows
        .iter()
        .map(|(employee_id, job_level, department, score)| {
            let profile = CandidateProfile {
                employee_id: employee_id.to_string(),
                name: format!("Name {employee_id}"),
                role: "Analyst".to_string(),
                division: "BI".to_string(),
                department: department.to_string(),
                directorate: "Technology".to_string(),
                job_level: job_level.to_string(),
                tenure_months: 40,
            };
            (
                profile,
                DimensionScores::new(*score, *score, *score, *score, *score),
            )
        })
        .collect();
    rank_candidates(scored, weights)
}
