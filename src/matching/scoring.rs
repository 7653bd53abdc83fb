use serde::{Deserialize, Serialize};

use super::benchmark::BenchmarkStatistics;
use super::weights::Dimension;
use crate::model::EmployeeRecord;

pub const NEUTRAL_SCORE: f64 = 70.0;
pub const HIGH_PERFORMANCE_RATING: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionScores {
    pub competency: f64,
    pub cognitive: f64,
    pub work_efficiency: f64,
    pub behavioral: f64,
    pub experience: f64,
}

impl DimensionScores {
    pub fn new(
        competency: f64,
        cognitive: f64,
        work_efficiency: f64,
        behavioral: f64,
        experience: f64,
    ) -> Self {
        Self {
            competency: clamp_score(competency),
            cognitive: clamp_score(cognitive),
            work_efficiency: clamp_score(work_efficiency),
            behavioral: clamp_score(behavioral),
            experience: clamp_score(experience),
        }
    }

    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Competency => self.competency,
            Dimension::Cognitive => self.cognitive,
            Dimension::WorkEfficiency => self.work_efficiency,
            Dimension::Behavioral => self.behavioral,
            Dimension::Experience => self.experience,
        }
    }
}

pub fn clamp_score(value: f64) -> f64 {
    if value.is_nan() {
        return NEUTRAL_SCORE;
    }
    value.clamp(0.0, 100.0)
}

pub fn score_candidate(
    candidate: &EmployeeRecord,
    benchmark: &BenchmarkStatistics,
) -> DimensionScores {
    DimensionScores::new(
        ratio_score(candidate.competency_score, benchmark.competency_avg),
        cognitive_score(candidate.iq, candidate.gtq, benchmark),
        ratio_score(candidate.work_efficiency_score, benchmark.work_efficiency_avg),
        behavioral_score(&candidate.top_strengths, candidate.performance_rating),
        experience_score(candidate.tenure_months),
    )
}

pub fn ratio_score(value: f64, benchmark_avg: f64) -> f64 {
    if benchmark_avg > 0.0 {
        clamp_score(100.0 * value / benchmark_avg)
    } else {
        NEUTRAL_SCORE
    }
}

fn cognitive_score(iq: f64, gtq: f64, benchmark: &BenchmarkStatistics) -> f64 {
    if benchmark.iq_avg > 0.0 && benchmark.gtq_avg > 0.0 {
        clamp_score(50.0 * iq / benchmark.iq_avg + 50.0 * gtq / benchmark.gtq_avg)
    } else {
        NEUTRAL_SCORE
    }
}

pub fn behavioral_score(top_strengths: &[String], performance_rating: f64) -> f64 {
    let has_strengths = top_strengths.iter().any(|value| !value.trim().is_empty());
    let high_performer = performance_rating >= HIGH_PERFORMANCE_RATING;

    match (has_strengths, high_performer) {
        (true, true) => 85.0,
        (true, false) => 75.0,
        (false, true) => 70.0,
        (false, false) => 60.0,
    }
}

pub fn experience_score(tenure_months: u32) -> f64 {
    match tenure_months {
        60.. => 90.0,
        36..=59 => 80.0,
        24..=35 => 70.0,
        12..=23 => 60.0,
        _ => 50.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::test_support::employee;

    fn benchmark(competency_avg: f64) -> BenchmarkStatistics {
        BenchmarkStatistics {
            member_count: 2,
            competency_avg,
            iq_avg: 100.0,
            gtq_avg: 100.0,
            work_efficiency_avg: 50.0,
            performance_avg: 3.5,
        }
    }

    #[test]
    fn competency_is_relative_to_benchmark_and_clamped() {
        let stats = benchmark(4.5);

        let at_benchmark = score_candidate(&employee("C1", 4.5), &stats);
        assert_eq!(at_benchmark.competency, 100.0);

        let above = score_candidate(&employee("C2", 9.0), &stats);
        assert_eq!(above.competency, 100.0);

        let below = score_candidate(&employee("C3", 2.25), &stats);
        assert_eq!(below.competency, 50.0);
    }

    #[test]
    fn zero_benchmark_average_falls_back_to_neutral_per_dimension() {
        let mut stats = benchmark(0.0);
        stats.gtq_avg = 0.0;

        let scores = score_candidate(&employee("C1", 4.0), &stats);
        assert_eq!(scores.competency, NEUTRAL_SCORE);
        assert_eq!(scores.cognitive, NEUTRAL_SCORE);
        assert_eq!(scores.work_efficiency, 100.0);
    }

    #[test]
    fn pathological_inputs_stay_within_bounds() {
        let stats = benchmark(4.0);
        let mut candidate = employee("C1", -50.0);
        candidate.iq = 10_000.0;
        candidate.gtq = f64::MAX;
        candidate.work_efficiency_score = f64::INFINITY;

        let scores = score_candidate(&candidate, &stats);
        for dimension in Dimension::ALL {
            let value = scores.get(dimension);
            assert!((0.0..=100.0).contains(&value), "{dimension:?} = {value}");
        }
        assert_eq!(scores.competency, 0.0);
        assert_eq!(scores.cognitive, 100.0);
        assert_eq!(scores.work_efficiency, 100.0);
    }

    #[test]
    fn raising_competency_never_lowers_competency_score() {
        let stats = benchmark(3.7);
        let mut previous = f64::MIN;
        for step in 0..=60 {
            let raw = f64::from(step) * 0.25 - 2.0;
            let score = score_candidate(&employee("C1", raw), &stats).competency;
            assert!(score >= previous, "raw={raw} score={score} previous={previous}");
            previous = score;
        }
    }

    #[test]
    fn cognitive_blends_iq_and_gtq_halves() {
        let mut stats = benchmark(4.0);
        stats.iq_avg = 120.0;
        stats.gtq_avg = 80.0;
        let mut candidate = employee("C1", 4.0);
        candidate.iq = 96.0;
        candidate.gtq = 64.0;

        let scores = score_candidate(&candidate, &stats);
        assert!((scores.cognitive - 80.0).abs() < 1e-9);
    }

    #[test]
    fn behavioral_tiers() {
        let strengths = vec!["Achiever".to_string()];
        assert_eq!(behavioral_score(&strengths, 4.0), 85.0);
        assert_eq!(behavioral_score(&strengths, 3.9), 75.0);
        assert_eq!(behavioral_score(&[], 4.5), 70.0);
        assert_eq!(behavioral_score(&[" ".to_string()], 3.0), 60.0);
    }

    #[test]
    fn experience_tiers_are_inclusive_at_lower_bound() {
        assert_eq!(experience_score(60), 90.0);
        assert_eq!(experience_score(59), 80.0);
        assert_eq!(experience_score(36), 80.0);
        assert_eq!(experience_score(35), 70.0);
        assert_eq!(experience_score(24), 70.0);
        assert_eq!(experience_score(12), 60.0);
        assert_eq!(experience_score(11), 50.0);
        assert_eq!(experience_score(0), 50.0);
    }
}
