//! Low-fidelity estimation modes used when benchmark-relative scoring is not
//! possible. Neither mode infers a relationship between dimensions; both
//! apply the ratios below as given.

use anyhow::{Context, Result};
use rand::Rng;
use regex::Regex;

use super::ranking::round_to_tenth;
use super::scoring::{DimensionScores, NEUTRAL_SCORE, clamp_score};
use crate::model::PopulationEntry;

pub const HEURISTIC_BASE_RATE: f64 = 65.0;
pub const ANALYTICAL_POSITION_BONUS: f64 = 15.0;
pub const LEADERSHIP_POSITION_BONUS: f64 = 10.0;
pub const SENIOR_TENURE_BONUS: f64 = 10.0;
pub const ESTABLISHED_TENURE_BONUS: f64 = 7.0;
pub const ML_POLICY_BONUS: f64 = 5.0;
pub const HEURISTIC_CEILING: f64 = 95.0;
pub const HEURISTIC_JITTER: f64 = 3.0;

/// Fixed-fraction mode: every dimension is a constant share of one estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedFractions {
    pub competency: f64,
    pub cognitive: f64,
    pub work_efficiency: f64,
    pub behavioral: f64,
    pub experience: f64,
}

pub const POSITION_HEURISTIC_FRACTIONS: FixedFractions = FixedFractions {
    competency: 0.90,
    cognitive: 0.80,
    work_efficiency: 0.85,
    behavioral: 0.75,
    experience: 0.70,
};

/// Randomized-fraction mode: dimensions are drawn as a uniform share of the
/// competency score within these ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractionRanges {
    pub cognitive: (f64, f64),
    pub work_efficiency: (f64, f64),
    pub behavioral: (f64, f64),
}

pub const SYNTHETIC_POOL_RANGES: FractionRanges = FractionRanges {
    cognitive: (0.85, 0.95),
    work_efficiency: (0.80, 0.90),
    behavioral: (0.75, 0.85),
};

#[derive(Debug, Clone)]
pub struct PositionKeywords {
    analytical: Regex,
    leadership: Regex,
}

impl PositionKeywords {
    pub fn new() -> Result<Self> {
        let analytical = Regex::new(r"(?i)data|analyst|scientist")
            .context("failed to compile analytical position pattern")?;
        let leadership = Regex::new(r"(?i)manager|lead")
            .context("failed to compile leadership position pattern")?;
        Ok(Self {
            analytical,
            leadership,
        })
    }

    pub fn position_bonus(&self, position: &str) -> f64 {
        if self.analytical.is_match(position) {
            ANALYTICAL_POSITION_BONUS
        } else if self.leadership.is_match(position) {
            LEADERSHIP_POSITION_BONUS
        } else {
            0.0
        }
    }
}

pub fn tenure_bonus(tenure_months: u32) -> f64 {
    let years = f64::from(tenure_months) / 12.0;
    if years > 5.0 {
        SENIOR_TENURE_BONUS
    } else if years > 3.0 {
        ESTABLISHED_TENURE_BONUS
    } else {
        0.0
    }
}

/// Deterministic part of the roster estimate, before jitter.
pub fn position_estimate(
    keywords: &PositionKeywords,
    entry: &PopulationEntry,
    use_ml_weights: bool,
) -> f64 {
    let base = HEURISTIC_BASE_RATE
        + keywords.position_bonus(&entry.position)
        + tenure_bonus(entry.tenure_months);
    if use_ml_weights {
        (base + ML_POLICY_BONUS).min(HEURISTIC_CEILING)
    } else {
        base.min(HEURISTIC_CEILING)
    }
}

pub fn jittered_estimate<R: Rng + ?Sized>(estimate: f64, rng: &mut R) -> f64 {
    let jitter = rng.gen_range(-HEURISTIC_JITTER..=HEURISTIC_JITTER);
    round_to_tenth(clamp_score(estimate + jitter))
}

pub fn fixed_fraction_scores(estimate: f64, fractions: &FixedFractions) -> DimensionScores {
    DimensionScores::new(
        round_to_tenth(estimate * fractions.competency),
        round_to_tenth(estimate * fractions.cognitive),
        round_to_tenth(estimate * fractions.work_efficiency),
        round_to_tenth(estimate * fractions.behavioral),
        round_to_tenth(estimate * fractions.experience),
    )
}

/// Competency relative to the strongest candidate in the pool.
pub fn relative_competency(competency_score: f64, pool_max: f64) -> f64 {
    if pool_max > 0.0 {
        clamp_score(100.0 * competency_score / pool_max)
    } else {
        NEUTRAL_SCORE
    }
}

pub fn randomized_fraction_scores<R: Rng + ?Sized>(
    competency: f64,
    tenure_months: u32,
    ranges: &FractionRanges,
    rng: &mut R,
) -> DimensionScores {
    let mut draw = |(low, high): (f64, f64)| competency * rng.gen_range(low..=high);
    let cognitive = draw(ranges.cognitive);
    let work_efficiency = draw(ranges.work_efficiency);
    let behavioral = draw(ranges.behavioral);

    DimensionScores::new(
        competency,
        cognitive,
        work_efficiency,
        behavioral,
        strict_experience_tier(tenure_months),
    )
}

/// Tenure tiers with exclusive thresholds, as the pooled estimate has always
/// applied them.
pub fn strict_experience_tier(tenure_months: u32) -> f64 {
    match tenure_months {
        61.. => 90.0,
        37..=60 => 80.0,
        25..=36 => 70.0,
        13..=24 => 60.0,
        _ => 50.0,
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::matching::test_support::roster_entry;

    #[test]
    fn position_estimate_applies_keyword_and_tenure_bonuses() {
        let keywords = PositionKeywords::new().expect("patterns compile");

        let analyst = roster_entry("E1", "Senior Data Analyst", 72);
        assert_eq!(position_estimate(&keywords, &analyst, false), 90.0);
        assert_eq!(position_estimate(&keywords, &analyst, true), 95.0);

        let manager = roster_entry("E2", "Sales Manager", 40);
        assert_eq!(position_estimate(&keywords, &manager, false), 82.0);

        let clerk = roster_entry("E3", "Clerk", 36);
        assert_eq!(position_estimate(&keywords, &clerk, false), 65.0);
        assert_eq!(position_estimate(&keywords, &clerk, true), 70.0);
    }

    #[test]
    fn analytical_keyword_wins_over_leadership() {
        let keywords = PositionKeywords::new().expect("patterns compile");
        assert_eq!(keywords.position_bonus("DATA Team Lead"), 15.0);
        assert_eq!(keywords.position_bonus("Team Leader"), 10.0);
        assert_eq!(keywords.position_bonus("Receptionist"), 0.0);
    }

    #[test]
    fn jitter_stays_within_three_points_and_is_seedable() {
        let mut first = ChaCha8Rng::seed_from_u64(7);
        let mut second = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            let left = jittered_estimate(80.0, &mut first);
            let right = jittered_estimate(80.0, &mut second);
            assert_eq!(left, right);
            assert!((77.0..=83.0).contains(&left), "{left}");
        }

        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..50 {
            let value = jittered_estimate(99.0, &mut rng);
            assert!(value <= 100.0);
        }
    }

    #[test]
    fn fixed_fractions_scale_the_estimate() {
        let scores = fixed_fraction_scores(80.0, &POSITION_HEURISTIC_FRACTIONS);
        assert_eq!(scores.competency, 72.0);
        assert_eq!(scores.cognitive, 64.0);
        assert_eq!(scores.work_efficiency, 68.0);
        assert_eq!(scores.behavioral, 60.0);
        assert_eq!(scores.experience, 56.0);
    }

    #[test]
    fn randomized_fractions_stay_within_ranges() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..100 {
            let scores = randomized_fraction_scores(80.0, 50, &SYNTHETIC_POOL_RANGES, &mut rng);
            assert_eq!(scores.competency, 80.0);
            assert!((67.99..=76.01).contains(&scores.cognitive));
            assert!((63.99..=72.01).contains(&scores.work_efficiency));
            assert!((59.99..=68.01).contains(&scores.behavioral));
            assert_eq!(scores.experience, 80.0);
        }
    }

    #[test]
    fn relative_competency_uses_pool_maximum() {
        assert_eq!(relative_competency(2.0, 4.0), 50.0);
        assert_eq!(relative_competency(4.0, 4.0), 100.0);
        assert_eq!(relative_competency(3.0, 0.0), NEUTRAL_SCORE);
    }

    #[test]
    fn strict_tiers_exclude_the_threshold() {
        assert_eq!(strict_experience_tier(61), 90.0);
        assert_eq!(strict_experience_tier(60), 80.0);
        assert_eq!(strict_experience_tier(36), 70.0);
        assert_eq!(strict_experience_tier(24), 60.0);
        assert_eq!(strict_experience_tier(12), 50.0);
    }
}
