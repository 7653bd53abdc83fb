use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Competency,
    Cognitive,
    WorkEfficiency,
    Behavioral,
    Experience,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::Competency,
        Dimension::Cognitive,
        Dimension::WorkEfficiency,
        Dimension::Behavioral,
        Dimension::Experience,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Competency => "competency",
            Self::Cognitive => "cognitive",
            Self::WorkEfficiency => "work_efficiency",
            Self::Behavioral => "behavioral",
            Self::Experience => "experience",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Competency => "Competency",
            Self::Cognitive => "Cognitive",
            Self::WorkEfficiency => "Work Efficiency",
            Self::Behavioral => "Behavioral",
            Self::Experience => "Experience",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightPolicy {
    MlDerived,
    Equal,
}

impl WeightPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MlDerived => "ml_derived",
            Self::Equal => "equal",
        }
    }
}

/// Per-dimension weights. Only the canonical constants below can be built,
/// so every instance sums to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightVector {
    policy: WeightPolicy,
    competency: f64,
    cognitive: f64,
    work_efficiency: f64,
    behavioral: f64,
    experience: f64,
}

pub const ML_WEIGHTS: WeightVector = WeightVector {
    policy: WeightPolicy::MlDerived,
    competency: 0.646,
    cognitive: 0.039,
    work_efficiency: 0.121,
    behavioral: 0.151,
    experience: 0.043,
};

pub const EQUAL_WEIGHTS: WeightVector = WeightVector {
    policy: WeightPolicy::Equal,
    competency: 0.2,
    cognitive: 0.2,
    work_efficiency: 0.2,
    behavioral: 0.2,
    experience: 0.2,
};

impl WeightVector {
    pub fn policy(&self) -> WeightPolicy {
        self.policy
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

    pub fn sum(&self) -> f64 {
        Dimension::ALL
            .iter()
            .map(|dimension| self.get(*dimension))
            .sum()
    }

    pub fn entries(&self) -> Vec<(Dimension, f64)> {
        Dimension::ALL
            .iter()
            .map(|dimension| (*dimension, self.get(*dimension)))
            .collect()
    }
}

pub fn select_weights(use_ml_weights: bool) -> WeightVector {
    if use_ml_weights {
        ML_WEIGHTS
    } else {
        EQUAL_WEIGHTS
    }
}
