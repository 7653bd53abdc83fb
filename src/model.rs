use serde::{Deserialize, Serialize};

pub const DEFAULT_COMPETENCY_SCORE: f64 = 3.0;
pub const DEFAULT_IQ: f64 = 100.0;
pub const DEFAULT_GTQ: f64 = 100.0;
pub const DEFAULT_WORK_EFFICIENCY_SCORE: f64 = 50.0;
pub const DEFAULT_PERFORMANCE_RATING: f64 = 3.5;
pub const DEFAULT_TOP_STRENGTHS: [&str; 3] = ["Adaptable", "Learner", "Collaborative"];
pub const MAX_TOP_STRENGTHS: usize = 3;
pub const MISSING_LABEL: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub employee_id: String,
    pub full_name: String,
    pub role: String,
    pub division: String,
    pub department: String,
    pub directorate: String,
    pub job_level: String,
    pub tenure_months: u32,
    pub competency_score: f64,
    pub iq: f64,
    pub gtq: f64,
    pub work_efficiency_score: f64,
    pub performance_rating: f64,
    pub top_strengths: Vec<String>,
}

/// Employee row as retrieved, before per-field defaults are applied.
#[derive(Debug, Clone, Default)]
pub struct RawEmployeeRow {
    pub employee_id: String,
    pub full_name: Option<String>,
    pub role: Option<String>,
    pub division: Option<String>,
    pub department: Option<String>,
    pub directorate: Option<String>,
    pub job_level: Option<String>,
    pub tenure_months: Option<i64>,
    pub competency_score: Option<f64>,
    pub iq: Option<f64>,
    pub gtq: Option<f64>,
    pub work_efficiency_score: Option<f64>,
    pub performance_rating: Option<f64>,
    pub top_strengths: Vec<String>,
}

impl RawEmployeeRow {
    pub fn into_record(self) -> EmployeeRecord {
        let mut top_strengths = self
            .top_strengths
            .into_iter()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .take(MAX_TOP_STRENGTHS)
            .collect::<Vec<String>>();
        if top_strengths.is_empty() {
            top_strengths = DEFAULT_TOP_STRENGTHS
                .iter()
                .map(|value| value.to_string())
                .collect();
        }

        EmployeeRecord {
            full_name: label_or_missing(self.full_name),
            role: label_or_missing(self.role),
            division: label_or_missing(self.division),
            department: label_or_missing(self.department),
            directorate: label_or_missing(self.directorate),
            job_level: label_or_missing(self.job_level),
            tenure_months: tenure_or_zero(self.tenure_months),
            competency_score: finite_or(self.competency_score, DEFAULT_COMPETENCY_SCORE),
            iq: finite_or(self.iq, DEFAULT_IQ),
            gtq: finite_or(self.gtq, DEFAULT_GTQ),
            work_efficiency_score: finite_or(
                self.work_efficiency_score,
                DEFAULT_WORK_EFFICIENCY_SCORE,
            ),
            performance_rating: finite_or(self.performance_rating, DEFAULT_PERFORMANCE_RATING),
            top_strengths,
            employee_id: self.employee_id,
        }
    }
}

/// Roster row used for benchmark selection and the in-memory fallback pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopulationEntry {
    pub employee_id: String,
    pub full_name: String,
    pub position: String,
    pub grade: String,
    pub directorate: String,
    pub department: String,
    pub division: String,
    pub company: String,
    pub tenure_months: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolCandidate {
    pub employee_id: String,
    pub full_name: String,
    pub role: String,
    pub division: String,
    pub department: String,
    pub directorate: String,
    pub job_level: String,
    pub tenure_months: u32,
    pub competency_score: f64,
}

pub fn label_or_missing(value: Option<String>) -> String {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| MISSING_LABEL.to_string())
}

pub fn tenure_or_zero(value: Option<i64>) -> u32 {
    value
        .map(|months| months.clamp(0, i64::from(u32::MAX)) as u32)
        .unwrap_or(0)
}

fn finite_or(value: Option<f64>, default: f64) -> f64 {
    value.filter(|value| value.is_finite()).unwrap_or(default)
}
