use super::ranking::CandidateProfile;
use super::scoring::DimensionScores;

pub const SYNTHETIC_DISPLAY_NAMES: [&str; 35] = [
    "Ahmad Wijaya",
    "Sari Dewanti",
    "Budi Santoso",
    "Maya Purnama",
    "Rizki Ramadhan",
    "Dian Kusuma",
    "Eko Pratama",
    "Fitri Handayani",
    "Guntur Siregar",
    "Hana Lestari",
    "Irfan Hakim",
    "Jihan Aulia",
    "Kurniawan Adi",
    "Lia Marlina",
    "M. Fajar Nugroho",
    "Nina Permata",
    "Oki Setiawan",
    "Putri Anggraini",
    "Rendra Maulana",
    "Siti Rahayu",
    "Taufik Hidayat",
    "Umi Kulsum",
    "Vino Pratama",
    "Wulan Sari",
    "Yoga Pradana",
    "Zahra Amanda",
    "Agus Salim",
    "Bella Fitriani",
    "Cahyo Budiman",
    "Dinda Maharani",
    "Erika Sari",
    "Farhan Akbar",
    "Gita Wulandari",
    "Hendra Kurniawan",
    "Indah Permatasari",
];

struct FixtureRow {
    employee_id: &'static str,
    name: &'static str,
    role: &'static str,
    division: &'static str,
    department: &'static str,
    directorate: &'static str,
    job_level: &'static str,
    tenure_months: u32,
    scores: [f64; 5],
}

// scores: competency, cognitive, work efficiency, behavioral, experience
const MANUAL_FIXTURE: [FixtureRow; 10] = [
    FixtureRow {
        employee_id: "EMP2024001",
        name: "Ahmad Wijaya",
        role: "Senior Data Analyst",
        division: "Business Intelligence",
        department: "Data Analytics",
        directorate: "Technology",
        job_level: "Level 8",
        tenure_months: 48,
        scores: [92.5, 88.3, 85.7, 89.2, 80.0],
    },
    FixtureRow {
        employee_id: "EMP2024002",
        name: "Sari Dewanti",
        role: "Data Scientist",
        division: "Advanced Analytics",
        department: "Data Science",
        directorate: "Technology",
        job_level: "Level 9",
        tenure_months: 60,
        scores: [88.7, 91.5, 82.4, 86.8, 90.0],
    },
    FixtureRow {
        employee_id: "EMP2024003",
        name: "Budi Santoso",
        role: "Business Intelligence Analyst",
        division: "BI Solutions",
        department: "Business Intelligence",
        directorate: "Business",
        job_level: "Level 7",
        tenure_months: 36,
        scores: [85.2, 83.6, 88.1, 84.3, 75.0],
    },
    FixtureRow {
        employee_id: "EMP2024004",
        name: "Maya Purnama",
        role: "Product Data Analyst",
        division: "Digital Products",
        department: "Product Analytics",
        directorate: "Product",
        job_level: "Level 8",
        tenure_months: 42,
        scores: [83.9, 86.2, 79.8, 87.5, 70.0],
    },
    FixtureRow {
        employee_id: "EMP2024005",
        name: "Rizki Ramadhan",
        role: "Data Engineer",
        division: "Data Platform",
        department: "Data Engineering",
        directorate: "Technology",
        job_level: "Level 8",
        tenure_months: 54,
        scores: [81.4, 84.7, 86.3, 82.9, 85.0],
    },
    FixtureRow {
        employee_id: "EMP2024006",
        name: "Dian Kusuma",
        role: "BI Developer",
        division: "Business Intelligence",
        department: "Data Analytics",
        directorate: "Technology",
        job_level: "Level 7",
        tenure_months: 30,
        scores: [79.8, 81.3, 83.6, 85.1, 60.0],
    },
    FixtureRow {
        employee_id: "EMP2024007",
        name: "Eko Pratama",
        role: "Marketing Analyst",
        division: "Digital Marketing",
        department: "Marketing Analytics",
        directorate: "Marketing",
        job_level: "Level 6",
        tenure_months: 24,
        scores: [77.5, 79.8, 81.2, 83.7, 60.0],
    },
    FixtureRow {
        employee_id: "EMP2024008",
        name: "Fitri Handayani",
        role: "Financial Analyst",
        division: "Financial Planning",
        department: "Finance Analytics",
        directorate: "Finance",
        job_level: "Level 7",
        tenure_months: 33,
        scores: [75.2, 77.6, 78.9, 81.4, 65.0],
    },
    FixtureRow {
        employee_id: "EMP2024009",
        name: "Guntur Siregar",
        role: "Operations Analyst",
        division: "Process Optimization",
        department: "Operations Analytics",
        directorate: "Operations",
        job_level: "Level 6",
        tenure_months: 18,
        scores: [73.8, 75.9, 76.4, 79.2, 50.0],
    },
    FixtureRow {
        employee_id: "EMP2024010",
        name: "Hana Lestari",
        role: "Data Quality Analyst",
        division: "Data Governance",
        department: "Data Management",
        directorate: "Technology",
        job_level: "Level 7",
        tenure_months: 27,
        scores: [71.5, 73.8, 74.6, 77.9, 55.0],
    },
];

pub fn manual_fixture() -> Vec<(CandidateProfile, DimensionScores)> {
    MANUAL_FIXTURE
        .iter()
        .map(|row| {
            let [competency, cognitive, work_efficiency, behavioral, experience] = row.scores;
            (
                CandidateProfile {
                    employee_id: row.employee_id.to_string(),
                    name: row.name.to_string(),
                    role: row.role.to_string(),
                    division: row.division.to_string(),
                    department: row.department.to_string(),
                    directorate: row.directorate.to_string(),
                    job_level: row.job_level.to_string(),
                    tenure_months: row.tenure_months,
                },
                DimensionScores::new(
                    competency,
                    cognitive,
                    work_efficiency,
                    behavioral,
                    experience,
                ),
            )
        })
        .collect()
}

pub fn synthetic_display_name(position: usize) -> Option<&'static str> {
    SYNTHETIC_DISPLAY_NAMES.get(position).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_fixture_is_fully_populated() {
        let rows = manual_fixture();
        assert_eq!(rows.len(), 10);
        for (profile, scores) in &rows {
            assert!(!profile.employee_id.is_empty());
            assert!(!profile.name.is_empty());
            assert!(scores.competency > 0.0 && scores.experience > 0.0);
        }
    }

    #[test]
    fn synthetic_names_run_out_after_pool() {
        assert_eq!(synthetic_display_name(0), Some("Ahmad Wijaya"));
        assert_eq!(synthetic_display_name(34), Some("Indah Permatasari"));
        assert_eq!(synthetic_display_name(35), None);
    }
}
