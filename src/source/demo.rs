use anyhow::{Context, Result};
use rusqlite::{Connection, params};
use serde::Serialize;

const COMPANIES: [(i64, &str); 1] = [(1, "PT Nusantara Digital")];

const POSITIONS: [(i64, &str); 6] = [
    (1, "Data Analyst"),
    (2, "Data Scientist"),
    (3, "Product Manager"),
    (4, "Engineering Lead"),
    (5, "HR Specialist"),
    (6, "Finance Officer"),
];

const GRADES: [(i64, &str); 4] = [(1, "Junior"), (2, "Middle"), (3, "Senior"), (4, "Lead")];

const DIRECTORATES: [(i64, &str); 3] = [(1, "Technology"), (2, "Business"), (3, "Corporate")];

const DEPARTMENTS: [(i64, &str); 4] = [
    (1, "Data Analytics"),
    (2, "Product"),
    (3, "People"),
    (4, "Finance"),
];

const DIVISIONS: [(i64, &str); 4] = [
    (1, "Business Intelligence"),
    (2, "Digital Products"),
    (3, "Human Capital"),
    (4, "Financial Planning"),
];

struct DemoEmployee {
    employee_id: &'static str,
    fullname: &'static str,
    position_id: i64,
    grade_id: i64,
    directorate_id: i64,
    department_id: i64,
    division_id: i64,
    tenure_months: i64,
    competencies: [f64; 2],
    psych: Option<(f64, f64, f64)>,
    ratings: &'static [f64],
    strengths: &'static [&'static str],
}

const EMPLOYEES: [DemoEmployee; 12] = [
    DemoEmployee {
        employee_id: "EMP100001",
        fullname: "Adi Nugraha",
        position_id: 2,
        grade_id: 3,
        directorate_id: 1,
        department_id: 1,
        division_id: 1,
        tenure_months: 72,
        competencies: [4.4, 4.6],
        psych: Some((128.0, 124.0, 62.0)),
        ratings: &[4.5, 4.6],
        strengths: &["Analytical", "Achiever", "Learner"],
    },
    DemoEmployee {
        employee_id: "EMP100002",
        fullname: "Bunga Citra",
        position_id: 1,
        grade_id: 3,
        directorate_id: 1,
        department_id: 1,
        division_id: 1,
        tenure_months: 58,
        competencies: [4.2, 4.5],
        psych: Some((121.0, 119.0, 58.0)),
        ratings: &[4.2, 4.4],
        strengths: &["Strategic", "Focus", "Input"],
    },
    DemoEmployee {
        employee_id: "EMP100003",
        fullname: "Cahya Lestari",
        position_id: 1,
        grade_id: 2,
        directorate_id: 1,
        department_id: 1,
        division_id: 1,
        tenure_months: 40,
        competencies: [3.9, 4.1],
        psych: Some((117.0, 112.0, 55.0)),
        ratings: &[3.9, 4.1],
        strengths: &["Analytical", "Deliberative"],
    },
    DemoEmployee {
        employee_id: "EMP100004",
        fullname: "Dimas Prakoso",
        position_id: 2,
        grade_id: 2,
        directorate_id: 1,
        department_id: 1,
        division_id: 1,
        tenure_months: 30,
        competencies: [3.6, 3.8],
        psych: Some((124.0, 115.0, 49.0)),
        ratings: &[3.6],
        strengths: &["Ideation", "Learner", "Intellection"],
    },
    DemoEmployee {
        employee_id: "EMP100005",
        fullname: "Eka Saputra",
        position_id: 3,
        grade_id: 3,
        directorate_id: 2,
        department_id: 2,
        division_id: 2,
        tenure_months: 66,
        competencies: [4.0, 4.2],
        psych: Some((112.0, 110.0, 53.0)),
        ratings: &[4.0, 4.3],
        strengths: &["Command", "Communication", "Arranger"],
    },
    DemoEmployee {
        employee_id: "EMP100006",
        fullname: "Fajar Hidayat",
        position_id: 4,
        grade_id: 4,
        directorate_id: 1,
        department_id: 2,
        division_id: 2,
        tenure_months: 84,
        competencies: [4.3, 4.3],
        psych: Some((119.0, 121.0, 60.0)),
        ratings: &[4.4, 4.2],
        strengths: &["Responsibility", "Developer", "Activator"],
    },
    DemoEmployee {
        employee_id: "EMP100007",
        fullname: "Gita Permata",
        position_id: 1,
        grade_id: 1,
        directorate_id: 2,
        department_id: 1,
        division_id: 1,
        tenure_months: 14,
        competencies: [3.2, 3.5],
        psych: Some((108.0, 104.0, 47.0)),
        ratings: &[3.4],
        strengths: &["Adaptability", "Woo"],
    },
    DemoEmployee {
        employee_id: "EMP100008",
        fullname: "Hendra Wijaya",
        position_id: 5,
        grade_id: 2,
        directorate_id: 3,
        department_id: 3,
        division_id: 3,
        tenure_months: 48,
        competencies: [3.4, 3.6],
        psych: Some((103.0, 101.0, 44.0)),
        ratings: &[3.7, 3.5],
        strengths: &["Empathy", "Harmony", "Includer"],
    },
    DemoEmployee {
        employee_id: "EMP100009",
        fullname: "Intan Maharani",
        position_id: 6,
        grade_id: 2,
        directorate_id: 3,
        department_id: 4,
        division_id: 4,
        tenure_months: 26,
        competencies: [3.5, 3.7],
        psych: None,
        ratings: &[4.1],
        strengths: &[],
    },
    DemoEmployee {
        employee_id: "EMP100010",
        fullname: "Joko Susilo",
        position_id: 6,
        grade_id: 1,
        directorate_id: 3,
        department_id: 4,
        division_id: 4,
        tenure_months: 9,
        competencies: [2.9, 3.1],
        psych: Some((98.0, 96.0, 41.0)),
        ratings: &[],
        strengths: &["Consistency"],
    },
    DemoEmployee {
        employee_id: "EMP100011",
        fullname: "Kartika Sari",
        position_id: 3,
        grade_id: 2,
        directorate_id: 2,
        department_id: 2,
        division_id: 2,
        tenure_months: 37,
        competencies: [3.8, 3.9],
        psych: Some((114.0, 113.0, 52.0)),
        ratings: &[3.9, 4.0],
        strengths: &["Maximizer", "Futuristic", "Relator"],
    },
    DemoEmployee {
        employee_id: "EMP100012",
        fullname: "Lukman Hakim",
        position_id: 4,
        grade_id: 3,
        directorate_id: 1,
        department_id: 1,
        division_id: 1,
        tenure_months: 61,
        competencies: [4.1, 4.0],
        psych: Some((120.0, 117.0, 57.0)),
        ratings: &[4.0],
        strengths: &["Discipline", "Achiever", "Focus"],
    },
];

const COMPETENCY_YEARS: [i64; 2] = [2023, 2024];
const RATING_FIRST_YEAR: i64 = 2023;

#[derive(Debug, Clone, Default, Serialize)]
pub struct DemoCounts {
    pub employees: usize,
    pub competency_rows: usize,
    pub psych_profiles: usize,
    pub performance_rows: usize,
    pub strength_rows: usize,
}

pub fn seed_demo_dataset(connection: &mut Connection) -> Result<DemoCounts> {
    let tx = connection
        .transaction()
        .context("failed to start demo seed transaction")?;
    let mut counts = DemoCounts::default();

    for (table_name, key_column, rows) in [
        ("dim_companies", "company_id", &COMPANIES[..]),
        ("dim_positions", "position_id", &POSITIONS[..]),
        ("dim_grades", "grade_id", &GRADES[..]),
        ("dim_directorates", "directorate_id", &DIRECTORATES[..]),
        ("dim_departments", "department_id", &DEPARTMENTS[..]),
        ("dim_divisions", "division_id", &DIVISIONS[..]),
    ] {
        let sql = format!(
            "INSERT INTO {table_name}({key_column}, name) VALUES(?1, ?2)
             ON CONFLICT({key_column}) DO UPDATE SET name=excluded.name"
        );
        let mut statement = tx.prepare(&sql)?;
        for (id, name) in rows {
            statement
                .execute(params![id, name])
                .with_context(|| format!("failed to seed {table_name}"))?;
        }
    }

    {
        let mut employee_statement = tx.prepare(
            "
            INSERT INTO employees(
              employee_id, fullname, company_id, position_id, grade_id,
              directorate_id, department_id, division_id, years_of_service_months
            )
            VALUES(?1, ?2, 1, ?3, ?4, ?5, ?6, ?7, ?8)
            ON CONFLICT(employee_id) DO UPDATE SET
              fullname=excluded.fullname,
              position_id=excluded.position_id,
              grade_id=excluded.grade_id,
              directorate_id=excluded.directorate_id,
              department_id=excluded.department_id,
              division_id=excluded.division_id,
              years_of_service_months=excluded.years_of_service_months
            ",
        )?;
        let mut competency_statement = tx.prepare(
            "INSERT OR REPLACE INTO competencies_yearly(employee_id, pillar_code, year, score)
             VALUES(?1, 'CORE', ?2, ?3)",
        )?;
        let mut psych_statement = tx.prepare(
            "INSERT OR REPLACE INTO profiles_psych(employee_id, iq, gtq, pauli)
             VALUES(?1, ?2, ?3, ?4)",
        )?;
        let mut rating_statement = tx.prepare(
            "INSERT OR REPLACE INTO performance_yearly(employee_id, year, rating)
             VALUES(?1, ?2, ?3)",
        )?;
        let mut strength_statement = tx.prepare(
            "INSERT OR REPLACE INTO strengths(employee_id, rank, theme) VALUES(?1, ?2, ?3)",
        )?;

        for employee in &EMPLOYEES {
            employee_statement
                .execute(params![
                    employee.employee_id,
                    employee.fullname,
                    employee.position_id,
                    employee.grade_id,
                    employee.directorate_id,
                    employee.department_id,
                    employee.division_id,
                    employee.tenure_months,
                ])
                .with_context(|| format!("failed to seed employee {}", employee.employee_id))?;
            counts.employees += 1;

            for (year, score) in COMPETENCY_YEARS.iter().zip(employee.competencies) {
                competency_statement.execute(params![employee.employee_id, year, score])?;
                counts.competency_rows += 1;
            }

            if let Some((iq, gtq, pauli)) = employee.psych {
                psych_statement.execute(params![employee.employee_id, iq, gtq, pauli])?;
                counts.psych_profiles += 1;
            }

            for (offset, rating) in employee.ratings.iter().enumerate() {
                let year = RATING_FIRST_YEAR + offset as i64;
                rating_statement.execute(params![employee.employee_id, year, rating])?;
                counts.performance_rows += 1;
            }

            for (index, theme) in employee.strengths.iter().enumerate() {
                strength_statement.execute(params![employee.employee_id, index as i64 + 1, theme])?;
                counts.strength_rows += 1;
            }
        }
    }

    tx.commit().context("failed to commit demo seed")?;
    Ok(counts)
}
