use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::{Connection, OpenFlags, params_from_iter, types::Value};
use tracing::{debug, info};

use super::EmployeeSource;
use crate::matching::{BenchmarkCohort, MatchRequest};
use crate::model::{
    DEFAULT_COMPETENCY_SCORE, EmployeeRecord, MAX_TOP_STRENGTHS, PoolCandidate, PopulationEntry,
    RawEmployeeRow, label_or_missing, tenure_or_zero,
};

pub struct SqliteSource {
    connection: Connection,
}

impl SqliteSource {
    pub fn open_read_only(db_path: &Path) -> Result<Self> {
        let connection = Connection::open_with_flags(
            db_path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .with_context(|| format!("failed to open database read-only: {}", db_path.display()))?;
        Ok(Self::from_connection(connection))
    }

    pub fn from_connection(connection: Connection) -> Self {
        Self { connection }
    }

    fn load_top_strengths(&self) -> Result<HashMap<String, Vec<String>>> {
        let mut statement = self.connection.prepare(
            "
            SELECT employee_id, theme
            FROM strengths
            WHERE rank <= ?1
            ORDER BY employee_id, rank
            ",
        )?;

        let mut rows = statement.query([MAX_TOP_STRENGTHS as i64])?;
        let mut out = HashMap::<String, Vec<String>>::new();
        while let Some(row) = rows.next()? {
            let employee_id: String = row.get(0)?;
            let theme: String = row.get(1)?;
            out.entry(employee_id).or_default().push(theme);
        }

        Ok(out)
    }
}

impl EmployeeSource for SqliteSource {
    fn fetch_population(&self) -> Result<Vec<PopulationEntry>> {
        let mut statement = self
            .connection
            .prepare(
                "
                SELECT
                  e.employee_id,
                  e.fullname,
                  p.name,
                  g.name,
                  d.name,
                  dep.name,
                  div.name,
                  c.name,
                  e.years_of_service_months
                FROM employees e
                LEFT JOIN dim_positions p ON e.position_id = p.position_id
                LEFT JOIN dim_grades g ON e.grade_id = g.grade_id
                LEFT JOIN dim_directorates d ON e.directorate_id = d.directorate_id
                LEFT JOIN dim_departments dep ON e.department_id = dep.department_id
                LEFT JOIN dim_divisions div ON e.division_id = div.division_id
                LEFT JOIN dim_companies c ON e.company_id = c.company_id
                WHERE e.employee_id IS NOT NULL
                ORDER BY e.fullname, e.employee_id
                ",
            )
            .context("failed to prepare population query")?;

        let mut rows = statement.query([])?;
        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            out.push(PopulationEntry {
                employee_id: row.get(0)?,
                full_name: label_or_missing(row.get(1)?),
                position: label_or_missing(row.get(2)?),
                grade: label_or_missing(row.get(3)?),
                directorate: label_or_missing(row.get(4)?),
                department: label_or_missing(row.get(5)?),
                division: label_or_missing(row.get(6)?),
                company: label_or_missing(row.get(7)?),
                tenure_months: tenure_or_zero(row.get(8)?),
            });
        }

        info!(employees = out.len(), "loaded employee population");
        Ok(out)
    }

    fn fetch_match_inputs(&self, request: &MatchRequest) -> Result<Vec<EmployeeRecord>> {
        debug!(
            job_vacancy_id = %request.job_vacancy_id,
            role_name = %request.role_name,
            job_level = %request.job_level,
            benchmarks = request.cohort.len(),
            "fetching match inputs"
        );

        let mut strengths = self
            .load_top_strengths()
            .context("failed to load employee strengths")?;

        let mut statement = self
            .connection
            .prepare(
                "
                SELECT
                  e.employee_id,
                  e.fullname,
                  p.name,
                  div.name,
                  dep.name,
                  d.name,
                  g.name,
                  e.years_of_service_months,
                  (
                    SELECT AVG(cy.score)
                    FROM competencies_yearly cy
                    WHERE cy.employee_id = e.employee_id
                      AND cy.year = (SELECT MAX(year) FROM competencies_yearly)
                  ),
                  pp.iq,
                  pp.gtq,
                  pp.pauli,
                  (
                    SELECT AVG(py.rating)
                    FROM performance_yearly py
                    WHERE py.employee_id = e.employee_id
                  )
                FROM employees e
                LEFT JOIN dim_positions p ON e.position_id = p.position_id
                LEFT JOIN dim_divisions div ON e.division_id = div.division_id
                LEFT JOIN dim_departments dep ON e.department_id = dep.department_id
                LEFT JOIN dim_directorates d ON e.directorate_id = d.directorate_id
                LEFT JOIN dim_grades g ON e.grade_id = g.grade_id
                LEFT JOIN profiles_psych pp ON e.employee_id = pp.employee_id
                WHERE e.employee_id IS NOT NULL
                ORDER BY e.employee_id
                ",
            )
            .context("failed to prepare match input query")?;

        let mut rows = statement.query([])?;
        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            let employee_id: String = row.get(0)?;
            let top_strengths = strengths.remove(&employee_id).unwrap_or_default();
            let raw = RawEmployeeRow {
                full_name: row.get(1)?,
                role: row.get(2)?,
                division: row.get(3)?,
                department: row.get(4)?,
                directorate: row.get(5)?,
                job_level: row.get(6)?,
                tenure_months: row.get(7)?,
                competency_score: row.get(8)?,
                iq: row.get(9)?,
                gtq: row.get(10)?,
                work_efficiency_score: row.get(11)?,
                performance_rating: row.get(12)?,
                top_strengths,
                employee_id,
            };
            out.push(raw.into_record());
        }

        info!(records = out.len(), "loaded match inputs");
        Ok(out)
    }

    fn fetch_candidate_pool(
        &self,
        cohort: &BenchmarkCohort,
        limit: usize,
    ) -> Result<Vec<PoolCandidate>> {
        let placeholders = (1..=cohort.len())
            .map(|index| format!("?{index}"))
            .collect::<Vec<String>>()
            .join(", ");
        let default_index = cohort.len() + 1;
        let limit_index = cohort.len() + 2;
        let sql = format!(
            "
            SELECT
              e.employee_id,
              e.fullname,
              p.name,
              div.name,
              dep.name,
              d.name,
              g.name,
              e.years_of_service_months,
              COALESCE((
                SELECT AVG(cy.score)
                FROM competencies_yearly cy
                WHERE cy.employee_id = e.employee_id
              ), ?{default_index}) AS competency_score
            FROM employees e
            LEFT JOIN dim_positions p ON e.position_id = p.position_id
            LEFT JOIN dim_divisions div ON e.division_id = div.division_id
            LEFT JOIN dim_departments dep ON e.department_id = dep.department_id
            LEFT JOIN dim_directorates d ON e.directorate_id = d.directorate_id
            LEFT JOIN dim_grades g ON e.grade_id = g.grade_id
            WHERE e.employee_id IS NOT NULL
              AND e.employee_id NOT IN ({placeholders})
            ORDER BY competency_score DESC, e.employee_id
            LIMIT ?{limit_index}
            "
        );

        let mut values = cohort
            .ids()
            .iter()
            .map(|id| Value::Text(id.clone()))
            .collect::<Vec<Value>>();
        values.push(Value::Real(DEFAULT_COMPETENCY_SCORE));
        values.push(Value::Integer(limit as i64));

        let mut statement = self
            .connection
            .prepare(&sql)
            .context("failed to prepare candidate pool query")?;
        let mut rows = statement.query(params_from_iter(values))?;
        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            out.push(PoolCandidate {
                employee_id: row.get(0)?,
                full_name: label_or_missing(row.get(1)?),
                role: label_or_missing(row.get(2)?),
                division: label_or_missing(row.get(3)?),
                department: label_or_missing(row.get(4)?),
                directorate: label_or_missing(row.get(5)?),
                job_level: label_or_missing(row.get(6)?),
                tenure_months: tenure_or_zero(row.get(7)?),
                competency_score: row.get(8)?,
            });
        }

        info!(candidates = out.len(), limit, "loaded candidate pool");
        Ok(out)
    }
}
