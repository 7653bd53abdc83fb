use anyhow::{Context, Result, bail};
use rusqlite::Connection;

use crate::util::now_utc_string;

pub const DB_SCHEMA_VERSION: &str = "0.1.0";

const DIMENSION_TABLES: [(&str, &str); 6] = [
    ("dim_companies", "company_id"),
    ("dim_positions", "position_id"),
    ("dim_grades", "grade_id"),
    ("dim_directorates", "directorate_id"),
    ("dim_departments", "department_id"),
    ("dim_divisions", "division_id"),
];

const COUNTED_TABLES: [&str; 5] = [
    "employees",
    "competencies_yearly",
    "profiles_psych",
    "performance_yearly",
    "strengths",
];

pub fn configure_connection(connection: &Connection) -> Result<()> {
    connection
        .pragma_update(None, "journal_mode", "WAL")
        .context("failed to set journal_mode=WAL")?;
    connection
        .pragma_update(None, "synchronous", "NORMAL")
        .context("failed to set synchronous=NORMAL")?;
    connection
        .pragma_update(None, "foreign_keys", "ON")
        .context("failed to enable foreign_keys")?;
    Ok(())
}

pub fn ensure_schema(connection: &Connection) -> Result<()> {
    connection
        .execute_batch(
            "
            CREATE TABLE IF NOT EXISTS metadata (
              key TEXT PRIMARY KEY,
              value TEXT NOT NULL
            );
            ",
        )
        .context("failed to create metadata table")?;

    for (table_name, key_column) in DIMENSION_TABLES {
        let sql = format!(
            "CREATE TABLE IF NOT EXISTS {table_name} (
               {key_column} INTEGER PRIMARY KEY,
               name TEXT NOT NULL
             )"
        );
        connection
            .execute(&sql, [])
            .with_context(|| format!("failed to create dimension table {table_name}"))?;
    }

    connection
        .execute_batch(
            "
            CREATE TABLE IF NOT EXISTS employees (
              employee_id TEXT PRIMARY KEY,
              fullname TEXT,
              company_id INTEGER,
              position_id INTEGER,
              grade_id INTEGER,
              directorate_id INTEGER,
              department_id INTEGER,
              division_id INTEGER,
              years_of_service_months INTEGER,
              FOREIGN KEY(company_id) REFERENCES dim_companies(company_id),
              FOREIGN KEY(position_id) REFERENCES dim_positions(position_id),
              FOREIGN KEY(grade_id) REFERENCES dim_grades(grade_id),
              FOREIGN KEY(directorate_id) REFERENCES dim_directorates(directorate_id),
              FOREIGN KEY(department_id) REFERENCES dim_departments(department_id),
              FOREIGN KEY(division_id) REFERENCES dim_divisions(division_id)
            );

            CREATE TABLE IF NOT EXISTS competencies_yearly (
              employee_id TEXT NOT NULL,
              pillar_code TEXT NOT NULL,
              year INTEGER NOT NULL,
              score REAL,
              PRIMARY KEY (employee_id, pillar_code, year),
              FOREIGN KEY(employee_id) REFERENCES employees(employee_id)
            );

            CREATE TABLE IF NOT EXISTS profiles_psych (
              employee_id TEXT PRIMARY KEY,
              iq REAL,
              gtq REAL,
              pauli REAL,
              FOREIGN KEY(employee_id) REFERENCES employees(employee_id)
            );

            CREATE TABLE IF NOT EXISTS performance_yearly (
              employee_id TEXT NOT NULL,
              year INTEGER NOT NULL,
              rating REAL,
              PRIMARY KEY (employee_id, year),
              FOREIGN KEY(employee_id) REFERENCES employees(employee_id)
            );

            CREATE TABLE IF NOT EXISTS strengths (
              employee_id TEXT NOT NULL,
              rank INTEGER NOT NULL,
              theme TEXT NOT NULL,
              PRIMARY KEY (employee_id, rank),
              FOREIGN KEY(employee_id) REFERENCES employees(employee_id)
            );

            CREATE INDEX IF NOT EXISTS idx_competencies_year ON competencies_yearly(year, employee_id);
            CREATE INDEX IF NOT EXISTS idx_performance_employee ON performance_yearly(employee_id);
            CREATE INDEX IF NOT EXISTS idx_strengths_employee_rank ON strengths(employee_id, rank);
            ",
        )
        .context("failed to create employee tables")?;

    let now = now_utc_string();
    connection.execute(
        "INSERT INTO metadata(key, value) VALUES('db_schema_version', ?1)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value",
        [DB_SCHEMA_VERSION],
    )?;
    connection.execute(
        "INSERT INTO metadata(key, value) VALUES('db_updated_at', ?1)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value",
        [now],
    )?;

    Ok(())
}

pub fn table_count(connection: &Connection, table_name: &str) -> Result<i64> {
    if !COUNTED_TABLES.contains(&table_name) {
        bail!("unknown table for count: {table_name}");
    }

    let sql = format!("SELECT COUNT(*) FROM {table_name}");
    let count = connection
        .query_row(&sql, [], |row| row.get(0))
        .with_context(|| format!("failed to count rows in {table_name}"))?;
    Ok(count)
}

pub fn counted_tables() -> &'static [&'static str] {
    &COUNTED_TABLES
}
