use anyhow::{Context, Result};
use rusqlite::Connection;
use tracing::info;

use crate::cli::InitArgs;
use crate::source::{DB_SCHEMA_VERSION, configure_connection, ensure_schema, seed_demo_dataset};
use crate::util::ensure_parent_directory;

pub fn run(args: InitArgs) -> Result<()> {
    ensure_parent_directory(&args.db_path)?;

    let mut connection = Connection::open(&args.db_path)
        .with_context(|| format!("failed to open database: {}", args.db_path.display()))?;
    configure_connection(&connection)?;
    ensure_schema(&connection)?;
    info!(
        path = %args.db_path.display(),
        schema_version = DB_SCHEMA_VERSION,
        "database schema ready"
    );

    if args.seed_demo {
        let counts = seed_demo_dataset(&mut connection)?;
        info!(
            employees = counts.employees,
            competency_rows = counts.competency_rows,
            psych_profiles = counts.psych_profiles,
            performance_rows = counts.performance_rows,
            strength_rows = counts.strength_rows,
            "seeded demo dataset"
        );
    }

    Ok(())
}
