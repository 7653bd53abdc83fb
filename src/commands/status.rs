use anyhow::{Context, Result};
use rusqlite::{Connection, OpenFlags, OptionalExtension};
use tracing::{info, warn};

use crate::cli::StatusArgs;
use crate::source::{counted_tables, table_count};

pub fn run(args: StatusArgs) -> Result<()> {
    info!(db_path = %args.db_path.display(), "status requested");

    if !args.db_path.exists() {
        warn!(path = %args.db_path.display(), "database file missing");
        return Ok(());
    }

    let connection = Connection::open_with_flags(
        &args.db_path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .with_context(|| format!("failed to open {}", args.db_path.display()))?;

    let schema_version = metadata_value(&connection, "db_schema_version").unwrap_or_default();
    let updated_at = metadata_value(&connection, "db_updated_at").unwrap_or_default();
    info!(
        schema_version = %schema_version.unwrap_or_default(),
        updated_at = %updated_at.unwrap_or_default(),
        "database metadata"
    );

    for table_name in counted_tables() {
        match table_count(&connection, table_name) {
            Ok(rows) => info!(table = %table_name, rows, "table status"),
            Err(err) => warn!(table = %table_name, error = %err, "table unavailable"),
        }
    }

    Ok(())
}

fn metadata_value(connection: &Connection, key: &str) -> Result<Option<String>> {
    let value = connection
        .query_row("SELECT value FROM metadata WHERE key = ?1", [key], |row| {
            row.get(0)
        })
        .optional()?;
    Ok(value)
}
