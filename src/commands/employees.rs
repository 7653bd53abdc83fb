use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::info;

use crate::cli::EmployeesArgs;
use crate::model::PopulationEntry;
use crate::source::{EmployeeSource, SqliteSource};

pub fn run(args: EmployeesArgs) -> Result<()> {
    let source = SqliteSource::open_read_only(&args.db_path)?;
    let population = source.fetch_population()?;
    info!(employees = population.len(), "listing employees");

    if args.json {
        let mut output = io::BufWriter::new(io::stdout().lock());
        serde_json::to_writer_pretty(&mut output, &population)
            .context("failed to serialize employee json output")?;
        writeln!(output)?;
        output.flush()?;
        return Ok(());
    }

    write_text(&population)
}

fn write_text(population: &[PopulationEntry]) -> Result<()> {
    let mut output = io::BufWriter::new(io::stdout().lock());

    writeln!(output, "Employees: {}", population.len())?;
    for entry in population {
        writeln!(
            output,
            "{}\t{}\t{}\t{}\t{} / {}\ttenure {}m",
            entry.employee_id,
            entry.full_name,
            entry.position,
            entry.grade,
            entry.directorate,
            entry.department,
            entry.tenure_months
        )?;
    }

    output.flush()?;
    Ok(())
}
