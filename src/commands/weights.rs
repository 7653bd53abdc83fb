use std::io::{self, Write};

use anyhow::{Context, Result};

use crate::cli::WeightsArgs;
use crate::matching::select_weights;

pub fn run(args: WeightsArgs) -> Result<()> {
    let weights = select_weights(!args.equal_weights);
    let mut output = io::BufWriter::new(io::stdout().lock());

    if args.json {
        serde_json::to_writer_pretty(&mut output, &weights)
            .context("failed to serialize weights json output")?;
        writeln!(output)?;
    } else {
        writeln!(output, "Weights: {}", weights.policy().as_str())?;
        for (dimension, weight) in weights.entries() {
            writeln!(output, "\t{:<16}{:.3}", dimension.label(), weight)?;
        }
        writeln!(output, "\t{:<16}{:.3}", "Total", weights.sum())?;
    }

    output.flush()?;
    Ok(())
}
