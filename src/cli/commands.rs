//! Command implementation for the CLI

use crate::{
    config::Config,
    core::{output::ResultWriter, sum::sum},
};
use anyhow::Context;
use tracing::{debug, info, instrument};

/// Add the configured numbers and write the result to the output file
#[instrument(skip(config))]
pub fn execute_command(config: &Config) -> anyhow::Result<f64> {
    debug!("Adding {} number(s): {:?}", config.numbers.len(), config.numbers);

    let total = sum(&config.numbers);

    let writer = ResultWriter::new();
    writer
        .write(&config.output_file, total)
        .with_context(|| format!("Failed to write result to {}", config.output_file.display()))?;

    info!("Addition completed successfully");
    Ok(total)
}
