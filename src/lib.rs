//! # Add Step
//!
//! A pipeline step that adds one or more numbers given on the command line
//! and writes the sum, as plain text, to an output file.
//!
//! ## Example
//!
//! ```
//! use add_step::core::{render, sum};
//!
//! let total = sum(&[1.0, 2.0, 3.0]);
//! assert_eq!(render(total), "6.0");
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity
///
/// Logs go to stderr; stdout is left to the pipeline. Without `debug` only
/// warnings and errors are shown, so a successful run prints nothing.
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
