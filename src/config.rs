//! Configuration management for the add step
//!
//! Centralizes the run configuration and provides validation.

use crate::{cli::Args, error::AddError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// File the sum is written to
    pub output_file: PathBuf,
    /// Numbers to add, in command-line order
    pub numbers: Vec<f64>,
}

impl Config {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Result<Self, AddError> {
        let config = Self {
            debug: args.debug,
            output_file: args.output_file.clone(),
            numbers: args.numbers.clone(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), AddError> {
        if self.output_file.as_os_str().is_empty() {
            return Err(AddError::validation("output file path is empty"));
        }

        if self.numbers.is_empty() {
            return Err(AddError::validation("at least one number is required"));
        }

        Ok(())
    }
}
