//! Result file writing
//!
//! Persists the computed sum as plain text, replacing whatever the output
//! file held before.

use crate::{
    core::render::render,
    error::{AddError, Result},
    utils::fs::FileSystemUtils,
};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Writes a computed sum to the step's output file
#[derive(Debug)]
pub struct ResultWriter {
    fs_utils: FileSystemUtils,
}

impl ResultWriter {
    /// Create a new result writer
    pub fn new() -> Self {
        Self {
            fs_utils: FileSystemUtils::new(),
        }
    }

    /// Write the rendered value to `output_file`, returning the text written
    ///
    /// The file is created or truncated; its parent directory must exist.
    #[instrument(skip(self, output_file))]
    pub fn write<P: AsRef<Path>>(&self, output_file: P, value: f64) -> Result<String> {
        let output_file = output_file.as_ref();
        let content = render(value);

        debug!("Rendered result: {}", content);

        self.fs_utils
            .write_file(output_file, content.as_bytes())
            .map_err(|e| AddError::file_system("write", output_file.to_path_buf(), e))?;

        info!("Wrote {} to {}", content, output_file.display());
        Ok(content)
    }
}

impl Default for ResultWriter {
    fn default() -> Self {
        Self::new()
    }
}
