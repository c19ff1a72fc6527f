//! File system utility functions
//!
//! Provides scoped file writes with tracing.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, instrument};

/// Utility struct for file system operations
#[derive(Debug)]
pub struct FileSystemUtils;

impl FileSystemUtils {
    /// Create a new file system utilities instance
    pub fn new() -> Self {
        Self
    }

    /// Write content to a file, creating or truncating it
    ///
    /// Missing parent directories are an error, not created on demand. The
    /// handle is closed when this returns, whether or not the write succeeded.
    #[instrument(skip(self, contents))]
    pub fn write_file<P: AsRef<Path> + std::fmt::Debug, C: AsRef<[u8]>>(
        &self,
        path: P,
        contents: C,
    ) -> io::Result<()> {
        let path = path.as_ref();

        debug!("Writing file: {}", path.display());

        let mut file = File::create(path)?;
        file.write_all(contents.as_ref())?;
        file.flush()?;

        debug!("File written successfully");
        Ok(())
    }
}

impl Default for FileSystemUtils {
    fn default() -> Self {
        Self::new()
    }
}
