//! Secondary output: a one-line documentation-generator config carrying
//! the composed version, suitable for inclusion from a Doxyfile.

use std::fs;
use std::path::Path;

use crate::error::{Result, VersionStampError};

/// Overwrites `path` with a single `PROJECT_NUMBER` assignment.
///
/// The file is fully regenerated on every run:
///
/// `PROJECT_NUMBER         = "1.2.3+100"`
pub fn write_project_number(path: &Path, composed: &str) -> Result<()> {
    let line = format!("PROJECT_NUMBER         = \"{}\"\n", composed);
    fs::write(path, line)
        .map_err(|e| VersionStampError::file_access(path.display().to_string(), e))
}
