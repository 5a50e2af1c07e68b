//! Utility functions for error handling
//!
//! File helpers that attach the offending path to any IO failure.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{FamilyTreeError, Result};

/// Safely open a file with rich error information
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for logging)
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if path.is_dir() {
        return Err(FamilyTreeError::io(
            path,
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("expected a file for: {purpose}"),
            ),
        ));
    }

    fs::File::open(path).map_err(|e| {
        log::debug!("Failed to open {} for {purpose}: {e}", path.display());
        FamilyTreeError::io(path, e)
    })
}

/// Create a directory (and its parents) if it does not already exist
pub fn ensure_directory(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }

    log::debug!("Creating directory {}", path.display());
    fs::create_dir_all(path).map_err(|e| FamilyTreeError::io(path, e))
}

/// Write bytes to a file, replacing any previous content
pub fn safe_write(path: &Path, contents: impl AsRef<[u8]>) -> Result<()> {
    fs::write(path, contents).map_err(|e| FamilyTreeError::io(path, e))
}

/// Read a whole file into memory
pub fn safe_read(path: &Path, purpose: &str) -> Result<Vec<u8>> {
    let mut file = safe_open_file(path, purpose)?;
    let mut content = Vec::new();
    io::Read::read_to_end(&mut file, &mut content).map_err(|e| FamilyTreeError::io(path, e))?;
    Ok(content)
}
