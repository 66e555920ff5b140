//! Library root resolution
//!
//! Resolves the document library root from an ordered list of candidate
//! directories, creating the first candidate when none exist yet.

use log::info;
use std::fs;
use std::path::PathBuf;

use crate::error::RootError;

/// Resolves the library root from candidate directories in priority order.
///
/// Each candidate is checked relative to the process working directory; the
/// first one that exists and is a directory wins. When none exist, the first
/// candidate is created. The returned path is canonicalized so that later
/// confinement checks compare against a stable absolute form.
pub fn resolve_library_root(candidates: &[String]) -> Result<PathBuf, RootError> {
    if candidates.is_empty() {
        return Err(RootError::NoCandidates);
    }

    let cwd = std::env::current_dir()?;

    for candidate in candidates {
        let path = cwd.join(candidate);
        if path.is_dir() {
            let canonical = path.canonicalize()?;
            info!("Library root resolved to {}", canonical.display());
            return Ok(canonical);
        }
    }

    // No candidate is a directory yet: create the first one (idempotent)
    let default = cwd.join(&candidates[0]);
    if default.exists() && !default.is_dir() {
        // Occupied by a plain file; it cannot serve as root
        return Err(RootError::NotADirectory(
            default.to_string_lossy().to_string(),
        ));
    }
    fs::create_dir_all(&default)?;
    let canonical = default.canonicalize()?;
    info!("Library root created at {}", canonical.display());
    Ok(canonical)
}
