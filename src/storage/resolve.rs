//! Path resolution and confinement
//!
//! Translates user-supplied relative paths into verified absolute paths
//! contained within the library root. Every externally supplied path must
//! pass through here before any filesystem read.

use std::path::{Component, Path, PathBuf};

use crate::error::ResolveError;

/// Resolves a user-supplied relative path against the library root.
///
/// Empty or `/`-only input addresses the root itself. The relative path is
/// first normalized lexically so that a `..` escape is rejected before any
/// filesystem access, then joined, checked for existence, canonicalized, and
/// verified to still be a descendant of the root. The ancestry check uses
/// `Path::starts_with`, which compares whole components: a sibling directory
/// sharing the root's name as a string prefix does not pass.
pub fn resolve_request_path(root: &Path, relative: &str) -> Result<PathBuf, ResolveError> {
    // 1. Empty input addresses the root itself
    let trimmed = relative.trim_matches('/');
    if trimmed.is_empty() {
        return Ok(root.to_path_buf());
    }

    // 2. Lexical containment check, no filesystem access yet
    let mut normalized = PathBuf::new();
    for component in Path::new(trimmed).components() {
        match component {
            Component::Normal(part) => normalized.push(part),
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    return Err(ResolveError::OutsideRoot(relative.to_string()));
                }
            }
            Component::RootDir | Component::Prefix(_) => {
                return Err(ResolveError::OutsideRoot(relative.to_string()));
            }
        }
    }
    if normalized.as_os_str().is_empty() {
        return Ok(root.to_path_buf());
    }

    // 3. Existence check on the joined path
    let joined = root.join(&normalized);
    if !joined.exists() {
        return Err(ResolveError::NotFound(relative.to_string()));
    }

    // 4. Canonicalize and verify ancestry, component-wise
    let canonical = joined.canonicalize()?;
    let canonical_root = root.canonicalize()?;
    if !canonical.starts_with(&canonical_root) {
        return Err(ResolveError::OutsideRoot(relative.to_string()));
    }

    Ok(canonical)
}
