//! External file existence checks

use std::fs;
use std::path::{Path, PathBuf};

/// Prefix marking a path as relative to the project root
const PROJECT_RELATIVE_PREFIX: &str = "//";

/// Resolve a scene file path against the project root.
///
/// Absolute paths are kept as-is. `//`-prefixed and plain relative paths are
/// joined onto `root`.
pub fn resolve_path(path: &str, root: &Path) -> PathBuf {
    if let Some(rest) = path.strip_prefix(PROJECT_RELATIVE_PREFIX) {
        return root.join(rest);
    }

    let candidate = Path::new(path);
    if candidate.is_absolute() {
        candidate.to_path_buf()
    } else {
        root.join(candidate)
    }
}

/// Check whether `path` names a file that exists.
///
/// Empty paths and paths that fail to canonicalize count as missing.
pub fn exists(path: &str, root: &Path) -> bool {
    if path.is_empty() {
        return false;
    }

    let resolved = resolve_path(path, root);
    match fs::canonicalize(&resolved) {
        Ok(canonical) => canonical.exists(),
        Err(e) => {
            tracing::trace!(path = %resolved.display(), error = %e, "path did not resolve");
            false
        }
    }
}
