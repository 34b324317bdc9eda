use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::runtime::Runtime;

use super::Meta;

/// Find a package record directory by name, optionally pinned to a version.
///
/// Scans the repository root in filesystem enumeration order. Without a
/// version, the first subdirectory whose name starts with `name` wins — so a
/// name that is a prefix of another package's name (`foo` vs `foobar`) makes
/// the result non-deterministic. That prefix matching is a known wart kept
/// for compatibility, not an intended feature. With a version, the directory
/// name must equal `<name>-<version>` exactly.
///
/// Returns `Ok(None)` when nothing matches; missing packages are not errors.
#[tracing::instrument(skip(runtime, repo_root))]
pub fn find_package<R: Runtime>(
    runtime: &R,
    repo_root: &Path,
    name: &str,
    version: Option<&str>,
) -> Result<Option<PathBuf>> {
    if !runtime.exists(repo_root) {
        return Ok(None);
    }

    for entry in runtime.read_dir(repo_root)? {
        let Some(dir_name) = entry.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !dir_name.starts_with(name) {
            continue;
        }
        match version {
            Some(version) => {
                if dir_name == Meta::dir_name(name, version) {
                    return Ok(Some(entry));
                }
            }
            None => return Ok(Some(entry)),
        }
    }

    Ok(None)
}
