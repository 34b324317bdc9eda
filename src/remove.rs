//! Installation remover.

use anyhow::Result;
use log::debug;
use std::path::Path;

use crate::runtime::Runtime;

/// Delete every directory under the installation root whose name starts
/// with `name`, recursively. Returns the removed directory names in
/// enumeration order; an empty result means nothing matched.
///
/// The prefix match deliberately mirrors the locator: `remove("pkg")` takes
/// out every installed version of `pkg` in one call, but also anything whose
/// name merely begins with `pkg` (`pkgextra-1.0`). Kept for compatibility;
/// see `find_package`.
#[tracing::instrument(skip(runtime, install_root))]
pub fn remove_installed<R: Runtime>(
    runtime: &R,
    install_root: &Path,
    name: &str,
) -> Result<Vec<String>> {
    let mut removed = Vec::new();

    if !runtime.exists(install_root) {
        return Ok(removed);
    }

    for entry in runtime.read_dir(install_root)? {
        let Some(dir_name) = entry.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !dir_name.starts_with(name) {
            continue;
        }
        debug!("Removing installed directory {:?}", entry);
        runtime.remove_dir_all(&entry)?;
        removed.push(dir_name.to_string());
    }

    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::{MockRuntime, RealRuntime, Runtime};
    use mockall::predicate::eq;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn test_remove_all_matching_versions() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();
        let root = dir.path();

        runtime.create_dir_all(&root.join("pkg-1.0")).unwrap();
        runtime.create_dir_all(&root.join("pkg-2.0")).unwrap();
        runtime.create_dir_all(&root.join("other-1.0")).unwrap();
        runtime.write(&root.join("pkg-1.0/f.txt"), b"x").unwrap();

        let mut removed = remove_installed(&runtime, root, "pkg").unwrap();
        removed.sort();

        assert_eq!(removed, vec!["pkg-1.0".to_string(), "pkg-2.0".to_string()]);
        assert!(!runtime.exists(&root.join("pkg-1.0")));
        assert!(!runtime.exists(&root.join("pkg-2.0")));
        assert!(runtime.exists(&root.join("other-1.0")));
    }

    #[test]
    fn test_remove_no_match() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();
        runtime.create_dir_all(&dir.path().join("other-1.0")).unwrap();

        let removed = remove_installed(&runtime, dir.path(), "pkg").unwrap();
        assert!(removed.is_empty());
    }

    #[test]
    fn test_remove_missing_root() {
        let mut runtime = MockRuntime::new();
        let root = PathBuf::from("/nonexistent");

        runtime
            .expect_exists()
            .with(eq(root.clone()))
            .returning(|_| false);

        let removed = remove_installed(&runtime, &root, "pkg").unwrap();
        assert!(removed.is_empty());
    }

    #[test]
    fn test_remove_prefix_also_hits_longer_names() {
        // Documented limitation: "foo" also removes "foobar-2.0"
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();
        let root = dir.path();

        runtime.create_dir_all(&root.join("foo-1.0")).unwrap();
        runtime.create_dir_all(&root.join("foobar-2.0")).unwrap();

        let removed = remove_installed(&runtime, root, "foo").unwrap();
        assert_eq!(removed.len(), 2);
        assert!(!runtime.exists(&root.join("foo-1.0")));
        assert!(!runtime.exists(&root.join("foobar-2.0")));
    }
}
