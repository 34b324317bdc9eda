//! Merge-copy of a stored package directory into the installation tree.

use anyhow::Result;
use std::path::Path;

use crate::package::META_FILE;
use crate::runtime::Runtime;

/// Copy every entry of a package record directory, except the metadata
/// file, into `dest_dir`. The destination is created even when the package
/// holds no files. Existing destination content is merged: subdirectories
/// recursively, files overwritten one by one.
pub fn copy_package_contents<R: Runtime>(
    runtime: &R,
    package_dir: &Path,
    dest_dir: &Path,
) -> Result<()> {
    runtime.create_dir_all(dest_dir)?;

    for entry in runtime.read_dir(package_dir)? {
        let Some(file_name) = entry.file_name() else {
            continue;
        };
        // Metadata is excluded only at the top level; a package may carry
        // its own unrelated metadata.json deeper in its tree.
        if file_name.to_str() == Some(META_FILE) {
            continue;
        }
        let dest = dest_dir.join(file_name);
        if runtime.is_dir(&entry) {
            copy_tree(runtime, &entry, &dest)?;
        } else {
            runtime.copy(&entry, &dest)?;
        }
    }

    Ok(())
}

fn copy_tree<R: Runtime>(runtime: &R, src: &Path, dest: &Path) -> Result<()> {
    runtime.create_dir_all(dest)?;
    for entry in runtime.read_dir(src)? {
        let Some(file_name) = entry.file_name() else {
            continue;
        };
        let dest = dest.join(file_name);
        if runtime.is_dir(&entry) {
            copy_tree(runtime, &entry, &dest)?;
        } else {
            runtime.copy(&entry, &dest)?;
        }
    }
    Ok(())
}
