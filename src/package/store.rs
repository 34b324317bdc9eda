//! Package store: on-disk collection of package records under the
//! repository root, one `<name>-<version>` directory per record.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::runtime::Runtime;

use super::{META_FILE, Meta};

/// Store for package records in a repository directory.
///
/// Provides creation and enumeration of records; lookup lives in
/// [`super::find_package`].
pub struct PackageStore<'a, R: Runtime> {
    runtime: &'a R,
    repo_root: PathBuf,
}

impl<'a, R: Runtime> PackageStore<'a, R> {
    pub fn new(runtime: &'a R, repo_root: PathBuf) -> Self {
        Self { runtime, repo_root }
    }

    pub fn repo_root(&self) -> &Path {
        &self.repo_root
    }

    /// Get the record directory for a given name/version.
    ///
    /// Returns: `<repo_root>/<name>-<version>`
    pub fn package_dir(&self, name: &str, version: &str) -> PathBuf {
        self.repo_root.join(Meta::dir_name(name, version))
    }

    /// Create a package record: metadata plus the given files, each file a
    /// `(relative path, content)` pair. Relative paths may contain directory
    /// separators; intermediate directories are created as needed.
    ///
    /// An existing record with the same name/version is overwritten
    /// silently. No validation is applied beyond what the filesystem
    /// enforces; an empty name or version produces a degenerate directory
    /// name.
    #[tracing::instrument(skip(self, dependencies, files))]
    pub fn create(
        &self,
        name: &str,
        version: &str,
        dependencies: Vec<String>,
        files: &[(String, String)],
    ) -> Result<()> {
        let package_dir = self.package_dir(name, version);
        self.runtime.create_dir_all(&package_dir)?;

        let meta = Meta::new(name, version, dependencies);
        meta.save(self.runtime, &package_dir.join(META_FILE))
            .with_context(|| format!("Failed to write metadata for {name}-{version}"))?;

        for (rel_path, content) in files {
            let file_path = package_dir.join(rel_path);
            if let Some(parent) = file_path.parent() {
                self.runtime.create_dir_all(parent)?;
            }
            self.runtime
                .write(&file_path, content.as_bytes())
                .with_context(|| format!("Failed to write package file {rel_path}"))?;
        }

        Ok(())
    }

    /// List the metadata of every record in the repository.
    ///
    /// One entry per subdirectory holding a readable metadata file, in
    /// filesystem enumeration order (not guaranteed sorted). Subdirectories
    /// without usable metadata are skipped, never an error.
    #[tracing::instrument(skip(self))]
    pub fn list(&self) -> Result<Vec<Meta>> {
        let mut records = Vec::new();

        if !self.runtime.exists(&self.repo_root) {
            return Ok(records);
        }

        for entry in self.runtime.read_dir(&self.repo_root)? {
            if !self.runtime.is_dir(&entry) {
                continue;
            }
            let meta_path = entry.join(META_FILE);
            if !self.runtime.exists(&meta_path) {
                continue;
            }
            match Meta::load(self.runtime, &meta_path) {
                Ok(meta) => records.push(meta),
                Err(e) => {
                    log::warn!("Failed to load metadata from {:?}: {}", meta_path, e);
                }
            }
        }

        Ok(records)
    }
}
