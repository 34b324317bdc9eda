//! Dependency-resolving installer.
//!
//! Installation is a single connected traversal over the dependency graph:
//! one visited set is shared by mutable reference across every recursive
//! call of a top-level invocation. Dependencies are attempted before the
//! dependent's own files are copied, and a failed branch (missing package)
//! never aborts its siblings or its dependent — partial installs are the
//! documented policy here, not a bug.

mod copy;

pub use copy::copy_package_contents;

use anyhow::Result;
use log::debug;
use std::collections::HashSet;
use std::path::PathBuf;

use crate::package::{DepSpec, META_FILE, Meta, find_package};
use crate::runtime::Runtime;

/// Outcome of one node of the install traversal, in traversal order
/// (dependencies before dependents).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallEvent {
    /// The package's files were materialized under the installation root.
    Installed { name: String, version: String },
    /// The name was already handled earlier in this invocation; the branch
    /// stops here. Guards against duplicate work and dependency cycles.
    AlreadyInstalled { name: String },
    /// No matching record in the repository; the branch stops here but the
    /// dependent still installs.
    NotFound { name: String },
}

/// Installer for a repository root / installation root pair.
pub struct Installer<'a, R: Runtime> {
    runtime: &'a R,
    repo_root: PathBuf,
    install_root: PathBuf,
}

impl<'a, R: Runtime> Installer<'a, R> {
    pub fn new(runtime: &'a R, repo_root: PathBuf, install_root: PathBuf) -> Self {
        Self {
            runtime,
            repo_root,
            install_root,
        }
    }

    /// Install a package and, transitively, its dependencies.
    ///
    /// Returns the ordered event log of the whole traversal. Domain
    /// conditions (missing package, duplicate name) are events, not errors;
    /// only I/O failures come back as `Err` and abort the invocation.
    #[tracing::instrument(skip(self))]
    pub fn install(&self, spec: &DepSpec) -> Result<Vec<InstallEvent>> {
        let mut visited = HashSet::new();
        let mut events = Vec::new();
        self.install_recursive(spec, &mut visited, &mut events)?;
        Ok(events)
    }

    fn install_recursive(
        &self,
        spec: &DepSpec,
        visited: &mut HashSet<String>,
        events: &mut Vec<InstallEvent>,
    ) -> Result<()> {
        let Some(package_dir) =
            find_package(self.runtime, &self.repo_root, &spec.name, spec.version.as_deref())?
        else {
            debug!("Package {} not found in repository", spec.name);
            events.push(InstallEvent::NotFound {
                name: spec.name.clone(),
            });
            return Ok(());
        };

        let meta = Meta::load(self.runtime, &package_dir.join(META_FILE))?;

        if !visited.insert(spec.name.clone()) {
            debug!("{} already handled in this invocation", spec.name);
            events.push(InstallEvent::AlreadyInstalled {
                name: spec.name.clone(),
            });
            return Ok(());
        }

        // Dependencies first. The visited entry is already in place, so a
        // cycle back to this name terminates as "already installed" instead
        // of recursing forever.
        for dep in meta.dep_specs() {
            self.install_recursive(&dep, visited, events)?;
        }

        // Destination is named after the requested name and the version the
        // metadata declares, which may differ from the requested version for
        // a latest-match lookup.
        let dest_dir = self
            .install_root
            .join(Meta::dir_name(&spec.name, &meta.version));
        debug!("Copying {:?} -> {:?}", package_dir, dest_dir);
        copy_package_contents(self.runtime, &package_dir, &dest_dir)?;

        events.push(InstallEvent::Installed {
            name: spec.name.clone(),
            version: meta.version,
        });
        Ok(())
    }
}
