use anyhow::Result;
use log::debug;
use std::path::PathBuf;

use crate::package::PackageStore;
use crate::runtime::Runtime;

/// List all package records in the repository.
#[tracing::instrument(skip(runtime))]
pub fn list<R: Runtime>(runtime: &R, repo_root: PathBuf) -> Result<()> {
    debug!("Listing packages from {:?}", repo_root);

    let store = PackageStore::new(runtime, repo_root);
    let records = store.list()?;
    if records.is_empty() {
        println!("No packages available.");
        return Ok(());
    }

    debug!("Found {} package(s)", records.len());

    for meta in records {
        println!(
            "{} v{} Dependencies: {:?}",
            meta.name, meta.version, meta.dependencies
        );
    }

    Ok(())
}
