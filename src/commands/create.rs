use anyhow::Result;
use log::debug;
use std::path::PathBuf;

use crate::package::PackageStore;
use crate::runtime::Runtime;

/// Create a package record in the repository.
///
/// `files` entries use the `name=content` form; entries without a `=` are
/// ignored.
#[tracing::instrument(skip(runtime, dependencies, files))]
pub fn create<R: Runtime>(
    runtime: &R,
    repo_root: PathBuf,
    name: &str,
    version: &str,
    dependencies: Vec<String>,
    files: &[String],
) -> Result<()> {
    let parsed_files: Vec<(String, String)> = files
        .iter()
        .filter_map(|entry| {
            entry
                .split_once('=')
                .map(|(path, content)| (path.to_string(), content.to_string()))
        })
        .collect();

    debug!(
        "Creating {name}-{version} with {} dependency(ies), {} file(s)",
        dependencies.len(),
        parsed_files.len()
    );

    let store = PackageStore::new(runtime, repo_root);
    store.create(name, version, dependencies, &parsed_files)?;

    println!("Package {name} v{version} created.");
    Ok(())
}
