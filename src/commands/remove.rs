use anyhow::Result;
use log::debug;
use std::path::PathBuf;

use crate::remove::remove_installed;
use crate::runtime::Runtime;

/// Remove every installed directory matching `name` (all versions at once).
#[tracing::instrument(skip(runtime))]
pub fn remove<R: Runtime>(runtime: &R, install_root: PathBuf, name: &str) -> Result<()> {
    debug!("Removing {name} from {:?}", install_root);

    let removed = remove_installed(runtime, &install_root, name)?;
    if removed.is_empty() {
        println!("No installed package named {name} found.");
        return Ok(());
    }

    for dir_name in removed {
        println!("Removed {dir_name}");
    }

    Ok(())
}
