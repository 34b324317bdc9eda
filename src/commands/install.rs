use anyhow::Result;
use log::debug;
use std::path::PathBuf;

use crate::install::{InstallEvent, Installer};
use crate::package::DepSpec;
use crate::runtime::Runtime;

/// Install a package and its transitive dependencies, reporting each step.
#[tracing::instrument(skip(runtime))]
pub fn install<R: Runtime>(
    runtime: &R,
    repo_root: PathBuf,
    install_root: PathBuf,
    name: &str,
    version: Option<&str>,
) -> Result<()> {
    debug!("Installing {name} from {:?} into {:?}", repo_root, install_root);

    let installer = Installer::new(runtime, repo_root, install_root);
    let events = installer.install(&DepSpec::new(name, version))?;

    for event in events {
        match event {
            InstallEvent::Installed { name, version } => {
                println!("Installed {name} v{version}");
            }
            InstallEvent::AlreadyInstalled { name } => {
                println!("{name} already installed.");
            }
            InstallEvent::NotFound { name } => {
                println!("Package {name} not found.");
            }
        }
    }

    Ok(())
}
