use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::runtime::Runtime;

/// File name of the metadata record inside a package directory.
///
/// The metadata file, once written, is the sole source of truth for a
/// package's declared version and dependencies. It is never copied into the
/// installation tree.
pub const META_FILE: &str = "metadata.json";

/// Package metadata stored alongside the package files in the repository.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Meta {
    pub name: String,
    pub version: String,
    pub dependencies: Vec<String>,
}

impl Meta {
    pub fn new(name: &str, version: &str, dependencies: Vec<String>) -> Self {
        Meta {
            name: name.to_string(),
            version: version.to_string(),
            dependencies,
        }
    }

    /// Directory name a package of this name/version is stored (and
    /// installed) under: `<name>-<version>`.
    ///
    /// Names or versions that themselves contain `-` make the joined name
    /// ambiguous for lookups; nothing here prevents that.
    pub fn dir_name(name: &str, version: &str) -> String {
        format!("{name}-{version}")
    }

    /// Dependency specifiers parsed into [`DepSpec`] values.
    pub fn dep_specs(&self) -> Vec<DepSpec> {
        self.dependencies.iter().map(|d| DepSpec::parse(d)).collect()
    }

    #[tracing::instrument(skip(runtime, path))]
    pub fn load<R: Runtime>(runtime: &R, path: &Path) -> Result<Self> {
        let content = runtime.read_to_string(path)?;
        let meta: Meta = serde_json::from_str(&content)?;
        Ok(meta)
    }

    pub fn save<R: Runtime>(&self, runtime: &R, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        runtime.write(path, content.as_bytes())
    }
}

/// A parsed dependency specifier: a bare package name, optionally pinned to
/// an exact version with `==` (e.g. `bar==2.0`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepSpec {
    pub name: String,
    pub version: Option<String>,
}

impl DepSpec {
    pub fn new(name: &str, version: Option<&str>) -> Self {
        DepSpec {
            name: name.to_string(),
            version: version.map(String::from),
        }
    }

    /// Parse a raw specifier string. Splits on `==`; anything after a second
    /// separator is ignored.
    pub fn parse(raw: &str) -> Self {
        let mut parts = raw.split("==");
        let name = parts.next().unwrap_or_default().to_string();
        let version = parts.next().map(String::from);
        DepSpec { name, version }
    }
}
