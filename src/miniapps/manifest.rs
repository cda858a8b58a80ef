use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Package name prefix that marks an entry as framework-based
pub const FRAMEWORK_PREFIX: &str = "next";

/// The subset of package.json we care about: declared dependency names.
/// Version strings are kept only because that is the manifest's shape;
/// they are never interpreted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageManifest {
    #[serde(default)]
    pub dependencies: HashMap<String, String>,
    #[serde(default, rename = "devDependencies")]
    pub dev_dependencies: HashMap<String, String>,
}

impl PackageManifest {
    /// True if any declared dependency name equals or is prefixed by the
    /// framework identifier. This is a deliberate heuristic, not a contract.
    pub fn declares_framework(&self) -> bool {
        self.dependencies
            .keys()
            .chain(self.dev_dependencies.keys())
            .any(|name| name.starts_with(FRAMEWORK_PREFIX))
    }
}

/// Read and parse `package.json` from an entry directory.
///
/// Fail-closed: a missing, unreadable or malformed manifest yields `None`,
/// which callers treat as "not a framework app". Detection must never abort
/// a scan.
pub fn read_manifest(entry_dir: &Path) -> Option<PackageManifest> {
    let manifest_path = entry_dir.join("package.json");
    let content = std::fs::read_to_string(&manifest_path).ok()?;

    match serde_json::from_str::<PackageManifest>(&content) {
        Ok(manifest) => Some(manifest),
        Err(e) => {
            log::debug!("Ignoring malformed manifest {:?}: {}", manifest_path, e);
            None
        }
    }
}
