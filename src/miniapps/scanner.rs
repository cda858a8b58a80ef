use std::path::Path;

use crate::common::error::ScanError;
use crate::miniapps::{manifest, placeholder};

/// Scan the mini-apps base directory and return the servable entry names.
///
/// Discovery here is also provisioning: an entry with no `index.html` but a
/// manifest declaring the framework gets a placeholder entry file written as
/// part of the scan, so it is immediately servable. Callers relying on the
/// returned names may assume `<base>/<name>/index.html` exists.
///
/// A missing base directory is a valid prior state (no apps deployed yet)
/// and yields an empty catalog. Results are in directory listing order; no
/// cache is kept, every call re-walks the tree.
pub fn scan(base_dir: &Path) -> Result<Vec<String>, ScanError> {
    if !base_dir.exists() {
        return Ok(Vec::new());
    }

    let entries = std::fs::read_dir(base_dir)?;
    let mut apps = Vec::new();

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Skipping unreadable directory entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().map(|ft| ft.is_dir()).unwrap_or(false) {
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_string();
        let entry_dir = entry.path();

        if entry_dir.join("index.html").exists() {
            apps.push(name);
            continue;
        }

        // No static entry file; check whether this is a framework app that
        // deserves a generated placeholder.
        let is_framework_app = manifest::read_manifest(&entry_dir)
            .map(|m| m.declares_framework())
            .unwrap_or(false);
        if !is_framework_app {
            continue;
        }

        match placeholder::write(&entry_dir, &name) {
            Ok(()) => apps.push(name),
            Err(e) => {
                // Per-entry failure never aborts the whole scan
                log::warn!("Skipping {}: placeholder write failed: {}", name, e);
            }
        }
    }

    Ok(apps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn add_static_app(base: &Path, name: &str, html: &str) {
        let dir = base.join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("index.html"), html).unwrap();
    }

    fn add_framework_app(base: &Path, name: &str) {
        let dir = base.join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("package.json"),
            r#"{"name": "app", "dependencies": {"next": "14.0.0", "react": "^18"}}"#,
        )
        .unwrap();
    }

    #[test]
    fn test_scan_missing_base_dir() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nonexistent");

        let apps = scan(&missing).unwrap();
        assert!(apps.is_empty());
    }

    #[test]
    fn test_scan_reports_static_app_unmodified() {
        let temp = TempDir::new().unwrap();
        add_static_app(temp.path(), "calculator", "<h1>calc</h1>");

        let apps = scan(temp.path()).unwrap();
        assert_eq!(apps, vec!["calculator"]);

        let content = fs::read_to_string(temp.path().join("calculator/index.html")).unwrap();
        assert_eq!(content, "<h1>calc</h1>");
    }

    #[test]
    fn test_scan_provisions_framework_app() {
        let temp = TempDir::new().unwrap();
        add_framework_app(temp.path(), "todo-app");

        let apps = scan(temp.path()).unwrap();
        assert_eq!(apps, vec!["todo-app"]);
        assert!(temp.path().join("todo-app/index.html").exists());
    }

    #[test]
    fn test_scan_skips_non_framework_entry() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("library");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("package.json"),
            r#"{"dependencies": {"react": "^18"}}"#,
        )
        .unwrap();

        let apps = scan(temp.path()).unwrap();
        assert!(apps.is_empty());
        assert!(!dir.join("index.html").exists());
    }

    #[test]
    fn test_scan_ignores_plain_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("README.md"), "notes").unwrap();
        add_static_app(temp.path(), "calculator", "<h1>calc</h1>");

        let apps = scan(temp.path()).unwrap();
        assert_eq!(apps, vec!["calculator"]);
    }

    #[test]
    fn test_scan_is_idempotent() {
        let temp = TempDir::new().unwrap();
        add_static_app(temp.path(), "calculator", "<h1>calc</h1>");
        add_framework_app(temp.path(), "todo-app");

        let mut first = scan(temp.path()).unwrap();
        let placeholder_after_first =
            fs::read_to_string(temp.path().join("todo-app/index.html")).unwrap();

        let mut second = scan(temp.path()).unwrap();
        let placeholder_after_second =
            fs::read_to_string(temp.path().join("todo-app/index.html")).unwrap();

        first.sort();
        second.sort();
        assert_eq!(first, second);
        assert_eq!(placeholder_after_first, placeholder_after_second);
    }

    #[test]
    fn test_scan_end_to_end_mixed_catalog() {
        let temp = TempDir::new().unwrap();
        add_static_app(temp.path(), "calculator", "<h1>calc</h1>");
        add_framework_app(temp.path(), "todo-app");
        fs::create_dir_all(temp.path().join("scratch")).unwrap();

        let apps = scan(temp.path()).unwrap();

        assert_eq!(apps.len(), 2);
        assert!(apps.contains(&"calculator".to_string()));
        assert!(apps.contains(&"todo-app".to_string()));
        assert!(temp.path().join("todo-app/index.html").exists());
        // Empty directory is left untouched and unreported
        assert!(!apps.contains(&"scratch".to_string()));
        assert_eq!(fs::read_dir(temp.path().join("scratch")).unwrap().count(), 0);
    }
}
