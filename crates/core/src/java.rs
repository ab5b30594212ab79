//! Locates the `java` executable used to run the decompiler jar.
//!
//! Lookup order:
//! 1. An explicit path from the settings file
//! 2. `JAVA_HOME/bin/java`
//! 3. macOS `java_home` tool
//! 4. The first `java` on `PATH`

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[cfg(windows)]
const JAVA_EXECUTABLE: &str = "java.exe";
#[cfg(not(windows))]
const JAVA_EXECUTABLE: &str = "java";

#[derive(Debug, Clone, Default)]
pub struct JavaLocator {
    override_path: Option<PathBuf>,
    java_home: Option<PathBuf>,
    search_path: Option<OsString>,
    use_platform_tool: bool,
}

impl JavaLocator {
    /// Locator reading `JAVA_HOME` and `PATH` from the environment.
    pub fn from_env(override_path: Option<PathBuf>) -> Self {
        Self {
            override_path,
            java_home: std::env::var_os("JAVA_HOME").map(PathBuf::from),
            search_path: std::env::var_os("PATH"),
            use_platform_tool: true,
        }
    }

    /// Locator with explicit inputs and no platform tool lookup (for testing).
    pub fn with_inputs(
        override_path: Option<PathBuf>,
        java_home: Option<PathBuf>,
        search_path: Option<OsString>,
    ) -> Self {
        Self {
            override_path,
            java_home,
            search_path,
            use_platform_tool: false,
        }
    }

    pub fn locate(&self) -> Option<PathBuf> {
        if let Some(path) = &self.override_path {
            if path.is_file() {
                return Some(path.clone());
            }
            warn!("Configured java path {} does not exist", path.display());
        }

        if let Some(java) = self.java_home.as_deref().and_then(java_in_home) {
            debug!("Using java from JAVA_HOME: {}", java.display());
            return Some(java);
        }

        if self.use_platform_tool {
            if let Some(java) = platform_java_home().as_deref().and_then(java_in_home) {
                debug!("Using java from platform tool: {}", java.display());
                return Some(java);
            }
        }

        let search_path = self.search_path.as_ref()?;
        std::env::split_paths(search_path)
            .map(|dir| dir.join(JAVA_EXECUTABLE))
            .find(|candidate| candidate.is_file())
    }
}

fn java_in_home(home: &Path) -> Option<PathBuf> {
    let java = home.join("bin").join(JAVA_EXECUTABLE);
    java.is_file().then_some(java)
}

#[cfg(target_os = "macos")]
fn platform_java_home() -> Option<PathBuf> {
    let output = std::process::Command::new("/usr/libexec/java_home")
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let path_str = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!path_str.is_empty()).then(|| PathBuf::from(path_str))
}

#[cfg(not(target_os = "macos"))]
fn platform_java_home() -> Option<PathBuf> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn fake_jdk(root: &Path) -> PathBuf {
        let bin = root.join("bin");
        fs::create_dir_all(&bin).unwrap();
        let java = bin.join(JAVA_EXECUTABLE);
        fs::write(&java, b"").unwrap();
        java
    }

    #[test]
    fn test_override_wins() {
        let temp = tempfile::tempdir().unwrap();
        let home_java = fake_jdk(&temp.path().join("jdk"));
        let custom = temp.path().join("custom-java");
        fs::write(&custom, b"").unwrap();

        let locator = JavaLocator::with_inputs(
            Some(custom.clone()),
            Some(temp.path().join("jdk")),
            None,
        );
        assert_eq!(locator.locate(), Some(custom));
        assert_ne!(locator.locate(), Some(home_java));
    }

    #[test]
    fn test_missing_override_falls_back_to_java_home() {
        let temp = tempfile::tempdir().unwrap();
        let home_java = fake_jdk(&temp.path().join("jdk"));

        let locator = JavaLocator::with_inputs(
            Some(temp.path().join("missing")),
            Some(temp.path().join("jdk")),
            None,
        );
        assert_eq!(locator.locate(), Some(home_java));
    }

    #[test]
    fn test_search_path() {
        let temp = tempfile::tempdir().unwrap();
        let empty = temp.path().join("empty");
        fs::create_dir_all(&empty).unwrap();
        let java = fake_jdk(&temp.path().join("jdk"));
        let search = std::env::join_paths([empty, temp.path().join("jdk/bin")]).unwrap();

        let locator = JavaLocator::with_inputs(None, None, Some(search));
        assert_eq!(locator.locate(), Some(java));
    }

    #[test]
    fn test_nothing_found() {
        let temp = tempfile::tempdir().unwrap();
        let locator = JavaLocator::with_inputs(
            None,
            Some(temp.path().join("no-jdk")),
            Some(OsString::from("")),
        );
        assert!(locator.locate().is_none());
    }
}
