use std::path::{Path, PathBuf};

/// Files marking the top of a (possibly multi-module) Gradle build.
const SETTINGS_MARKERS: &[&str] = &["settings.gradle", "settings.gradle.kts"];

/// Files marking a single Gradle or Maven module.
const MODULE_MARKERS: &[&str] = &["build.gradle", "build.gradle.kts", "pom.xml"];

fn has_marker(dir: &Path, markers: &[&str]) -> bool {
    markers.iter().any(|marker| dir.join(marker).is_file())
}

/// Stable per-project key used to scope the candidate root cache.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectId(PathBuf);

impl ProjectId {
    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

#[derive(Debug, Clone)]
pub struct ProjectHandle {
    name: String,
    root: PathBuf,
}

impl ProjectHandle {
    pub fn new(name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            root: root.into(),
        }
    }

    /// Builds a handle named after the last component of `root`.
    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let name = root
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("project")
            .to_string();
        Self { name, root }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn id(&self) -> ProjectId {
        ProjectId(self.root.clone())
    }
}

/// A source file as seen by the resolver: its bare file name and the
/// project that owns it.
#[derive(Debug, Clone)]
pub struct SourceDescriptor {
    pub file_name: String,
    pub project: ProjectHandle,
}

impl SourceDescriptor {
    pub fn new(file_name: impl Into<String>, project: ProjectHandle) -> Self {
        Self {
            file_name: file_name.into(),
            project,
        }
    }

    /// Builds a descriptor from a source path, keeping only its file name.
    pub fn from_path(path: &Path, project: ProjectHandle) -> Option<Self> {
        let file_name = path.file_name()?.to_str()?;
        Some(Self::new(file_name, project))
    }
}

/// Walks up from `start` looking for the project that owns it.
///
/// The outermost ancestor holding `settings.gradle(.kts)` wins, so a module
/// of a multi-module build maps to the top-level project. Without one, the
/// nearest ancestor holding `build.gradle(.kts)` or `pom.xml` is used.
/// `start` may be a file or a directory.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    find_project_root_within(start, None)
}

/// Like [`find_project_root`], but never looks above `boundary`.
pub fn find_project_root_within(start: &Path, boundary: Option<&Path>) -> Option<PathBuf> {
    let start = start.canonicalize().unwrap_or_else(|_| start.to_path_buf());
    let boundary = boundary.map(|b| b.canonicalize().unwrap_or_else(|_| b.to_path_buf()));
    let first = if start.is_file() {
        start.parent()?
    } else {
        start.as_path()
    };

    let mut settings_root = None;
    let mut module_root = None;
    for dir in first.ancestors() {
        if has_marker(dir, SETTINGS_MARKERS) {
            settings_root = Some(dir);
        } else if module_root.is_none() && has_marker(dir, MODULE_MARKERS) {
            module_root = Some(dir);
        }
        if boundary.as_deref() == Some(dir) {
            break;
        }
    }

    settings_root.or(module_root).map(Path::to_path_buf)
}
