//! Class-file resolution.
//!
//! Maps a source file onto the compiled `.class` file inside the project's
//! build output. Candidate roots are the project's `build` and `out`
//! directories, discovered once per project and cached until the project
//! changes or a cached path turns out to be stale.

use crate::cache::CandidateRootCache;
use crate::naming::{ExpectedClass, NamingTable, SourceKind};
use crate::project::{ProjectHandle, SourceDescriptor};
use crate::walk::{FileSystem, WalkDirFileSystem};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Directory names treated as build output roots, in search priority.
    pub root_names: Vec<String>,
    /// Directory names never descended into while collecting roots.
    pub excluded_dirs: Vec<String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            root_names: vec!["build".to_string(), "out".to_string()],
            excluded_dirs: vec![
                ".git".to_string(),
                ".gradle".to_string(),
                ".idea".to_string(),
                "node_modules".to_string(),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassFileMatch {
    /// The compiled artifact.
    pub path: PathBuf,
    /// The candidate root it was found under.
    pub root: PathBuf,
    pub kind: SourceKind,
}

impl ClassFileMatch {
    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
    }
}

/// Detailed result of a resolution attempt. Only [`ResolveOutcome::Found`]
/// carries a result; every other variant is an ordinary "no match".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveOutcome {
    Found(ClassFileMatch),
    /// The name carries no recognized source suffix. Nothing was scanned.
    NotSourceFile,
    /// The project has no `build`/`out` directories.
    NoCandidateRoots,
    /// All candidate roots were searched without a matching name.
    NoMatchFound,
    /// A match was found but vanished before it could be confirmed. The
    /// candidate root cache has been dropped.
    StaleMatch,
}

impl ResolveOutcome {
    pub fn into_match(self) -> Option<ClassFileMatch> {
        match self {
            ResolveOutcome::Found(found) => Some(found),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, ResolveOutcome::Found(_))
    }
}

pub struct ClassFileResolver<F: FileSystem = WalkDirFileSystem> {
    fs: F,
    naming: NamingTable,
    config: ResolverConfig,
    cache: CandidateRootCache,
}

impl ClassFileResolver<WalkDirFileSystem> {
    pub fn new() -> Self {
        Self::with_file_system(WalkDirFileSystem)
    }
}

impl Default for ClassFileResolver<WalkDirFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FileSystem> ClassFileResolver<F> {
    pub fn with_file_system(fs: F) -> Self {
        Self {
            fs,
            naming: NamingTable::default(),
            config: ResolverConfig::default(),
            cache: CandidateRootCache::new(),
        }
    }

    pub fn with_naming(mut self, naming: NamingTable) -> Self {
        self.naming = naming;
        self
    }

    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self.cache.invalidate();
        self
    }

    pub fn file_system(&self) -> &F {
        &self.fs
    }

    pub fn cache(&self) -> &CandidateRootCache {
        &self.cache
    }

    /// Drops the cached candidate roots so the next call rescans.
    pub fn invalidate(&mut self) {
        self.cache.invalidate();
    }

    /// Finds the class file compiled from `source`, if any.
    pub fn resolve(&mut self, source: &SourceDescriptor) -> Option<ClassFileMatch> {
        self.resolve_outcome(source).into_match()
    }

    pub fn resolve_outcome(&mut self, source: &SourceDescriptor) -> ResolveOutcome {
        let Some(expected) = self.naming.expected_for_source(&source.file_name) else {
            debug!("{} is not a source file", source.file_name);
            return ResolveOutcome::NotSourceFile;
        };
        self.lookup(&source.project, &expected)
    }

    /// Finds the class file for a bare class name, e.g. text selected in an
    /// editor. Both `Name.class` and `NameKt.class` are accepted.
    pub fn resolve_symbol(&mut self, project: &ProjectHandle, symbol: &str) -> Option<ClassFileMatch> {
        self.resolve_symbol_outcome(project, symbol).into_match()
    }

    pub fn resolve_symbol_outcome(&mut self, project: &ProjectHandle, symbol: &str) -> ResolveOutcome {
        let Some(expected) = self.naming.expected_for_symbol(symbol) else {
            debug!("{:?} is not a class name", symbol);
            return ResolveOutcome::NotSourceFile;
        };
        self.lookup(project, &expected)
    }

    fn lookup(&mut self, project: &ProjectHandle, expected: &ExpectedClass) -> ResolveOutcome {
        let fs = &self.fs;
        let config = &self.config;
        let roots = self
            .cache
            .get_or_scan(project, |root| collect_candidate_roots(fs, root, config));

        if roots.is_empty() {
            debug!("Project {} has no build output directories", project.name());
            return ResolveOutcome::NoCandidateRoots;
        }

        let found = roots.iter().find_map(|root| {
            fs.find_file(root, &|name: &str| expected.matches(name))
                .map(|path| (root.clone(), path))
        });

        let Some((root, path)) = found else {
            debug!(
                "No class file named {} under {} root(s)",
                expected.primary_name(),
                roots.len()
            );
            return ResolveOutcome::NoMatchFound;
        };

        if !self.fs.exists(&path) {
            warn!(
                "Class file {} disappeared, dropping cached roots for {}",
                path.display(),
                project.name()
            );
            self.cache.invalidate();
            return ResolveOutcome::StaleMatch;
        }

        debug!("Resolved {} to {}", expected.primary_name(), path.display());
        ResolveOutcome::Found(ClassFileMatch {
            path,
            root,
            kind: expected.kind,
        })
    }
}

/// Collects the candidate roots of a project and orders them by the
/// position of their name in `config.root_names`, then by path.
fn collect_candidate_roots<F: FileSystem>(
    fs: &F,
    project_root: &Path,
    config: &ResolverConfig,
) -> Vec<PathBuf> {
    let mut roots = fs.find_dirs(project_root, &config.root_names, &config.excluded_dirs);
    roots.sort_by_cached_key(|root| {
        let rank = root
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(|name| config.root_names.iter().position(|r| r == name))
            .unwrap_or(usize::MAX);
        (rank, root.clone())
    });
    roots
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_build_roots_precede_out_roots() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("a/out")).unwrap();
        fs::create_dir_all(root.join("b/build")).unwrap();
        fs::create_dir_all(root.join("c/build")).unwrap();

        let roots = collect_candidate_roots(&WalkDirFileSystem, root, &ResolverConfig::default());
        assert_eq!(
            roots,
            vec![root.join("b/build"), root.join("c/build"), root.join("a/out")]
        );
    }

    #[test]
    fn test_custom_root_names() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("target/classes")).unwrap();
        fs::write(root.join("target/classes/Foo.class"), b"").unwrap();

        let config = ResolverConfig {
            root_names: vec!["target".to_string()],
            ..ResolverConfig::default()
        };
        let mut resolver = ClassFileResolver::new().with_config(config);
        let source = SourceDescriptor::new("Foo.java", ProjectHandle::from_root(root));
        let found = resolver.resolve(&source).unwrap();
        assert_eq!(found.root, root.join("target"));
        assert_eq!(found.file_name(), "Foo.class");
    }

    #[test]
    fn test_outcome_into_match() {
        assert!(ResolveOutcome::NoMatchFound.into_match().is_none());
        assert!(!ResolveOutcome::StaleMatch.is_found());
    }
}
