//! Candidate root cache.
//!
//! Holds the `build`/`out` directories of exactly one project, the most
//! recently resolved one. Asking for a different project drops the old list
//! before the new project is scanned.

use crate::project::{ProjectHandle, ProjectId};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Default)]
pub struct CandidateRootCache {
    project: Option<ProjectId>,
    roots: Option<Vec<PathBuf>>,
}

impl CandidateRootCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached roots for `project`, running `scan` on its root
    /// directory when nothing is cached for it yet.
    ///
    /// An empty scan result is cached like any other: a project without
    /// build output is not rescanned until [`invalidate`](Self::invalidate)
    /// is called.
    pub fn get_or_scan<S>(&mut self, project: &ProjectHandle, scan: S) -> &[PathBuf]
    where
        S: FnOnce(&Path) -> Vec<PathBuf>,
    {
        let id = project.id();
        if self.project.as_ref() != Some(&id) {
            if self.project.is_some() {
                debug!("Switching candidate root cache to project {}", project.name());
            }
            self.invalidate();
            self.project = Some(id);
        }

        self.roots.get_or_insert_with(|| {
            let roots = scan(project.root());
            info!(
                "Found {} candidate root(s) in project {}",
                roots.len(),
                project.name()
            );
            roots
        })
    }

    /// Drops the cached roots. The project binding is kept so the next call
    /// for the same project rescans it.
    pub fn invalidate(&mut self) {
        self.roots = None;
    }

    pub fn project(&self) -> Option<&ProjectId> {
        self.project.as_ref()
    }

    pub fn roots(&self) -> Option<&[PathBuf]> {
        self.roots.as_deref()
    }

    pub fn is_populated(&self) -> bool {
        self.roots.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_scans_once_per_project() {
        let mut cache = CandidateRootCache::new();
        let project = ProjectHandle::new("demo", "/work/demo");
        let scans = Cell::new(0);
        let scan = |root: &Path| {
            scans.set(scans.get() + 1);
            vec![root.join("build")]
        };

        let first = cache.get_or_scan(&project, scan).to_vec();
        let second = cache.get_or_scan(&project, scan).to_vec();

        assert_eq!(scans.get(), 1);
        assert_eq!(first, second);
        assert_eq!(first, vec![PathBuf::from("/work/demo/build")]);
    }

    #[test]
    fn test_empty_result_is_cached() {
        let mut cache = CandidateRootCache::new();
        let project = ProjectHandle::new("demo", "/work/demo");
        let scans = Cell::new(0);
        let scan = |_: &Path| {
            scans.set(scans.get() + 1);
            Vec::new()
        };

        assert!(cache.get_or_scan(&project, scan).is_empty());
        assert!(cache.get_or_scan(&project, scan).is_empty());
        assert_eq!(scans.get(), 1);
        assert!(cache.is_populated());
    }

    #[test]
    fn test_project_switch_rescans() {
        let mut cache = CandidateRootCache::new();
        let a = ProjectHandle::new("a", "/work/a");
        let b = ProjectHandle::new("b", "/work/b");
        let scans = Cell::new(0);
        let scan = |root: &Path| {
            scans.set(scans.get() + 1);
            vec![root.join("out")]
        };

        cache.get_or_scan(&a, scan);
        let roots = cache.get_or_scan(&b, scan).to_vec();
        assert_eq!(roots, vec![PathBuf::from("/work/b/out")]);
        assert_eq!(cache.project(), Some(&b.id()));

        cache.get_or_scan(&a, scan);
        assert_eq!(scans.get(), 3);
    }

    #[test]
    fn test_invalidate_forces_rescan() {
        let mut cache = CandidateRootCache::new();
        let project = ProjectHandle::new("demo", "/work/demo");
        let scans = Cell::new(0);
        let scan = |_: &Path| {
            scans.set(scans.get() + 1);
            Vec::new()
        };

        cache.get_or_scan(&project, scan);
        cache.invalidate();
        assert!(!cache.is_populated());
        assert_eq!(cache.project(), Some(&project.id()));

        cache.get_or_scan(&project, scan);
        assert_eq!(scans.get(), 2);
    }
}
