//! File system access used by the resolver.
//!
//! The resolver only needs three things from the disk: a directory search,
//! a first-match file search and an existence check. Keeping them behind a
//! trait lets tests observe how often the tree is walked.

use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

pub trait FileSystem {
    /// Collects directories below `root` whose name is one of `names`.
    ///
    /// `root` itself is never collected. The walk does not descend into
    /// collected directories nor into directories named in `excluded`.
    fn find_dirs(&self, root: &Path, names: &[String], excluded: &[String]) -> Vec<PathBuf>;

    /// Depth-first search below `root` for the first regular file whose name
    /// satisfies `accept`.
    fn find_file(&self, root: &Path, accept: &dyn Fn(&str) -> bool) -> Option<PathBuf>;

    /// Whether `path` still exists as a regular file.
    fn exists(&self, path: &Path) -> bool;
}

/// `walkdir`-backed file system. Siblings are visited in file name order so
/// results never depend on the platform's directory listing order. Symbolic
/// links are followed; link loops surface as walk errors and are skipped.
#[derive(Debug, Default, Clone, Copy)]
pub struct WalkDirFileSystem;

impl FileSystem for WalkDirFileSystem {
    fn find_dirs(&self, root: &Path, names: &[String], excluded: &[String]) -> Vec<PathBuf> {
        let mut found = Vec::new();
        let mut walker = WalkDir::new(root)
            .min_depth(1)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter();

        while let Some(entry) = walker.next() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    debug!("Skipping unreadable entry under {}: {}", root.display(), e);
                    continue;
                }
            };
            if !entry.file_type().is_dir() {
                continue;
            }

            let file_name = entry.file_name().to_string_lossy();
            let name: &str = &file_name;
            if excluded.iter().any(|x| x == name) {
                walker.skip_current_dir();
            } else if names.iter().any(|n| n == name) {
                found.push(entry.path().to_path_buf());
                walker.skip_current_dir();
            }
        }

        found
    }

    fn find_file(&self, root: &Path, accept: &dyn Fn(&str) -> bool) -> Option<PathBuf> {
        WalkDir::new(root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    debug!("Skipping unreadable entry under {}: {}", root.display(), e);
                    None
                }
            })
            .find(|e| {
                e.file_type().is_file() && e.file_name().to_str().is_some_and(|name| accept(name))
            })
            .map(|e| e.into_path())
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}
