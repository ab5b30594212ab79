use cfr_jump_core::project::find_project_root;
use cfr_jump_core::{
    CfrJumpError, ClassFileMatch, ClassFileResolver, ProjectHandle, SourceDescriptor,
};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Picks the project for `source`: the explicit root, else the Gradle/Maven
/// project above it, else the current directory.
pub(crate) fn project_for(source: &Path, explicit: Option<PathBuf>) -> ProjectHandle {
    let root = explicit
        .or_else(|| find_project_root(source))
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."));
    ProjectHandle::from_root(root)
}

/// Resolves `source`, falling back to `symbol` when the file itself has no
/// class file.
pub(crate) fn resolve_target(
    resolver: &mut ClassFileResolver,
    project: &ProjectHandle,
    source: &Path,
    symbol: Option<&str>,
) -> Option<ClassFileMatch> {
    let from_source = SourceDescriptor::from_path(source, project.clone())
        .and_then(|descriptor| resolver.resolve(&descriptor));
    if from_source.is_some() {
        return from_source;
    }

    let symbol = symbol?;
    debug!("Falling back to symbol lookup for {:?}", symbol);
    resolver.resolve_symbol(project, symbol)
}

pub fn run(
    source: &Path,
    project: Option<PathBuf>,
    symbol: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let project = project_for(source, project);
    info!(
        "Locating class file for {} in project {}",
        source.display(),
        project.root().display()
    );

    let mut resolver = ClassFileResolver::new();
    let found = resolve_target(&mut resolver, &project, source, symbol)
        .ok_or(CfrJumpError::NoClassFile)?;

    println!("{}", found.path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn test_project_for_prefers_explicit_root() {
        let temp = tempfile::tempdir().unwrap();
        let project = project_for(Path::new("Foo.java"), Some(temp.path().to_path_buf()));
        assert_eq!(project.root(), temp.path());
    }

    #[test]
    fn test_project_for_finds_marker() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path().join("demo");
        touch(&root.join("settings.gradle"));
        let source = root.join("src/main/java/Foo.java");
        touch(&source);

        let project = project_for(&source, None);
        assert_eq!(project.root(), root.canonicalize().unwrap());
        assert_eq!(project.name(), "demo");
    }

    #[test]
    fn test_module_source_resolves_from_top_level_out_dir() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path().join("demo");
        touch(&root.join("settings.gradle"));
        touch(&root.join("app/build.gradle"));
        touch(&root.join("out/production/app/com/example/Foo.class"));
        let source = root.join("app/src/main/java/com/example/Foo.java");
        touch(&source);

        let project = project_for(&source, None);
        let root = root.canonicalize().unwrap();
        assert_eq!(project.root(), root);

        let mut resolver = ClassFileResolver::new();
        let found = resolve_target(&mut resolver, &project, &source, None).unwrap();
        assert_eq!(found.path, root.join("out/production/app/com/example/Foo.class"));
    }

    #[test]
    fn test_resolve_target_symbol_fallback() {
        let temp = tempfile::tempdir().unwrap();
        let class = temp.path().join("build/classes/Helper.class");
        touch(&class);
        let project = ProjectHandle::from_root(temp.path());
        let mut resolver = ClassFileResolver::new();

        let source = temp.path().join("src/Main.java");
        assert!(resolve_target(&mut resolver, &project, &source, None).is_none());

        let found = resolve_target(&mut resolver, &project, &source, Some("Helper")).unwrap();
        assert_eq!(found.path, class);
    }

    #[test]
    fn test_resolve_target_prefers_source() {
        let temp = tempfile::tempdir().unwrap();
        let main = temp.path().join("build/classes/Main.class");
        touch(&main);
        touch(&temp.path().join("build/classes/Helper.class"));
        let project = ProjectHandle::from_root(temp.path());
        let mut resolver = ClassFileResolver::new();

        let source = temp.path().join("src/Main.java");
        let found = resolve_target(&mut resolver, &project, &source, Some("Helper")).unwrap();
        assert_eq!(found.path, main);
    }
}
