use crate::locate::{project_for, resolve_target};
use cfr_jump_core::decompile::{CfrProcess, decompile_to_file};
use cfr_jump_core::java::JavaLocator;
use cfr_jump_core::settings::Settings;
use cfr_jump_core::{CfrJumpError, ClassFileResolver};
use std::path::{Path, PathBuf};
use tracing::info;

pub fn run(
    settings_path: &Path,
    source: &Path,
    project: Option<PathBuf>,
    symbol: Option<&str>,
    print: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::load(settings_path)?;
    let jar = settings.decompiler()?;
    let java = JavaLocator::from_env(settings.java_path.clone())
        .locate()
        .ok_or(CfrJumpError::JavaNotFound)?;

    let project = project_for(source, project);
    let mut resolver = ClassFileResolver::new();
    let target = resolve_target(&mut resolver, &project, source, symbol)
        .ok_or(CfrJumpError::NoClassFile)?;

    info!(
        "Decompiling {} with {}",
        target.path.display(),
        jar.display()
    );
    let cfr = CfrProcess::new(java, jar);
    let output = decompile_to_file(&cfr, &project, &target.path)?;

    if print {
        print!("{}", output.text);
    } else {
        println!("{}", output.output_file.display());
    }
    Ok(())
}
