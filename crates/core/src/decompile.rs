//! Decompiler invocation and output placement.
//!
//! Decompiled text for `Foo.class` lands in
//! `<project-root>/build/decompile/Foo.java`.

use crate::error::{CfrJumpError, Result};
use crate::naming::decompiled_file_name;
use crate::project::ProjectHandle;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info, warn};

pub trait Decompiler {
    /// Decompiles `class_file` and returns the produced source text.
    fn decompile(&self, class_file: &Path, working_dir: &Path) -> Result<String>;
}

/// Runs CFR as `java -jar <cfr.jar> <class-file>` and reads its stdout.
#[derive(Debug, Clone)]
pub struct CfrProcess {
    java: PathBuf,
    jar: PathBuf,
}

impl CfrProcess {
    pub fn new(java: impl Into<PathBuf>, jar: impl Into<PathBuf>) -> Self {
        Self {
            java: java.into(),
            jar: jar.into(),
        }
    }

    pub fn command(&self, class_file: &Path, working_dir: &Path) -> Command {
        let mut cmd = Command::new(&self.java);
        cmd.arg("-jar")
            .arg(&self.jar)
            .arg(class_file)
            .current_dir(working_dir);
        cmd
    }
}

impl Decompiler for CfrProcess {
    fn decompile(&self, class_file: &Path, working_dir: &Path) -> Result<String> {
        debug!(
            "Running {} -jar {} {}",
            self.java.display(),
            self.jar.display(),
            class_file.display()
        );
        let output = self.command(class_file, working_dir).output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!("Decompiler failed with {}: {}", output.status, stderr);
            return Err(CfrJumpError::DecompilerFailed {
                status: output.status,
                stderr,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[derive(Debug, Clone)]
pub struct DecompileOutput {
    pub class_file: PathBuf,
    pub output_file: PathBuf,
    pub text: String,
}

pub fn decompile_output_dir(project_root: &Path) -> PathBuf {
    project_root.join("build").join("decompile")
}

/// Output file for `class_file`: its name with `.class` swapped for `.java`.
pub fn decompile_output_path(project_root: &Path, class_file: &Path) -> PathBuf {
    let name = class_file
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    decompile_output_dir(project_root).join(decompiled_file_name(&name))
}

/// Makes sure `dir` is a directory, removing a regular file that occupies
/// its path first.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    if dir.is_file() {
        warn!("Replacing file {} with output directory", dir.display());
        fs::remove_file(dir)?;
    }
    fs::create_dir_all(dir)?;
    Ok(())
}

/// Decompiles `class_file` and writes the text into the project's
/// decompile directory.
pub fn decompile_to_file(
    decompiler: &dyn Decompiler,
    project: &ProjectHandle,
    class_file: &Path,
) -> Result<DecompileOutput> {
    let output_dir = decompile_output_dir(project.root());
    ensure_output_dir(&output_dir)?;

    let text = decompiler.decompile(class_file, project.root())?;
    let output_file = decompile_output_path(project.root(), class_file);
    fs::write(&output_file, &text)?;
    info!(
        "Decompiled {} into {}",
        class_file.display(),
        output_file.display()
    );

    Ok(DecompileOutput {
        class_file: class_file.to_path_buf(),
        output_file,
        text,
    })
}
