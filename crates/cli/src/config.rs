use cfr_jump_core::java::JavaLocator;
use cfr_jump_core::settings::{Settings, validate_decompiler_path};
use clap::Subcommand;
use std::path::{Path, PathBuf};
use tabled::{Table, Tabled};

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the current settings and the java executable that would be used
    Show,
    /// Set the CFR decompiler jar
    SetDecompiler {
        /// Path to cfr-<version>.jar
        #[arg(value_name = "JAR")]
        path: PathBuf,
    },
    /// Set an explicit java executable instead of discovering one
    SetJava {
        #[arg(value_name = "JAVA")]
        path: PathBuf,
    },
    /// Reset all settings
    Clear,
}

#[derive(Tabled)]
struct SettingRow {
    #[tabled(rename = "Setting")]
    key: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

fn display(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not set)".to_string())
}

pub fn run(settings_path: &Path, cmd: ConfigCommands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        ConfigCommands::Show => {
            let settings = Settings::load(settings_path)?;
            let java = JavaLocator::from_env(settings.java_path.clone()).locate();

            let rows = vec![
                SettingRow {
                    key: "settings file",
                    value: settings_path.display().to_string(),
                },
                SettingRow {
                    key: "decompiler",
                    value: display(settings.decompiler_path.as_deref()),
                },
                SettingRow {
                    key: "java (configured)",
                    value: display(settings.java_path.as_deref()),
                },
                SettingRow {
                    key: "java (effective)",
                    value: display(java.as_deref()),
                },
            ];
            println!("{}", Table::new(rows));
        }
        ConfigCommands::SetDecompiler { path } => {
            if !validate_decompiler_path(&path) {
                eprintln!(
                    "Warning: {} does not look like a decompiler jar",
                    path.display()
                );
            }
            let mut settings = Settings::load(settings_path)?;
            settings.decompiler_path = Some(path);
            settings.save(settings_path)?;
            println!("Decompiler set.");
        }
        ConfigCommands::SetJava { path } => {
            if !path.is_file() {
                eprintln!("Warning: {} does not exist", path.display());
            }
            let mut settings = Settings::load(settings_path)?;
            settings.java_path = Some(path);
            settings.save(settings_path)?;
            println!("Java executable set.");
        }
        ConfigCommands::Clear => {
            Settings::default().save(settings_path)?;
            println!("Settings cleared.");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_clear() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("settings.json");

        run(
            &path,
            ConfigCommands::SetDecompiler {
                path: PathBuf::from("/opt/cfr.jar"),
            },
        )
        .unwrap();
        run(
            &path,
            ConfigCommands::SetJava {
                path: PathBuf::from("/usr/bin/java"),
            },
        )
        .unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.decompiler_path, Some(PathBuf::from("/opt/cfr.jar")));
        assert_eq!(settings.java_path, Some(PathBuf::from("/usr/bin/java")));

        run(&path, ConfigCommands::Clear).unwrap();
        assert_eq!(Settings::load(&path).unwrap(), Settings::default());
    }

    #[test]
    fn test_invalid_jar_is_still_saved() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("settings.json");

        run(
            &path,
            ConfigCommands::SetDecompiler {
                path: PathBuf::from("/opt/cfr"),
            },
        )
        .unwrap();
        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.decompiler_path, Some(PathBuf::from("/opt/cfr")));
    }
}
