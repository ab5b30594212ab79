//! Persisted user settings.
//!
//! Stored as JSON in `<config_dir>/cfr-jump/settings.json`. A missing file
//! means defaults; a malformed file is an error.

use crate::error::{CfrJumpError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Path to the CFR decompiler jar.
    pub decompiler_path: Option<PathBuf>,
    /// Explicit `java` executable, bypassing discovery.
    pub java_path: Option<PathBuf>,
}

impl Settings {
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cfr-jump")
            .join("settings.json")
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(&content).map_err(|e| {
            CfrJumpError::InvalidSettings(format!("{}: {}", path.display(), e))
        })
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// The configured decompiler jar, or an error when none is set.
    pub fn decompiler(&self) -> Result<&Path> {
        self.decompiler_path
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or(CfrJumpError::DecompilerNotConfigured)
    }
}

/// A decompiler path is usable when it is non-empty and names a `.jar`.
pub fn validate_decompiler_path(path: &Path) -> bool {
    let text = path.to_string_lossy();
    !text.is_empty() && text.to_lowercase().ends_with(".jar")
}
