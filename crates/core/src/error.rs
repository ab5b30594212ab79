use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CfrJumpError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Couldn't find class file. Please build the project first.")]
    NoClassFile,
    #[error("The java exec path is incorrect.")]
    JavaNotFound,
    #[error("No decompiler jar configured. Run `cfr-jump config set-decompiler <JAR>` first.")]
    DecompilerNotConfigured,
    #[error("Decompiler exited with {status}: {stderr}")]
    DecompilerFailed { status: ExitStatus, stderr: String },
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}

pub type Result<T> = std::result::Result<T, CfrJumpError>;
