//! Resolve JVM source files to their compiled class files and decompile them.

pub mod cache;
pub mod decompile;
pub mod error;
pub mod java;
pub mod logging;
pub mod naming;
pub mod project;
pub mod resolver;
pub mod settings;
pub mod walk;

pub use error::{CfrJumpError, Result};
pub use project::{ProjectHandle, SourceDescriptor};
pub use resolver::{ClassFileMatch, ClassFileResolver, ResolveOutcome};
