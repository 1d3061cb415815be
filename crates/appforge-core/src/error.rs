//! Error taxonomy for scaffolding runs
//!
//! Feature units fail with `ScaffoldError`; the composer contains those
//! failures at the unit boundary. Orchestration-level code (base generation,
//! the TUI flow) wraps them in `anyhow` where a failure aborts the run.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the config store, feature units, and command execution
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// An existing config file could not be parsed as the expected shape
    #[error("config file {path} exists but is not valid JSON: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// An in-memory value could not be serialized for writing
    #[error("failed to serialize config for {path}: {source}")]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A config file the unit depends on has not been created yet
    #[error("required config file {0} is missing (has the base project been generated?)")]
    MissingBaseConfig(PathBuf),

    /// A path where a directory is needed exists and is not a directory
    #[error("cannot create directory {0}: path exists and is not a directory")]
    DirectoryCollision(PathBuf),

    /// An external command reported a non-zero exit status
    #[error("`{command}` exited with status {status}")]
    CommandFailed { command: String, status: i32 },

    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScaffoldError {
    /// Attach a path to a bare io error
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
