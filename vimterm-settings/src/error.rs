//! Typed error variants for the vimterm-settings crate.
//!
//! Resolving a [`Settings`](crate::Settings) snapshot never fails; these
//! errors only come from the file-backed preference store, the defaults
//! file loader and the preference watcher.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while reading, writing or watching preference files.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The file could not be read or written.
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        /// File the operation was performed on.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid YAML document of the expected shape.
    #[error("YAML parse error in '{}': {source}", .path.display())]
    Parse {
        /// File that failed to parse.
        path: PathBuf,
        /// Underlying YAML error.
        #[source]
        source: serde_yaml_ng::Error,
    },

    /// The preferences could not be serialized for saving.
    #[error("failed to serialize preferences: {0}")]
    Serialize(#[from] serde_yaml_ng::Error),

    /// The path cannot be watched or persisted (no file name, no parent, missing file).
    #[error("invalid preference path '{}': {reason}", .path.display())]
    InvalidPath {
        /// Offending path.
        path: PathBuf,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// The file-system watcher backend failed.
    #[error("preference watcher error: {0}")]
    Watch(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SettingsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SettingsError::Io {
            path: path.into(),
            source,
        }
    }

    #[cfg(feature = "watcher")]
    pub(crate) fn watch(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        SettingsError::Watch(Box::new(source))
    }

    pub(crate) fn parse(path: impl Into<PathBuf>, source: serde_yaml_ng::Error) -> Self {
        SettingsError::Parse {
            path: path.into(),
            source,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SettingsError>;
