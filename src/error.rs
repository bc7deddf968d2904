use std::path::{Path, PathBuf};

use thiserror::Error;

/// Unified error type for version-stamp operations
#[derive(Error, Debug)]
pub enum StampError {
    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Verification failed: {0}")]
    Verify(String),
}

/// Convenience type alias for Results in version-stamp
pub type Result<T> = std::result::Result<T, StampError>;

impl StampError {
    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        StampError::Version(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        StampError::Config(msg.into())
    }

    /// Create a verification error with context
    pub fn verify(msg: impl Into<String>) -> Self {
        StampError::Verify(msg.into())
    }

    /// Attach the offending path to an I/O error
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        StampError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
