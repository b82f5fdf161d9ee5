use thiserror::Error;

/// Unified error type for version-stamp operations
#[derive(Error, Debug)]
pub enum VersionStampError {
    #[error("Cannot access '{path}': {source}")]
    FileAccess {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed field: {0}")]
    MalformedField(String),

    #[error("Missing field: {0}")]
    MissingField(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in version-stamp
pub type Result<T> = std::result::Result<T, VersionStampError>;

impl VersionStampError {
    /// Create a file access error with the offending path attached
    pub fn file_access(path: impl Into<String>, source: std::io::Error) -> Self {
        VersionStampError::FileAccess {
            path: path.into(),
            source,
        }
    }

    /// Create a malformed field error with context
    pub fn malformed_field(msg: impl Into<String>) -> Self {
        VersionStampError::MalformedField(msg.into())
    }

    /// Create a missing field error with context
    pub fn missing_field(msg: impl Into<String>) -> Self {
        VersionStampError::MissingField(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        VersionStampError::Config(msg.into())
    }
}
