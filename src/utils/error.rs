//! Error handling for the outer layers of inflection extraction
//!
//! The extraction pipeline itself never fails: malformed markup degrades to
//! smaller output and a [`Diagnostic`](super::diagnostics::Diagnostic).
//! The error type here covers what surrounds it: reading input, loading
//! configuration and serialising results.

use std::fmt;

/// Extraction error type
#[derive(Debug, Clone)]
pub enum ExtractError {
    /// Invalid input or argument
    InvalidInput { message: String },
    /// Configuration could not be loaded or parsed
    Config {
        message: String,
        path: Option<String>,
    },
    /// Result could not be serialised to the requested format
    Serialize { format: String, message: String },
    /// IO error (for file operations)
    IoError { message: String },
    /// Internal error
    InternalError { message: String },
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::InvalidInput { message } => {
                write!(f, "Invalid input: {}", message)
            }
            ExtractError::Config { message, path } => {
                if let Some(p) = path {
                    write!(f, "Config error in {}: {}", p, message)
                } else {
                    write!(f, "Config error: {}", message)
                }
            }
            ExtractError::Serialize { format, message } => {
                write!(f, "Cannot write {} output: {}", format, message)
            }
            ExtractError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
            ExtractError::InternalError { message } => {
                write!(f, "Internal error: {}", message)
            }
        }
    }
}

impl std::error::Error for ExtractError {}

impl From<std::io::Error> for ExtractError {
    fn from(err: std::io::Error) -> Self {
        ExtractError::IoError {
            message: err.to_string(),
        }
    }
}

#[cfg(feature = "formats")]
impl From<serde_json::Error> for ExtractError {
    fn from(err: serde_json::Error) -> Self {
        ExtractError::serialize("json", err.to_string())
    }
}

#[cfg(feature = "formats")]
impl From<serde_yaml::Error> for ExtractError {
    fn from(err: serde_yaml::Error) -> Self {
        ExtractError::serialize("yaml", err.to_string())
    }
}

#[cfg(feature = "formats")]
impl From<csv::Error> for ExtractError {
    fn from(err: csv::Error) -> Self {
        ExtractError::serialize("csv", err.to_string())
    }
}

#[cfg(feature = "formats")]
impl From<toml::de::Error> for ExtractError {
    fn from(err: toml::de::Error) -> Self {
        ExtractError::config(err.to_string())
    }
}

/// Result type for fallible operations around extraction
pub type ExtractResult<T> = Result<T, ExtractError>;

// Convenience constructors for errors
impl ExtractError {
    pub fn invalid(message: impl Into<String>) -> Self {
        ExtractError::InvalidInput {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        ExtractError::Config {
            message: message.into(),
            path: None,
        }
    }

    pub fn config_at(message: impl Into<String>, path: impl Into<String>) -> Self {
        ExtractError::Config {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    pub fn serialize(format: impl Into<String>, message: impl Into<String>) -> Self {
        ExtractError::Serialize {
            format: format.into(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ExtractError::InternalError {
            message: message.into(),
        }
    }
}
