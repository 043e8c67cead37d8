use glob::PatternError;
use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error type for the transform pipeline
#[derive(Debug)]
pub enum Error {
    /// Error related to file operations
    FileOperation {
        source: io::Error,
        path: PathBuf,
        operation: String,
    },
    /// Source document is unreadable or not well formed
    Parse { path: PathBuf, detail: String },
    /// Stylesheet application failed for a well-formed document
    Transform { path: PathBuf, detail: String },
    /// Stylesheet is missing or cannot be compiled
    Stylesheet { path: PathBuf, detail: String },
    /// Error related to glob pattern matching
    GlobPattern {
        source: PatternError,
        pattern: String,
    },
    /// Error related to path operations
    PathOperation { path: PathBuf, operation: String },
    /// Error when a filename is not valid Unicode
    InvalidFilename { path: PathBuf },
    /// Generic error with a message
    Generic { message: String },
}

impl Error {
    /// Short label for the kind of failure, used in the batch summary
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Parse { .. } => "parse",
            Error::Transform { .. } => "transform",
            Error::Stylesheet { .. } => "stylesheet",
            Error::FileOperation { .. } => "write",
            _ => "other",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FileOperation {
                source,
                path,
                operation,
            } => {
                write!(f, "Failed to {} {}: {}", operation, path.display(), source)
            }
            Error::Parse { path, detail } => {
                write!(f, "Failed to parse {}: {detail}", path.display())
            }
            Error::Transform { path, detail } => {
                write!(f, "Failed to transform {}: {detail}", path.display())
            }
            Error::Stylesheet { path, detail } => {
                write!(f, "Failed to load stylesheet {}: {detail}", path.display())
            }
            Error::GlobPattern { pattern, .. } => {
                write!(f, "Invalid glob pattern: {pattern}")
            }
            Error::PathOperation { path, operation } => {
                write!(f, "Failed to {} path: {}", operation, path.display())
            }
            Error::InvalidFilename { path } => {
                write!(f, "Filename is not valid unicode: {}", path.display())
            }
            Error::Generic { message } => {
                write!(f, "{message}")
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::FileOperation { source, .. } => Some(source),
            Error::GlobPattern { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::FileOperation {
            source: err,
            path: PathBuf::new(),
            operation: "access".to_string(),
        }
    }
}

impl From<PatternError> for Error {
    fn from(err: PatternError) -> Self {
        Error::GlobPattern {
            source: err,
            pattern: String::new(),
        }
    }
}

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create a file operation error
pub fn file_operation_error(err: io::Error, path: PathBuf, operation: &str) -> Error {
    Error::FileOperation {
        source: err,
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create a parse error
pub fn parse_error(path: PathBuf, detail: &str) -> Error {
    Error::Parse {
        path,
        detail: detail.to_string(),
    }
}

/// Helper function to create a transform error
pub fn transform_error(path: PathBuf, detail: &str) -> Error {
    Error::Transform {
        path,
        detail: detail.to_string(),
    }
}

/// Helper function to create a stylesheet error
pub fn stylesheet_error(path: PathBuf, detail: &str) -> Error {
    Error::Stylesheet {
        path,
        detail: detail.to_string(),
    }
}

/// Helper function to create a glob pattern error
pub fn glob_pattern_error(err: PatternError, pattern: &str) -> Error {
    Error::GlobPattern {
        source: err,
        pattern: pattern.to_string(),
    }
}

/// Helper function to create a path operation error
pub fn path_operation_error(path: PathBuf, operation: &str) -> Error {
    Error::PathOperation {
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create an invalid filename error
pub fn invalid_filename_error(path: PathBuf) -> Error {
    Error::InvalidFilename { path }
}

/// Helper function to create a generic error
pub fn generic_error(message: &str) -> Error {
    Error::Generic {
        message: message.to_string(),
    }
}
