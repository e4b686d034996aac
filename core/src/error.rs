use std::fmt;
use thiserror::Error;

/// The error type for sassign operations
#[derive(Error, Debug)]
#[error("{kind}: {message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    #[source]
    source: Option<anyhow::Error>,
}

/// The kind of error that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Connection string can't be split into `Key=Value` pairs.
    MalformedConnectionString,

    /// Account key is not valid base64.
    InvalidKeyEncoding,

    /// A required parameter is absent, checked before any signing happens.
    MissingRequiredField,
}

impl Error {
    /// Create a new error with the given kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the error message without the kind prefix.
    pub fn message(&self) -> &str {
        &self.message
    }
}

// Convenience constructors
impl Error {
    /// Create a malformed connection string error
    pub fn malformed_connection_string(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedConnectionString, message)
    }

    /// Create an invalid key encoding error
    pub fn invalid_key_encoding(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidKeyEncoding, message)
    }

    /// Create a missing required field error
    pub fn missing_required_field(field: &str) -> Self {
        Self::new(
            ErrorKind::MissingRequiredField,
            format!("required field `{field}` is missing"),
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::MalformedConnectionString => write!(f, "malformed connection string"),
            ErrorKind::InvalidKeyEncoding => write!(f, "invalid key encoding"),
            ErrorKind::MissingRequiredField => write!(f, "missing required field"),
        }
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;
