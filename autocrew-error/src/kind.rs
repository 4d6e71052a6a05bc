//! Error kinds for autocrew operations

use std::fmt;

/// The kind of error that occurred.
///
/// This enum categorizes errors to help users write clear error handling logic.
/// Users can match on ErrorKind to decide how to handle specific error cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    // =========================================================================
    // General errors
    // =========================================================================
    /// An unexpected error occurred - catch-all for unhandled cases
    Unexpected,

    /// Invalid configuration or incompatible command line flags
    ConfigInvalid,

    // =========================================================================
    // Roster/parse errors
    // =========================================================================
    /// Failed to parse model output (missing role, malformed CSV)
    ParseFailed,

    /// The model returned nothing usable
    EmptyResponse,

    // =========================================================================
    // Inference errors
    // =========================================================================
    /// The model runtime refused or failed the request
    InferenceFailed,

    /// HTTP transport to the model runtime failed
    NetworkFailed,

    // =========================================================================
    // IO errors
    // =========================================================================
    /// File not found
    FileNotFound,

    /// Permission denied
    PermissionDenied,

    /// IO operation failed
    IoFailed,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Unexpected => "Unexpected",
            ErrorKind::ConfigInvalid => "ConfigInvalid",

            ErrorKind::ParseFailed => "ParseFailed",
            ErrorKind::EmptyResponse => "EmptyResponse",

            ErrorKind::InferenceFailed => "InferenceFailed",
            ErrorKind::NetworkFailed => "NetworkFailed",

            ErrorKind::FileNotFound => "FileNotFound",
            ErrorKind::PermissionDenied => "PermissionDenied",
            ErrorKind::IoFailed => "IoFailed",
        }
    }

    /// Check if this error kind is retryable by default.
    ///
    /// Note that autocrew never retries on its own; this only classifies.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorKind::InferenceFailed | ErrorKind::NetworkFailed)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_display() {
        assert_eq!(ErrorKind::ParseFailed.to_string(), "ParseFailed");
        assert_eq!(ErrorKind::EmptyResponse.to_string(), "EmptyResponse");
    }

    #[test]
    fn test_is_retryable() {
        assert!(ErrorKind::NetworkFailed.is_retryable());
        assert!(ErrorKind::InferenceFailed.is_retryable());
        assert!(!ErrorKind::ParseFailed.is_retryable());
        assert!(!ErrorKind::ConfigInvalid.is_retryable());
    }
}
