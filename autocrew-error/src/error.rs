//! The main Error type for autocrew

use crate::{ErrorKind, ErrorStatus};
use std::fmt;

/// The unified error type for all autocrew operations.
///
/// This error type provides:
/// - `kind`: What type of error occurred
/// - `message`: Human-readable description
/// - `status`: Whether the error is retryable
/// - `operation`: What operation caused the error
/// - `context`: Key-value pairs for debugging
/// - `source`: The underlying error (if any)
///
/// # Example
///
/// ```rust
/// use autocrew_error::{Error, ErrorKind, ErrorStatus};
///
/// let err = Error::new(ErrorKind::InferenceFailed, "model returned status 500")
///     .with_operation("provider::complete")
///     .with_status(ErrorStatus::Temporary)
///     .with_context("model", "openhermes")
///     .with_context("status", "500");
///
/// assert_eq!(err.kind(), ErrorKind::InferenceFailed);
/// assert!(err.status().is_retryable());
/// ```
pub struct Error {
    kind: ErrorKind,
    message: String,
    status: ErrorStatus,
    operation: &'static str,
    context: Vec<(&'static str, String)>,
    source: Option<anyhow::Error>,
}

impl Error {
    /// Create a new error with the given kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        let status = if kind.is_retryable() {
            ErrorStatus::Temporary
        } else {
            ErrorStatus::Permanent
        };

        Self {
            kind,
            message: message.into(),
            status,
            operation: "",
            context: Vec::new(),
            source: None,
        }
    }

    // =========================================================================
    // Getters
    // =========================================================================

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the error status
    pub fn status(&self) -> ErrorStatus {
        self.status
    }

    /// Get the operation that caused this error
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// Get the context key-value pairs
    pub fn context(&self) -> &[(&'static str, String)] {
        &self.context
    }

    /// Get the source error (if any)
    pub fn source_ref(&self) -> Option<&anyhow::Error> {
        self.source.as_ref()
    }

    // =========================================================================
    // Builders (chainable)
    // =========================================================================

    /// Set the error status
    pub fn with_status(mut self, status: ErrorStatus) -> Self {
        self.status = status;
        self
    }

    /// Mark as temporary (retryable)
    pub fn temporary(mut self) -> Self {
        self.status = ErrorStatus::Temporary;
        self
    }

    /// Mark as permanent (not retryable)
    pub fn permanent(mut self) -> Self {
        self.status = ErrorStatus::Permanent;
        self
    }

    /// Set the operation that caused this error.
    ///
    /// If an operation was already set, the previous one is moved to context
    /// as "called" to preserve the call chain.
    pub fn with_operation(mut self, operation: &'static str) -> Self {
        if !self.operation.is_empty() {
            self.context.push(("called", self.operation.to_string()));
        }
        self.operation = operation;
        self
    }

    /// Add context to the error
    pub fn with_context(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.context.push((key, value.into()));
        self
    }

    /// Set the source error.
    ///
    /// # Panics (debug only)
    /// Panics in debug mode if source was already set.
    pub fn set_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        debug_assert!(self.source.is_none(), "source error already set");
        self.source = Some(source.into());
        self
    }

    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        self.status.is_retryable()
    }
}

// =============================================================================
// Display - compact, single-line format for logs
// =============================================================================

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) at {}", self.kind, self.status, self.operation)?;

        if !self.context.is_empty() {
            write!(f, ", context {{ ")?;
            for (i, (key, value)) in self.context.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}: {}", key, value)?;
            }
            write!(f, " }}")?;
        }

        if !self.message.is_empty() {
            write!(f, " => {}", self.message)?;
        }

        Ok(())
    }
}

// =============================================================================
// Debug - verbose, multi-line format for error reports
// =============================================================================

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({}) at {}", self.kind, self.status, self.operation)?;

        if !self.message.is_empty() {
            writeln!(f)?;
            writeln!(f, "    Message: {}", self.message)?;
        }

        if !self.context.is_empty() {
            writeln!(f)?;
            writeln!(f, "    Context:")?;
            for (key, value) in &self.context {
                writeln!(f, "        {}: {}", key, value)?;
            }
        }

        if let Some(source) = &self.source {
            writeln!(f)?;
            writeln!(f, "    Source: {:?}", source)?;
        }

        Ok(())
    }
}

// =============================================================================
// std::error::Error implementation
// =============================================================================

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

// =============================================================================
// Convenient From implementations (be careful not to leak raw errors!)
// =============================================================================

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorKind::FileNotFound,
            std::io::ErrorKind::PermissionDenied => ErrorKind::PermissionDenied,
            _ => ErrorKind::IoFailed,
        };
        Error::new(kind, err.to_string())
            .with_operation("io")
            .set_source(err)
    }
}

// =============================================================================
// Convenience constructors
// =============================================================================

impl Error {
    /// Create an Unexpected error
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }

    /// Create a ConfigInvalid error
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message)
    }

    /// Create a ParseFailed error
    pub fn parse_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ParseFailed, message)
    }

    /// Create an EmptyResponse error
    pub fn empty_response(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::EmptyResponse, message)
    }

    /// Create an InferenceFailed error
    pub fn inference_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InferenceFailed, message)
    }

    /// Create a NetworkFailed error
    pub fn network_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NetworkFailed, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = Error::new(ErrorKind::ParseFailed, "role component missing in CSV data");
        assert_eq!(err.kind(), ErrorKind::ParseFailed);
        assert_eq!(err.message(), "role component missing in CSV data");
        assert_eq!(err.status(), ErrorStatus::Permanent);
    }

    #[test]
    fn test_error_with_context() {
        let err = Error::new(ErrorKind::InferenceFailed, "timeout")
            .with_operation("provider::complete")
            .with_context("model", "openhermes")
            .with_context("base_url", "http://localhost:11434");

        assert_eq!(err.operation(), "provider::complete");
        assert_eq!(err.context().len(), 2);
        assert_eq!(err.context()[0], ("model", "openhermes".to_string()));
    }

    #[test]
    fn test_operation_chaining() {
        let err = Error::new(ErrorKind::IoFailed, "write failed")
            .with_operation("artifact::save_csv")
            .with_operation("run::generate");

        assert_eq!(err.operation(), "run::generate");
        assert_eq!(err.context().len(), 1);
        assert_eq!(err.context()[0], ("called", "artifact::save_csv".to_string()));
    }

    #[test]
    fn test_status_defaults() {
        let err = Error::new(ErrorKind::NetworkFailed, "connection refused");
        assert!(err.is_retryable()); // NetworkFailed defaults to temporary

        let err = Error::new(ErrorKind::ConfigInvalid, "incompatible flags");
        assert!(!err.is_retryable()); // ConfigInvalid defaults to permanent
    }

    #[test]
    fn test_display() {
        let err = Error::new(ErrorKind::EmptyResponse, "no response from Ollama")
            .with_operation("run::generate")
            .with_context("iteration", "2");

        let display = format!("{}", err);
        assert!(display.contains("EmptyResponse"));
        assert!(display.contains("permanent"));
        assert!(display.contains("run::generate"));
        assert!(display.contains("iteration: 2"));
        assert!(display.contains("no response from Ollama"));
    }

    #[test]
    fn test_convenience_constructors() {
        let err = Error::config_invalid("the -m and -a flags must not be used simultaneously");
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);

        let err = Error::empty_response("no agent data parsed");
        assert_eq!(err.kind(), ErrorKind::EmptyResponse);

        let err = Error::parse_failed("missing header row");
        assert_eq!(err.kind(), ErrorKind::ParseFailed);
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: Error = io_err.into();
        assert_eq!(err.kind(), ErrorKind::FileNotFound);
        assert!(err.source_ref().is_some());
    }
}
