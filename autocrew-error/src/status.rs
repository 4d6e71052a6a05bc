//! Error status - whether an error is worth retrying

use std::fmt;

/// How an error should be treated by callers.
///
/// - `Permanent`: retrying will not help
/// - `Temporary`: the operation might succeed if retried
/// - `Persistent`: was temporary, but retries have been exhausted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorStatus {
    /// The error is permanent; retrying is pointless
    Permanent,
    /// The error is temporary; a retry may succeed
    Temporary,
    /// The error persisted through retries; treat as permanent
    Persistent,
}

impl ErrorStatus {
    /// Check whether the error is still worth retrying
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorStatus::Temporary)
    }

    /// Transition a temporary error to persistent after failed retries
    pub fn persist(self) -> Self {
        match self {
            ErrorStatus::Temporary => ErrorStatus::Persistent,
            other => other,
        }
    }
}

impl fmt::Display for ErrorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorStatus::Permanent => "permanent",
            ErrorStatus::Temporary => "temporary",
            ErrorStatus::Persistent => "persistent",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable() {
        assert!(ErrorStatus::Temporary.is_retryable());
        assert!(!ErrorStatus::Permanent.is_retryable());
        assert!(!ErrorStatus::Persistent.is_retryable());
    }

    #[test]
    fn test_persist() {
        assert_eq!(ErrorStatus::Temporary.persist(), ErrorStatus::Persistent);
        assert_eq!(ErrorStatus::Permanent.persist(), ErrorStatus::Permanent);
        assert_eq!(ErrorStatus::Persistent.persist(), ErrorStatus::Persistent);
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorStatus::Temporary.to_string(), "temporary");
        assert_eq!(ErrorStatus::Permanent.to_string(), "permanent");
    }
}
