//! Retry guidance attached to every error.

use std::fmt;

/// Whether an operation that failed is worth repeating.
///
/// The graph pipeline never retries on its own. The status is for whoever
/// talks to the language server: a server that is still indexing yields
/// `Temporary` failures, a malformed reply yields `Permanent` ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ErrorStatus {
    /// Repeating the call gives the same result.
    #[default]
    Permanent,
    /// The call may succeed later.
    Temporary,
    /// Was `Temporary`, but retries have been exhausted.
    Persistent,
}

impl ErrorStatus {
    pub fn is_retryable(self) -> bool {
        self == ErrorStatus::Temporary
    }

    /// The status after a caller has given up retrying.
    pub fn persist(self) -> Self {
        if self == ErrorStatus::Temporary {
            ErrorStatus::Persistent
        } else {
            self
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorStatus::Permanent => "permanent",
            ErrorStatus::Temporary => "temporary",
            ErrorStatus::Persistent => "persistent",
        }
    }
}

impl fmt::Display for ErrorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
