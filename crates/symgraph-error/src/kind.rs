//! What went wrong.

use strum_macros::{Display, IntoStaticStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Catch-all for failures that fit nowhere else.
    Unexpected,
    /// A caller supplied an argument the operation cannot use.
    InvalidArgument,

    /// A language rule rejected its input, e.g. a path with no file name.
    PolicyFailed,
    /// The requested language has no rules.
    UnsupportedLanguage,

    FileNotFound,
    PermissionDenied,
    /// Any other I/O failure; these may go away on their own.
    IoFailed,

    /// A fact sheet or a symbol record could not be decoded.
    DeserializationFailed,
    /// A file reference is neither a path nor a `file:` URI.
    InvalidFormat,

    /// The layout engine could not turn DOT into an image.
    RenderFailed,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Whether errors of this kind start out as temporary.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorKind::IoFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(ErrorKind::PolicyFailed.to_string(), "PolicyFailed");
        assert_eq!(ErrorKind::UnsupportedLanguage.as_str(), "UnsupportedLanguage");
    }

    #[test]
    fn test_only_io_starts_retryable() {
        assert!(ErrorKind::IoFailed.is_retryable());
        assert!(!ErrorKind::FileNotFound.is_retryable());
        assert!(!ErrorKind::PolicyFailed.is_retryable());
        assert!(!ErrorKind::RenderFailed.is_retryable());
    }
}
