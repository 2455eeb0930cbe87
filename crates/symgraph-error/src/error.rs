use std::error::Error as StdError;
use std::fmt;
use std::io;

use crate::{ErrorKind, ErrorStatus};

type BoxedSource = Box<dyn StdError + Send + Sync + 'static>;

/// A failure anywhere in the symgraph pipeline.
///
/// Built with [`Error::new`] or one of the named constructors, then decorated
/// on the way up:
///
/// ```rust
/// use symgraph_error::{Error, ErrorKind};
///
/// let err = Error::invalid_reference("ftp://host/a.go")
///     .with_operation("GraphAssembler::add_file");
/// assert_eq!(err.kind(), ErrorKind::InvalidFormat);
/// assert_eq!(err.context_value("reference"), Some("ftp://host/a.go"));
/// ```
pub struct Error {
    kind: ErrorKind,
    status: ErrorStatus,
    message: String,
    operation: &'static str,
    context: Vec<(&'static str, String)>,
    source: Option<BoxedSource>,
}

impl Error {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            status: if kind.is_retryable() {
                ErrorStatus::Temporary
            } else {
                ErrorStatus::Permanent
            },
            message: message.into(),
            operation: "",
            context: Vec::new(),
            source: None,
        }
    }

    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, message)
    }

    /// A language rule named `method` could not handle its input.
    ///
    /// The message is prefixed with `Language.method`, the method becomes the
    /// operation and the language is kept under the `language` key.
    pub fn policy_failed(
        language: &'static str,
        method: &'static str,
        message: impl Into<String>,
    ) -> Self {
        let message = format!("{language}.{method}: {}", message.into());
        Self::new(ErrorKind::PolicyFailed, message)
            .with_operation(method)
            .with_context("language", language)
    }

    pub fn unsupported_language(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::new(
            ErrorKind::UnsupportedLanguage,
            format!("no rules for language '{name}'"),
        )
        .with_context("language", name)
    }

    /// A file reference that is neither a path nor a `file:` URI.
    pub fn invalid_reference(reference: impl Into<String>) -> Self {
        let reference = reference.into();
        Self::new(
            ErrorKind::InvalidFormat,
            format!("cannot read '{reference}' as a file path or file URI"),
        )
        .with_context("reference", reference)
    }

    pub fn deserialization_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DeserializationFailed, message)
    }

    pub fn render_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RenderFailed, message)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn status(&self) -> ErrorStatus {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The innermost operation that was named last; empty if none was.
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    pub fn context(&self) -> &[(&'static str, String)] {
        &self.context
    }

    pub fn context_value(&self, key: &str) -> Option<&str> {
        self.context
            .iter()
            .find_map(|(k, v)| (*k == key).then_some(v.as_str()))
    }

    pub fn source_ref(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.source.as_deref()
    }

    pub fn is_retryable(&self) -> bool {
        self.status.is_retryable()
    }

    /// Name the operation that failed. A previously named operation is kept
    /// under the `called` key so the chain stays readable.
    pub fn with_operation(mut self, operation: &'static str) -> Self {
        let previous = std::mem::replace(&mut self.operation, operation);
        if !previous.is_empty() {
            self.context.push(("called", previous.to_string()));
        }
        self
    }

    pub fn with_context(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.context.push((key, value.into()));
        self
    }

    /// Attach the underlying error. Only one source is kept.
    pub fn set_source<E>(mut self, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        debug_assert!(self.source.is_none(), "error source set twice");
        self.source = Some(Box::new(source));
        self
    }

    /// Give up on retrying.
    pub fn persist(mut self) -> Self {
        self.status = self.status.persist();
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.kind, self.status)?;
        if !self.operation.is_empty() {
            write!(f, " in {}", self.operation)?;
        }
        let mut pairs = self.context.iter();
        if let Some((key, value)) = pairs.next() {
            write!(f, " ({key}: {value}")?;
            for (key, value) in pairs {
                write!(f, ", {key}: {value}")?;
            }
            f.write_str(")")?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct("Error");
        out.field("kind", &self.kind)
            .field("status", &self.status)
            .field("message", &self.message);
        if !self.operation.is_empty() {
            out.field("operation", &self.operation);
        }
        if !self.context.is_empty() {
            out.field("context", &self.context);
        }
        if let Some(source) = &self.source {
            out.field("source", source);
        }
        out.finish()
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source.as_deref().map(|s| s as &(dyn StdError + 'static))
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        let kind = match err.kind() {
            io::ErrorKind::NotFound => ErrorKind::FileNotFound,
            io::ErrorKind::PermissionDenied => ErrorKind::PermissionDenied,
            _ => ErrorKind::IoFailed,
        };
        Error::new(kind, err.to_string()).set_source(err)
    }
}
