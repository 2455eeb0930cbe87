//! Error type shared by every symgraph crate.
//!
//! An [`Error`] carries three things a caller can act on:
//!
//! - an [`ErrorKind`] saying what went wrong,
//! - an [`ErrorStatus`] saying whether trying again could help,
//! - the operation that failed plus `key: value` context pairs.
//!
//! ```rust
//! use symgraph_error::{Error, ErrorKind};
//!
//! fn title(path: &str) -> symgraph_error::Result<String> {
//!     if path.is_empty() {
//!         return Err(Error::policy_failed("Java", "file_title", "path is empty"));
//!     }
//!     Ok(path.to_string())
//! }
//!
//! let err = title("").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::PolicyFailed);
//! assert_eq!(err.context_value("language"), Some("Java"));
//! ```
//!
//! Foreign errors are attached with [`Error::set_source`]; an error that is
//! passed up only gains operations and context, it is never rewrapped.

mod error;
mod kind;
mod status;

pub use error::Error;
pub use kind::ErrorKind;
pub use status::ErrorStatus;

pub type Result<T> = std::result::Result<T, Error>;
