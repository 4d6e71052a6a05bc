//! # autocrew-error
//!
//! Unified error handling for autocrew.
//!
//! ## Design Philosophy
//!
//! - **ErrorKind**: Know what error occurred (e.g., ParseFailed, EmptyResponse)
//! - **ErrorStatus**: Decide how to handle it (Permanent, Temporary, Persistent)
//! - **Error Context**: Assist in locating the cause with rich context
//! - **Error Source**: Wrap underlying errors without leaking raw types
//!
//! ## Usage
//!
//! ```rust
//! use autocrew_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::ParseFailed, "role component missing in CSV data")
//!         .with_operation("roster::parse")
//!         .with_context("source_file", "autocrew-20240101-120000-demo-1.csv")
//!         .with_context("row", "3"))
//! }
//! ```
//!
//! ## Principles
//!
//! - All fallible functions return `Result<T, autocrew_error::Error>`
//! - External errors are wrapped with `set_source(err)`
//! - Same error handled once, subsequent ops only append context
//! - Nothing is retried automatically; `ErrorStatus` only records retryability

mod error;
mod kind;
mod status;

pub use error::Error;
pub use kind::ErrorKind;
pub use status::ErrorStatus;

/// Result type alias using autocrew Error
pub type Result<T> = std::result::Result<T, Error>;
