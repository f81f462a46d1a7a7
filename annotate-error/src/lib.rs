//! # annotate-error
//!
//! Errors annotated with a classification code, a message and the call
//! sites they passed through.
//!
//! ## Design Philosophy
//!
//! - **ErrorCode**: Classify the error with HTTP status semantics
//! - **Message**: Say what went wrong at the current level
//! - **Traces**: Record every call site that wrapped the error, most recent first
//! - **Cause**: Keep the underlying error without leaking it into the message
//!
//! ## Usage
//!
//! ```rust
//! use annotate_error::{root_cause, wrap_message, Error};
//!
//! fn checker(v: i32) -> Result<i32, Error> {
//!     if v == 0 {
//!         let plain = std::io::Error::new(std::io::ErrorKind::InvalidInput, "v is 0");
//!         return Err(wrap_message(plain, "v is 0"));
//!     }
//!     Ok(v)
//! }
//!
//! fn converter(v: i32) -> Result<i32, Error> {
//!     checker(v).map_err(|err| err.wrap_message("converter - v is 0"))
//! }
//!
//! let err = converter(0).unwrap_err();
//! assert_eq!(err.to_string(), "converter - v is 0");
//! assert_eq!(err.print_trace().lines().count(), 2);
//! assert_eq!(root_cause(&err).to_string(), "v is 0");
//! ```
//!
//! ## Principles
//!
//! - Wrapping an annotated error updates it, it never nests
//! - Only plain errors grow the cause chain
//! - Code equality is the only notion of "same error" (`Error::is`)
//! - Traces are captured with `#[track_caller]`; the `function-names`
//!   feature adds the enclosing function resolved from debug info

mod chain;
mod code;
mod error;
mod location;
mod wrap;

pub use chain::{is_annotated, root_cause, trace, unwrap};
pub use code::ErrorCode;
pub use error::{Error, UNKNOWN_ERROR};
pub use location::UNKNOWN_LOCATION;
pub use wrap::{
    wrap, wrap_message, wrap_message_with_code, wrap_trace, Annotation, ResultExt,
    DEFAULT_MESSAGE,
};

/// Result type alias using the annotated Error
pub type Result<T> = std::result::Result<T, Error>;
