//! Wrapping arbitrary errors into annotated errors

use crate::{location, Error, ErrorCode};

/// Message attached by `wrap_trace` and by `wrap` when none is supplied
pub const DEFAULT_MESSAGE: &str = "An error occurred";

/// Optional overrides applied by a wrap.
///
/// Unset fields leave the wrapped error untouched. When a plain error is
/// wrapped they fall back to `DEFAULT_MESSAGE` and `ErrorCode::Internal`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotation {
    /// Replacement message
    pub message: Option<String>,
    /// Replacement code
    pub code: Option<ErrorCode>,
}

impl Annotation {
    /// An annotation that overrides nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the message override
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Set the code override
    pub fn code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }
}

/// Wrap `err`, recording the caller as the current trace.
///
/// If `err` is already an [`Error`] it is updated and returned: its old trace
/// moves into the previous traces and its cause is kept. Any other error
/// becomes the cause of a new [`Error`].
///
/// ```rust
/// use annotate_error::{wrap, Annotation, ErrorCode};
///
/// let io = std::io::Error::new(std::io::ErrorKind::NotFound, "config.toml");
/// let err = wrap(io, Annotation::new().code(ErrorCode::NotFound));
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert_eq!(err.cause().unwrap().to_string(), "config.toml");
///
/// let err = wrap(err, Annotation::new().message("loading settings"));
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert_eq!(err.previous_traces().len(), 1);
/// ```
#[track_caller]
pub fn wrap(err: impl Into<anyhow::Error>, annotation: Annotation) -> Error {
    annotate(err.into(), location::capture(), annotation)
}

/// Wrap `err` with the generic message, keeping (or defaulting) the code.
#[track_caller]
pub fn wrap_trace(err: impl Into<anyhow::Error>) -> Error {
    wrap(err, Annotation::new().message(DEFAULT_MESSAGE))
}

/// Wrap `err` with `message` and `ErrorCode::Internal`.
#[track_caller]
pub fn wrap_message(err: impl Into<anyhow::Error>, message: impl Into<String>) -> Error {
    wrap(err, Annotation::new().message(message).code(ErrorCode::Internal))
}

/// Wrap `err` with an explicit code and message.
#[track_caller]
pub fn wrap_message_with_code(
    err: impl Into<anyhow::Error>,
    code: ErrorCode,
    message: impl Into<String>,
) -> Error {
    wrap(err, Annotation::new().message(message).code(code))
}

fn annotate(err: anyhow::Error, trace: String, annotation: Annotation) -> Error {
    match err.downcast::<Error>() {
        Ok(existing) => existing.rewrap(trace, annotation),
        Err(plain) => {
            tracing::trace!(trace = %trace, cause = %plain, "annotated plain error");
            Error::default()
                .with_message(annotation.message.unwrap_or_else(|| DEFAULT_MESSAGE.to_string()))
                .with_code(annotation.code.unwrap_or(ErrorCode::Internal))
                .with_trace(trace)
                .with_cause(plain)
        }
    }
}

/// Wrapping on `Result`, leaving `Ok` values untouched.
///
/// ```rust
/// use annotate_error::{ErrorCode, ResultExt};
///
/// fn read() -> std::io::Result<String> {
///     std::fs::read_to_string("/definitely/not/here")
/// }
///
/// let err = read().wrap_message_with_code(ErrorCode::NotFound, "reading input").unwrap_err();
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert!(err.trace().contains(".rs:"));
/// ```
pub trait ResultExt<T> {
    fn wrap_trace(self) -> Result<T, Error>;

    fn wrap_message(self, message: impl Into<String>) -> Result<T, Error>;

    fn wrap_message_with_code(self, code: ErrorCode, message: impl Into<String>) -> Result<T, Error>;
}

impl<T, E: Into<anyhow::Error>> ResultExt<T> for Result<T, E> {
    #[track_caller]
    fn wrap_trace(self) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(wrap_trace(err)),
        }
    }

    #[track_caller]
    fn wrap_message(self, message: impl Into<String>) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(wrap_message(err, message)),
        }
    }

    #[track_caller]
    fn wrap_message_with_code(self, code: ErrorCode, message: impl Into<String>) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(wrap_message_with_code(err, code, message)),
        }
    }
}
