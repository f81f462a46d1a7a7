//! The annotated Error type

use crate::wrap::{Annotation, DEFAULT_MESSAGE};
use crate::{location, ErrorCode};
use serde::Serialize;
use std::fmt;

/// Rendered by `Display` when an error carries no message
pub const UNKNOWN_ERROR: &str = "unknown error";

/// An error annotated with a classification code, a message and the call
/// sites it was wrapped at.
///
/// This error type provides:
/// - `code`: How the error is classified
/// - `message`: Human-readable description
/// - `trace`: The call site that most recently wrapped the error
/// - `previous_traces`: Earlier call sites, most recent first
/// - `cause`: The underlying error (if any)
///
/// Wrapping an `Error` again never nests it: the same value is updated and
/// its old trace moves to the front of `previous_traces`. The cause chain
/// therefore only grows when a plain (non-annotated) error is wrapped.
///
/// Wrapping takes the error by value, so there is exactly one writer per
/// error as it travels up a call stack. Nothing is updated through shared
/// references and no locking is involved.
///
/// # Example
///
/// ```rust
/// use annotate_error::{Error, ErrorCode};
///
/// let err = Error::new("page 'context' not found", ErrorCode::NotFound);
/// assert_eq!(err.to_string(), "page 'context' not found");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert_eq!(err.print_trace(), "");
///
/// let err = err.wrap_trace();
/// assert_eq!(err.print_trace().lines().count(), 1);
/// ```
#[derive(Default, Serialize)]
pub struct Error {
    message: String,
    code: ErrorCode,
    trace: String,
    previous_traces: Vec<String>,
    #[serde(skip)]
    source: Option<anyhow::Error>,
}

impl Error {
    /// Create a new error with the given message and code
    pub fn new(message: impl Into<String>, code: ErrorCode) -> Self {
        Self::default().with_message(message).with_code(code)
    }

    // =========================================================================
    // Getters
    // =========================================================================

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Get the raw message, which may be empty
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the most recent location trace, empty if never wrapped
    pub fn trace(&self) -> &str {
        &self.trace
    }

    /// Get the earlier location traces, most recent first
    pub fn previous_traces(&self) -> &[String] {
        &self.previous_traces
    }

    /// Get the direct cause (if any)
    pub fn cause(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }

    /// Get the direct cause as an `anyhow::Error` (if any)
    pub fn cause_ref(&self) -> Option<&anyhow::Error> {
        self.source.as_ref()
    }

    /// Take the direct cause out of this error
    pub fn into_cause(self) -> Option<anyhow::Error> {
        self.source
    }

    /// Render the current trace followed by every previous trace, one per
    /// line. Returns an empty string if the error was never wrapped.
    pub fn print_trace(&self) -> String {
        if self.trace.is_empty() {
            return String::new();
        }

        let mut out = self.trace.clone();
        for trace in &self.previous_traces {
            out.push('\n');
            out.push_str(trace);
        }
        out
    }

    /// Check whether `target` is an `Error` with the same code.
    ///
    /// Message and cause are ignored; a plain error never matches.
    pub fn is(&self, target: &(dyn std::error::Error + 'static)) -> bool {
        target
            .downcast_ref::<Error>()
            .is_some_and(|other| other.code == self.code)
    }

    // =========================================================================
    // Builders (chainable, later calls override earlier ones)
    // =========================================================================

    /// Set the error code
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = code;
        self
    }

    /// Set the message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Set the current location trace
    pub fn with_trace(mut self, trace: impl Into<String>) -> Self {
        self.trace = trace.into();
        self
    }

    /// Replace the previous traces, most recent first
    pub fn with_previous_traces(mut self, traces: Vec<String>) -> Self {
        self.previous_traces = traces;
        self
    }

    /// Set the cause, replacing any earlier one
    pub fn with_cause(mut self, cause: impl Into<anyhow::Error>) -> Self {
        self.source = Some(cause.into());
        self
    }

    // =========================================================================
    // Wrapping
    // =========================================================================

    /// Record the caller as the current trace, keeping code and cause.
    #[track_caller]
    pub fn wrap_trace(self) -> Self {
        self.rewrap(location::capture(), Annotation::new().message(DEFAULT_MESSAGE))
    }

    /// Record the caller and replace the message, forcing `ErrorCode::Internal`.
    #[track_caller]
    pub fn wrap_message(self, message: impl Into<String>) -> Self {
        self.rewrap(
            location::capture(),
            Annotation::new().message(message).code(ErrorCode::Internal),
        )
    }

    /// Record the caller and replace both message and code.
    #[track_caller]
    pub fn wrap_message_with_code(self, code: ErrorCode, message: impl Into<String>) -> Self {
        self.rewrap(location::capture(), Annotation::new().message(message).code(code))
    }

    /// Move the current trace to the front of the previous traces, record
    /// `trace` in its place and apply the overrides.
    pub(crate) fn rewrap(mut self, trace: String, annotation: Annotation) -> Self {
        let previous = std::mem::replace(&mut self.trace, trace);
        if !previous.is_empty() {
            self.previous_traces.insert(0, previous);
        }
        self.apply(annotation);

        tracing::debug!(
            code = %self.code,
            trace = %self.trace,
            depth = self.previous_traces.len(),
            "rewrapped annotated error"
        );
        self
    }

    fn apply(&mut self, annotation: Annotation) {
        if let Some(message) = annotation.message {
            self.message = message;
        }
        if let Some(code) = annotation.code {
            self.code = code;
        }
    }
}

// =============================================================================
// Display - the message, never empty
// =============================================================================

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            f.write_str(UNKNOWN_ERROR)
        } else {
            f.write_str(&self.message)
        }
    }
}

// =============================================================================
// Debug - verbose, multi-line format for debugging
// =============================================================================

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({}) => {}", self.code, self.code.as_u16(), self)?;

        if !self.trace.is_empty() {
            writeln!(f)?;
            writeln!(f, "    Trace:")?;
            for line in self.print_trace().lines() {
                writeln!(f, "        {}", line)?;
            }
        }

        if let Some(source) = &self.source {
            writeln!(f)?;
            writeln!(f, "    Cause: {:?}", source)?;
        }

        Ok(())
    }
}

// =============================================================================
// std::error::Error implementation
// =============================================================================

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause()
    }
}
