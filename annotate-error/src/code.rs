//! Classification codes attached to annotated errors

use serde::{Serialize, Serializer};
use std::fmt;

/// The classification of an error.
///
/// Codes follow HTTP status semantics so that a consumer can map an error
/// straight onto a response status. `Unset` is used when no code was given,
/// and `Other` keeps the set open for codes without a named variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ErrorCode {
    /// No classification was provided
    #[default]
    Unset,

    // =========================================================================
    // Client errors
    // =========================================================================
    /// 400
    BadRequest,

    /// 401
    Unauthorized,

    /// 403
    Forbidden,

    /// 404
    NotFound,

    // =========================================================================
    // Server errors
    // =========================================================================
    /// 500
    Internal,

    /// 501
    NotImplemented,

    /// 503
    ServiceUnavailable,

    /// Any other numeric code
    Other(u16),
}

impl ErrorCode {
    /// Returns the numeric value of this code, `0` for `Unset`
    pub fn as_u16(&self) -> u16 {
        match self {
            ErrorCode::Unset => 0,
            ErrorCode::BadRequest => 400,
            ErrorCode::Unauthorized => 401,
            ErrorCode::Forbidden => 403,
            ErrorCode::NotFound => 404,
            ErrorCode::Internal => 500,
            ErrorCode::NotImplemented => 501,
            ErrorCode::ServiceUnavailable => 503,
            ErrorCode::Other(code) => *code,
        }
    }

    /// Maps a numeric value back onto a code.
    ///
    /// Known values map to their named variant, `0` maps to `Unset`.
    pub fn from_u16(code: u16) -> Self {
        match code {
            0 => ErrorCode::Unset,
            400 => ErrorCode::BadRequest,
            401 => ErrorCode::Unauthorized,
            403 => ErrorCode::Forbidden,
            404 => ErrorCode::NotFound,
            500 => ErrorCode::Internal,
            501 => ErrorCode::NotImplemented,
            503 => ErrorCode::ServiceUnavailable,
            other => ErrorCode::Other(other),
        }
    }

    /// Returns the name of the code as a static string
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Unset => "Unset",
            ErrorCode::BadRequest => "BadRequest",
            ErrorCode::Unauthorized => "Unauthorized",
            ErrorCode::Forbidden => "Forbidden",
            ErrorCode::NotFound => "NotFound",
            ErrorCode::Internal => "Internal",
            ErrorCode::NotImplemented => "NotImplemented",
            ErrorCode::ServiceUnavailable => "ServiceUnavailable",
            ErrorCode::Other(_) => "Other",
        }
    }

    /// Check if this code is in the 4xx range
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.as_u16())
    }

    /// Check if this code is in the 5xx range
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.as_u16())
    }
}

impl From<u16> for ErrorCode {
    fn from(code: u16) -> Self {
        ErrorCode::from_u16(code)
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.as_u16()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::Other(code) => write!(f, "Other({})", code),
            _ => write!(f, "{}", self.as_str()),
        }
    }
}

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.as_u16())
    }
}
