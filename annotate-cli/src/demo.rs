//! Two call sites wrapping the same error on its way up.

use annotate_error::{wrap_message, Error};
use std::fmt;

/// The plain error raised at the bottom of the chain
#[derive(Debug)]
pub struct ZeroValue;

impl fmt::Display for ZeroValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("v is 0")
    }
}

impl std::error::Error for ZeroValue {}

/// Passes `v` through `checker`, annotating its failure when `v` is zero.
pub fn converter(v: i64) -> Result<i64, Error> {
    match checker(v) {
        Ok(v) => Ok(v),
        Err(err) => Err(wrap_message(err, "converter - v is 0")),
    }
}

pub fn checker(v: i64) -> Result<i64, Error> {
    if v == 0 {
        return Err(wrap_message(ZeroValue, "v is 0"));
    }
    Ok(v)
}
