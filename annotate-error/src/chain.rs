//! Free functions for inspecting any error against the annotated chain

use crate::Error;
use std::error::Error as StdError;

/// Follow causes through every annotated link and return the first error
/// that is either plain or an annotated error without a cause.
pub fn root_cause<'a>(err: &'a (dyn StdError + 'static)) -> &'a (dyn StdError + 'static) {
    let mut current = err;
    while let Some(annotated) = current.downcast_ref::<Error>() {
        match annotated.cause() {
            Some(cause) => current = cause,
            None => break,
        }
    }
    current
}

/// The direct cause of an annotated error, or `err` itself if it is plain.
pub fn unwrap<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a (dyn StdError + 'static)> {
    match err.downcast_ref::<Error>() {
        Some(annotated) => annotated.cause(),
        None => Some(err),
    }
}

/// The rendered trace of an annotated error, empty for anything else.
pub fn trace(err: &(dyn StdError + 'static)) -> String {
    err.downcast_ref::<Error>()
        .map(Error::print_trace)
        .unwrap_or_default()
}

/// Check whether `err` is an annotated [`Error`].
pub fn is_annotated(err: &(dyn StdError + 'static)) -> bool {
    err.is::<Error>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{wrap_message, wrap_trace, ErrorCode};

    fn plain() -> std::io::Error {
        std::io::Error::new(std::io::ErrorKind::Other, "v is 0")
    }

    #[test]
    fn test_root_cause_of_plain_is_itself() {
        let err = plain();
        assert_eq!(root_cause(&err).to_string(), "v is 0");
    }

    #[test]
    fn test_root_cause_of_causeless_annotated_is_itself() {
        let err = Error::new("alone", ErrorCode::NotFound);
        let root = root_cause(&err);
        assert!(is_annotated(root));
        assert_eq!(root.to_string(), "alone");
    }

    #[test]
    fn test_root_cause_walks_nested_annotated() {
        // `with_cause` can nest annotated errors explicitly
        let inner = wrap_message(plain(), "inner");
        let outer = Error::new("outer", ErrorCode::Internal).with_cause(inner);

        let root = root_cause(&outer);
        assert!(!is_annotated(root));
        assert!(root.downcast_ref::<std::io::Error>().is_some());
    }

    #[test]
    fn test_unwrap() {
        let err = wrap_trace(plain());
        assert_eq!(unwrap(&err).unwrap().to_string(), "v is 0");

        let bare = Error::new("bare", ErrorCode::Internal);
        assert!(unwrap(&bare).is_none());

        let p = plain();
        assert_eq!(unwrap(&p).unwrap().to_string(), "v is 0");
    }

    #[test]
    fn test_trace() {
        assert_eq!(trace(&plain()), "");
        assert_eq!(trace(&Error::new("never wrapped", ErrorCode::Internal)), "");

        let err = wrap_trace(wrap_trace(plain()));
        let rendered = trace(&err);
        assert_eq!(rendered.lines().count(), 1 + err.previous_traces().len());
    }

    #[test]
    fn test_is_annotated() {
        assert!(!is_annotated(&plain()));
        assert!(is_annotated(&wrap_trace(plain())));
    }
}
