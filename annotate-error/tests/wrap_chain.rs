use annotate_error::{
    is_annotated, root_cause, trace, wrap_message, wrap_trace, Error, ErrorCode,
};
use std::error::Error as StdError;

type TestResult = Result<(), Box<dyn StdError>>;

fn plain() -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::InvalidInput, "v is 0")
}

fn checker(v: i32) -> Result<i32, Error> {
    if v == 0 {
        return Err(wrap_message(plain(), "v is 0"));
    }
    Ok(v)
}

fn converter(v: i32) -> Result<i32, Error> {
    match checker(v) {
        Ok(v) => Ok(v),
        Err(err) => Err(wrap_message(err, "converter - v is 0")),
    }
}

#[test]
fn converter_checker_scenario() -> TestResult {
    let err = converter(0).unwrap_err();

    assert_eq!(err.to_string(), "converter - v is 0");
    assert_eq!(err.code(), ErrorCode::Internal);

    let rendered = err.print_trace();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with(file!()));
    assert!(lines[1].starts_with(file!()));

    // converter wraps below checker in this file, so its line is larger
    let line_of = |trace: &str| -> u32 {
        trace
            .trim_start_matches(file!())
            .trim_start_matches(':')
            .split(' ')
            .next()
            .and_then(|n| n.parse().ok())
            .unwrap_or_default()
    };
    assert!(line_of(lines[0]) > line_of(lines[1]));

    let cause = err.cause().ok_or("missing cause")?;
    assert_eq!(cause.to_string(), "v is 0");
    assert!(cause.downcast_ref::<std::io::Error>().is_some());
    Ok(())
}

#[cfg(feature = "function-names")]
#[test]
fn traces_name_the_wrapping_functions() {
    let err = converter(0).unwrap_err();
    let rendered = err.print_trace();
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("::converter"), "{}", lines[0]);
    assert!(lines[1].ends_with("::checker"), "{}", lines[1]);
}

#[test]
fn converter_passes_values_through() {
    assert_eq!(converter(21).unwrap(), 21);
}

#[test]
fn repeated_wraps_prepend_traces_and_keep_cause() {
    let err = wrap_trace(plain());
    assert!(is_annotated(&err));
    assert!(err.previous_traces().is_empty());
    let first = err.trace().to_string();

    let err = wrap_trace(err);
    assert!(is_annotated(&err));
    assert_eq!(err.previous_traces(), &[first.clone()][..]);
    assert_eq!(err.cause().map(|c| c.to_string()), Some("v is 0".to_string()));
    let second = err.trace().to_string();

    let err = wrap_trace(err);
    assert_eq!(err.previous_traces(), &[second, first][..]);
    assert_eq!(err.cause().map(|c| c.to_string()), Some("v is 0".to_string()));

    assert_eq!(trace(&err).lines().count(), 1 + err.previous_traces().len());
}

#[test]
fn root_cause_of_thrice_wrapped_chain_is_plain() {
    let err = wrap_trace(wrap_trace(wrap_trace(plain())));

    let root = root_cause(&err);
    assert!(!is_annotated(root));
    assert_eq!(root.to_string(), "v is 0");
}

#[test]
fn is_compares_codes_only() {
    let a = Error::new("a", ErrorCode::NotFound);
    assert!(a.is(&Error::new("b", ErrorCode::NotFound)));
    assert!(!a.is(&Error::new("b", ErrorCode::Forbidden)));
    assert!(!a.is(&plain()));
}

#[test]
fn plain_errors_have_no_trace() {
    assert_eq!(trace(&plain()), "");
    assert_ne!(trace(&wrap_trace(plain())), "");
}

#[test]
fn converts_into_anyhow() {
    let err: anyhow::Error = converter(0).unwrap_err().into();
    assert_eq!(err.to_string(), "converter - v is 0");
    assert_eq!(err.root_cause().to_string(), "v is 0");
}
