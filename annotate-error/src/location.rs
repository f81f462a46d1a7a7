//! Call-site capture for location traces

use std::panic::Location;

/// Trace recorded when no call site can be determined
pub const UNKNOWN_LOCATION: &str = "unknown";

/// Capture the location of the caller as a trace line.
///
/// Every public wrap entry point is `#[track_caller]`, so the location seen
/// here is the site that called the entry point, not any helper in between.
#[track_caller]
pub(crate) fn capture() -> String {
    render(Location::caller())
}

/// Render a location as `"{file}:{line} {function}"`.
///
/// The function part is omitted when it cannot be resolved.
pub(crate) fn render(location: &Location<'_>) -> String {
    if location.file().is_empty() {
        return UNKNOWN_LOCATION.to_string();
    }

    match function_name(location) {
        Some(function) => format!("{}:{} {}", location.file(), location.line(), function),
        None => format!("{}:{}", location.file(), location.line()),
    }
}

/// Find the function enclosing `location` by walking the current stack and
/// matching the resolved file and line of each frame.
#[cfg(feature = "function-names")]
fn function_name(location: &Location<'_>) -> Option<String> {
    let file = std::path::Path::new(location.file());
    let mut found = None;

    backtrace::trace(|frame| {
        backtrace::resolve_frame(frame, |symbol| {
            if found.is_some() || symbol.lineno() != Some(location.line()) {
                return;
            }
            if symbol.filename().is_some_and(|path| path.ends_with(file)) {
                // `{:#}` drops the trailing symbol hash
                found = symbol.name().map(|name| format!("{:#}", name));
            }
        });
        found.is_none()
    });

    found
}

#[cfg(not(feature = "function-names"))]
fn function_name(_location: &Location<'_>) -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[track_caller]
    fn helper() -> String {
        capture()
    }

    #[test]
    fn test_capture_reports_caller() {
        let line = line!() + 1;
        let trace = helper();
        assert!(trace.starts_with(&format!("{}:{}", file!(), line)));
    }

    #[test]
    fn test_render_is_never_empty() {
        let trace = render(Location::caller());
        assert!(!trace.is_empty());
        assert!(trace.contains(file!()));
    }
}
