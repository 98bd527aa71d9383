//! Route path syntax checks, applied once at registration.

use super::error::{RouteError, SyntaxErrorKind};

type Rule = fn(&str) -> Result<(), SyntaxErrorKind>;

/// Rules run in order; the first failure wins. Later rules may assume the
/// earlier ones held (e.g. `trailing_slash` indexes the non-empty path).
const RULES: [Rule; 4] = [non_empty, leading_slash, trailing_slash, no_empty_segment];

/// Validate a route path before it is split into segments.
///
/// A valid path is non-empty, starts with `/`, does not end with `/` unless it
/// is exactly `/`, and contains no `//`.
pub fn validate_path(path: &str) -> Result<(), RouteError> {
    RULES
        .iter()
        .try_for_each(|rule| rule(path))
        .map_err(|kind| RouteError::syntax(path, kind))
}

fn non_empty(path: &str) -> Result<(), SyntaxErrorKind> {
    if path.is_empty() {
        return Err(SyntaxErrorKind::Empty);
    }
    Ok(())
}

fn leading_slash(path: &str) -> Result<(), SyntaxErrorKind> {
    if !path.starts_with('/') {
        return Err(SyntaxErrorKind::MissingLeadingSlash);
    }
    Ok(())
}

fn trailing_slash(path: &str) -> Result<(), SyntaxErrorKind> {
    if path.len() > 1 && path.ends_with('/') {
        return Err(SyntaxErrorKind::TrailingSlash);
    }
    Ok(())
}

fn no_empty_segment(path: &str) -> Result<(), SyntaxErrorKind> {
    if path.contains("//") {
        return Err(SyntaxErrorKind::EmptySegment);
    }
    Ok(())
}
