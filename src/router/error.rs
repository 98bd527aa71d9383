//! Registration errors: malformed route paths and ambiguous routes.

use std::fmt;

use super::node::NodeKind;

/// Why a route path was rejected before it reached the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// The path is the empty string
    Empty,
    /// The path does not start with `/`
    MissingLeadingSlash,
    /// The path ends with `/` and is not the root path
    TrailingSlash,
    /// The path contains `//`
    EmptySegment,
    /// A `:` segment has an empty or non-identifier parameter name,
    /// or a parenthesised suffix that is not closed
    MalformedParam {
        /// The offending segment
        segment: String,
    },
    /// The pattern of a `:name(pattern)` segment is empty or does not compile
    InvalidPattern {
        /// The offending segment
        segment: String,
        /// Compiler message from the regex engine
        reason: String,
    },
}

/// Why a route would make the tree ambiguous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictKind {
    /// The exact path already has a handler for this method
    DuplicateRoute,
    /// A param child with another name already sits at this position
    ParamName {
        /// Name bound by the first registration
        existing: String,
        /// Name requested by the failing registration
        requested: String,
    },
    /// A regex child with another name or pattern already sits at this position
    RegexSpec {
        /// Segment text of the first registration
        existing: String,
        /// Segment text of the failing registration
        requested: String,
    },
    /// Two different special kinds (param, regex, wildcard) at one position
    MixedSpecial {
        /// Kind of the child already present
        existing: NodeKind,
        /// Kind the failing registration asked for
        requested: NodeKind,
    },
}

/// Registration error returned by [`Router::register`](super::Router::register).
///
/// Both variants are configuration errors: they surface at startup and are
/// not meant to be retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// Malformed path or segment
    Syntax {
        /// The path as passed to `register`
        path: String,
        /// What was wrong with it
        kind: SyntaxErrorKind,
    },
    /// Ambiguous or duplicate topology
    Conflict {
        /// The path as passed to `register`
        path: String,
        /// Which rule was violated
        kind: ConflictKind,
    },
}

impl RouteError {
    pub(crate) fn syntax(path: &str, kind: SyntaxErrorKind) -> Self {
        RouteError::Syntax {
            path: path.to_string(),
            kind,
        }
    }

    pub(crate) fn conflict(path: &str, kind: ConflictKind) -> Self {
        RouteError::Conflict {
            path: path.to_string(),
            kind,
        }
    }

    /// True for malformed paths.
    #[must_use]
    pub fn is_syntax(&self) -> bool {
        matches!(self, RouteError::Syntax { .. })
    }

    /// True for ambiguous or duplicate registrations.
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, RouteError::Conflict { .. })
    }

    /// The path that failed to register.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            RouteError::Syntax { path, .. } | RouteError::Conflict { path, .. } => path,
        }
    }
}

impl fmt::Display for SyntaxErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxErrorKind::Empty => write!(f, "path is an empty string"),
            SyntaxErrorKind::MissingLeadingSlash => write!(f, "path must start with '/'"),
            SyntaxErrorKind::TrailingSlash => write!(f, "path must not end with '/'"),
            SyntaxErrorKind::EmptySegment => {
                write!(f, "empty segment, paths like '//a/b' or '/a//b' are not allowed")
            }
            SyntaxErrorKind::MalformedParam { segment } => {
                write!(f, "malformed parameter segment '{}'", segment)
            }
            SyntaxErrorKind::InvalidPattern { segment, reason } => {
                write!(f, "invalid pattern in segment '{}': {}", segment, reason)
            }
        }
    }
}

impl fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConflictKind::DuplicateRoute => write!(f, "route is already registered"),
            ConflictKind::ParamName {
                existing,
                requested,
            } => write!(
                f,
                "parameter ':{}' conflicts with existing parameter ':{}'",
                requested, existing
            ),
            ConflictKind::RegexSpec {
                existing,
                requested,
            } => write!(
                f,
                "regex segment '{}' conflicts with existing regex segment '{}'",
                requested, existing
            ),
            ConflictKind::MixedSpecial {
                existing,
                requested,
            } => write!(
                f,
                "cannot register a {} route where a {} route already exists",
                requested, existing
            ),
        }
    }
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::Syntax { path, kind } => {
                write!(f, "Route syntax error [{}]: {}", path, kind)
            }
            RouteError::Conflict { path, kind } => {
                write!(f, "Route conflict [{}]: {}", path, kind)
            }
        }
    }
}

impl std::error::Error for RouteError {}
