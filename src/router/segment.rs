//! Segment classification.
//!
//! Every `/`-delimited piece of a route path is classified exactly once, at
//! registration, into one of four kinds. The kind decides which child-creation
//! strategy [`Node::child_or_create`](super::node::Node::child_or_create) uses:
//!
//! | Syntax            | Kind       | Binds      |
//! |-------------------|------------|------------|
//! | `home`            | `Static`   | nothing    |
//! | `:id`             | `Param`    | `id`       |
//! | `:id(\d+)`        | `Regex`    | `id`       |
//! | `*`               | `Wildcard` | nothing    |

use std::fmt;

use regex::Regex;

use super::error::{RouteError, SyntaxErrorKind};

/// Compiled constraint of a `:name(pattern)` segment.
///
/// The pattern is anchored so it must match the whole segment value. Two
/// patterns are equal when their source text is equal.
#[derive(Clone)]
pub struct SegmentPattern {
    source: String,
    re: Regex,
}

impl SegmentPattern {
    fn compile(segment: &str, source: &str) -> Result<Self, SyntaxErrorKind> {
        if source.is_empty() {
            return Err(SyntaxErrorKind::InvalidPattern {
                segment: segment.to_string(),
                reason: "empty pattern".to_string(),
            });
        }
        let invalid = |e: regex::Error| SyntaxErrorKind::InvalidPattern {
            segment: segment.to_string(),
            reason: e.to_string(),
        };
        // the raw pattern must stand alone, or it could close the anchoring group
        Regex::new(source).map_err(invalid)?;
        let re = Regex::new(&format!("^(?:{})$", source)).map_err(invalid)?;
        Ok(Self {
            source: source.to_string(),
            re,
        })
    }

    /// The pattern as written between the parentheses.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Whether `value` satisfies the constraint in full.
    #[inline]
    #[must_use]
    pub fn is_match(&self, value: &str) -> bool {
        self.re.is_match(value)
    }
}

impl PartialEq for SegmentPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for SegmentPattern {}

impl fmt::Debug for SegmentPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SegmentPattern").field(&self.source).finish()
    }
}

/// A classified route segment, borrowed from the registered path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Literal text matched by equality
    Static(&'a str),
    /// `:name`
    Param {
        /// Parameter name
        name: &'a str,
    },
    /// `:name(pattern)`
    Regex {
        /// Parameter name
        name: &'a str,
        /// Compiled constraint
        pattern: SegmentPattern,
    },
    /// `*`
    Wildcard,
}

/// Classify one segment of `path`.
///
/// `path` is only used to name the route in the returned error.
pub fn classify<'a>(path: &str, segment: &'a str) -> Result<Segment<'a>, RouteError> {
    classify_segment(segment).map_err(|kind| RouteError::syntax(path, kind))
}

fn classify_segment(segment: &str) -> Result<Segment<'_>, SyntaxErrorKind> {
    if segment.is_empty() {
        return Err(SyntaxErrorKind::EmptySegment);
    }
    if segment == "*" {
        return Ok(Segment::Wildcard);
    }
    let Some(rest) = segment.strip_prefix(':') else {
        return Ok(Segment::Static(segment));
    };

    let malformed = || SyntaxErrorKind::MalformedParam {
        segment: segment.to_string(),
    };

    match rest.find('(') {
        Some(open) => {
            let name = &rest[..open];
            let source = rest[open + 1..].strip_suffix(')').ok_or_else(malformed)?;
            if !is_param_name(name) {
                return Err(malformed());
            }
            let pattern = SegmentPattern::compile(segment, source)?;
            Ok(Segment::Regex { name, pattern })
        }
        None if is_param_name(rest) => Ok(Segment::Param { name: rest }),
        None => Err(malformed()),
    }
}

fn is_param_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}
