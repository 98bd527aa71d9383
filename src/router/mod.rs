//! # Router Module
//!
//! Trie-based request routing: an `(HTTP method, path)` pair is mapped to a
//! previously registered handler, and path parameters are extracted on the way.
//!
//! ## Architecture
//!
//! The router works in two phases:
//!
//! 1. **Registration**: at startup, every route path is validated, split into
//!    segments and each segment is classified as static, regex (`:id(\d+)`),
//!    param (`:id`) or wildcard (`*`). Segments are inserted into one trie per
//!    method. Any registration that would make matching ambiguous is rejected
//!    here with a [`RouteError`].
//!
//! 2. **Matching**: for each request the router walks the method's trie once,
//!    one segment at a time, preferring static over regex over param over
//!    wildcard children, and never backtracks.
//!
//! ## Example
//!
//! ```rust
//! use http::Method;
//! use trierouter::router::Router;
//!
//! let mut router = Router::new();
//! router.get("/", "index").unwrap();
//! router.get("/user/:id", "get_user").unwrap();
//! router.get(r"/order/:no(\d+)", "get_order").unwrap();
//! router.get("/static/*", "files").unwrap();
//!
//! let m = router.lookup(&Method::GET, "/order/42").unwrap();
//! assert_eq!(*m.handler, "get_order");
//! assert_eq!(m.get_path_param("no"), Some("42"));
//!
//! assert!(router.lookup(&Method::GET, "/order/abc").is_none());
//! assert_eq!(*router.lookup(&Method::GET, "/static/css/a.css").unwrap().handler, "files");
//! ```
//!
//! ## Performance
//!
//! Both registration and lookup are O(number of segments). A regex segment
//! costs one pattern match per visit; params are stored inline for up to
//! [`MAX_INLINE_PARAMS`] names.

mod core;
mod error;
mod node;
mod params;
mod segment;
mod tree;
mod validate;
#[cfg(test)]
mod tests;

pub use self::core::{RouteEntry, RouteMatch, Router};
pub use error::{ConflictKind, RouteError, SyntaxErrorKind};
pub use node::{Node, NodeKind};
pub use params::{ParamVec, Params, MAX_INLINE_PARAMS};
pub use segment::{classify, Segment, SegmentPattern};
pub use tree::{MatchInfo, RouteTree};
pub use validate::validate_path;
