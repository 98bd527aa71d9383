//! # trierouter
//!
//! **trierouter** maps an `(HTTP method, URL path)` pair to a previously
//! registered handler using one trie per method, extracting path parameters
//! along the way.
//!
//! ## Overview
//!
//! Routes are registered once at startup; every ambiguous or duplicate route
//! is rejected there, so request-time matching is a single walk down the tree
//! with no backtracking and no tie-breaking.
//!
//! | Segment      | Matches                                | Binds  |
//! |--------------|----------------------------------------|--------|
//! | `home`       | exactly `home`                         | -      |
//! | `:id(\d+)`   | a segment matching `\d+` in full       | `id`   |
//! | `:id`        | any non-empty segment                  | `id`   |
//! | `*`          | this and every following segment       | -      |
//!
//! At each position a request segment is tried against the static child,
//! then the regex child, then the param child, then the wildcard child.
//!
//! ## Architecture
//!
//! - **[`router`]** - Path validation, segment classification, the route trees
//!   and the [`Router`](router::Router) facade
//! - **[`table`]** - Route tables loaded from YAML, TOML or JSON
//! - **[`runtime_config`]** - Environment-driven lookup reporting settings
//! - **[`otel`]** - Structured logging setup
//! - **[`cli`]** - The `trierouter` command-line tool
//!
//! ## Example
//!
//! ```rust
//! use http::Method;
//! use trierouter::router::{Router, RouteError};
//!
//! let mut router = Router::new();
//! router.get("/user/home", "home").unwrap();
//! router.get("/user/:id", "get_user").unwrap();
//!
//! let m = router.lookup(&Method::GET, "/user/42").unwrap();
//! assert_eq!(*m.handler, "get_user");
//! assert_eq!(m.get_path_param("id"), Some("42"));
//!
//! // `:id` and `:name` at the same position would be ambiguous
//! let err = router.get("/user/:name", "by_name").unwrap_err();
//! assert!(matches!(err, RouteError::Conflict { .. }));
//! ```
//!
//! ## Concurrency
//!
//! Registration needs `&mut Router`; lookups need only `&Router`. Finish all
//! registrations, then share the router (e.g. in an `Arc`) with request
//! workers. No locks are taken on the lookup path.

pub mod cli;
pub mod otel;
pub mod router;
pub mod runtime_config;
pub mod table;

pub use router::{RouteError, RouteMatch, Router};
pub use table::{load_router, load_table, RouteTable};
