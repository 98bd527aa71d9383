//! Router facade - registration at startup, lookup on the request path.

use http::Method;
use std::time::Instant;
use tracing::{debug, error, info, warn};

use super::error::RouteError;
use super::params::Params;
use super::tree::RouteTree;
use crate::runtime_config::RuntimeConfig;

/// Result of successfully matching a request to a registered route
#[derive(Debug, Clone)]
pub struct RouteMatch<'a, H> {
    /// The handler registered for the route, returned verbatim
    pub handler: &'a H,
    /// Registered path of the route (e.g. `/user/:id`)
    pub route_pattern: &'a str,
    /// Path parameters extracted from the URL (e.g. `:id` → `{"id": "123"}`)
    pub params: Params,
}

impl<'a, H> RouteMatch<'a, H> {
    /// Get a path parameter by name
    #[inline]
    #[must_use]
    pub fn get_path_param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }
}

/// A registered `(method, path)` pair, kept in registration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub method: Method,
    pub path: String,
}

/// Router that maps `(method, path)` to an opaque handler value.
///
/// The router stores `H` and hands it back on lookup; it never calls or
/// inspects it. Build the router with [`register`](Router::register) (or the
/// verb helpers) during startup, then share it read-only: `lookup` takes
/// `&self`, so an `Arc<Router<H>>` serves any number of threads without
/// locking as long as `H: Sync`.
///
/// # Example
///
/// ```rust
/// use http::Method;
/// use trierouter::router::Router;
///
/// let mut router = Router::new();
/// router.get("/user/:id", "get_user").unwrap();
///
/// let m = router.lookup(&Method::GET, "/user/123").unwrap();
/// assert_eq!(*m.handler, "get_user");
/// assert_eq!(m.get_path_param("id"), Some("123"));
/// assert!(router.lookup(&Method::POST, "/user/123").is_none());
/// ```
#[derive(Debug)]
pub struct Router<H> {
    tree: RouteTree<H>,
    routes: Vec<RouteEntry>,
    config: RuntimeConfig,
}

impl<H> Default for Router<H> {
    fn default() -> Self {
        Self::with_config(RuntimeConfig::default())
    }
}

impl<H> Router<H> {
    /// An empty router with default runtime settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty router with the given runtime settings.
    #[must_use]
    pub fn with_config(config: RuntimeConfig) -> Self {
        Self {
            tree: RouteTree::new(),
            routes: Vec::new(),
            config,
        }
    }

    /// Register `handler` for `method` and `path`.
    ///
    /// # Errors
    ///
    /// - [`RouteError::Syntax`] for a malformed path or segment
    /// - [`RouteError::Conflict`] for a duplicate route or an ambiguous
    ///   param / regex / wildcard combination at one position
    ///
    /// Both are configuration errors and should abort startup.
    pub fn register(&mut self, method: Method, path: &str, handler: H) -> Result<(), RouteError> {
        match self.tree.add_route(method.clone(), path, handler) {
            Ok(()) => {
                debug!(method = %method, path = %path, "Route registered");
                self.routes.push(RouteEntry {
                    method,
                    path: path.to_string(),
                });
                Ok(())
            }
            Err(e) => {
                error!(method = %method, path = %path, error = %e, "Route registration failed");
                Err(e)
            }
        }
    }

    /// Register a `GET` route.
    pub fn get(&mut self, path: &str, handler: H) -> Result<(), RouteError> {
        self.register(Method::GET, path, handler)
    }

    /// Register a `POST` route.
    pub fn post(&mut self, path: &str, handler: H) -> Result<(), RouteError> {
        self.register(Method::POST, path, handler)
    }

    /// Register a `PUT` route.
    pub fn put(&mut self, path: &str, handler: H) -> Result<(), RouteError> {
        self.register(Method::PUT, path, handler)
    }

    /// Register a `DELETE` route.
    pub fn delete(&mut self, path: &str, handler: H) -> Result<(), RouteError> {
        self.register(Method::DELETE, path, handler)
    }

    /// Register a `PATCH` route.
    pub fn patch(&mut self, path: &str, handler: H) -> Result<(), RouteError> {
        self.register(Method::PATCH, path, handler)
    }

    /// Register a `HEAD` route.
    pub fn head(&mut self, path: &str, handler: H) -> Result<(), RouteError> {
        self.register(Method::HEAD, path, handler)
    }

    /// Register an `OPTIONS` route.
    pub fn options(&mut self, path: &str, handler: H) -> Result<(), RouteError> {
        self.register(Method::OPTIONS, path, handler)
    }

    /// Register a `TRACE` route.
    pub fn trace(&mut self, path: &str, handler: H) -> Result<(), RouteError> {
        self.register(Method::TRACE, path, handler)
    }

    /// Match a request to a registered route
    ///
    /// # Returns
    ///
    /// * `Some(RouteMatch)` - If a route ends exactly at the walked node
    /// * `None` - If the method has no routes, the walk fails, or the walk
    ///   stops on a node without a handler (results in 404)
    #[must_use]
    pub fn lookup(&self, method: &Method, path: &str) -> Option<RouteMatch<'_, H>> {
        debug!(method = %method, path = %path, "Route match attempt");

        let match_start = Instant::now();
        let result = self.tree.find_route(method, path).and_then(|info| {
            let node = info.node();
            let handler = node.handler()?;
            let route_pattern = node.route().unwrap_or_default();
            Some(RouteMatch {
                handler,
                route_pattern,
                params: info.into_params(),
            })
        });
        let match_duration = match_start.elapsed();

        match &result {
            Some(m) if match_duration > self.config.slow_match_threshold => {
                warn!(
                    method = %method,
                    path = %path,
                    route_pattern = %m.route_pattern,
                    path_params = ?m.params,
                    duration_us = match_duration.as_micros(),
                    "Slow route matching detected"
                );
            }
            Some(m) if self.config.log_matches => {
                info!(
                    method = %method,
                    path = %path,
                    route_pattern = %m.route_pattern,
                    path_params = ?m.params,
                    duration_us = match_duration.as_micros(),
                    "Route matched"
                );
            }
            None if self.config.log_matches => {
                warn!(
                    method = %method,
                    path = %path,
                    duration_us = match_duration.as_micros(),
                    "No route matched"
                );
            }
            _ => {}
        }

        result
    }

    /// Registered routes in registration order.
    #[must_use]
    pub fn routes(&self) -> &[RouteEntry] {
        &self.routes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// The underlying per-method trees.
    #[must_use]
    pub fn tree(&self) -> &RouteTree<H> {
        &self.tree
    }
}
