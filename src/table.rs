//! # Route Tables
//!
//! Declarative route configuration. A route table lists `(method, path,
//! handler)` triples and can be written in YAML, TOML or JSON:
//!
//! ```yaml
//! routes:
//!   - { method: GET,  path: "/",                handler: index }
//!   - { method: GET,  path: "/user/:id",        handler: get_user }
//!   - { method: POST, path: "/order/:no(\\d+)", handler: update_order }
//! ```
//!
//! Handler names are resolved to handler values by the caller when the table
//! is built into a [`Router`], so the table stays independent of whatever the
//! HTTP server uses as a handler type.

use anyhow::{anyhow, bail, Context, Result};
use http::Method;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::router::Router;
use crate::runtime_config::RuntimeConfig;

/// One route in a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSpec {
    /// HTTP method, e.g. `GET` or an extension method like `PURGE`
    pub method: String,
    /// Route path, e.g. `/user/:id`
    pub path: String,
    /// Name the caller resolves to a handler
    pub handler: String,
}

/// A list of routes to register, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteTable {
    #[serde(default)]
    pub routes: Vec<RouteSpec>,
}

impl RouteTable {
    /// Parse a table from text in the format implied by `file_name`'s extension:
    /// `.yaml`/`.yml`, `.toml`, anything else as JSON.
    pub fn parse(file_name: &str, content: &str) -> Result<Self> {
        let table: RouteTable = if file_name.ends_with(".yaml") || file_name.ends_with(".yml") {
            serde_yaml::from_str(content)?
        } else if file_name.ends_with(".toml") {
            toml::from_str(content)?
        } else {
            serde_json::from_str(content)?
        };
        Ok(table)
    }

    /// Register every route, resolving handler names through `resolve`.
    ///
    /// Stops at the first unknown method, unresolved handler, or registration
    /// error, naming the offending entry.
    pub fn build<H, F>(&self, config: RuntimeConfig, mut resolve: F) -> Result<Router<H>>
    where
        F: FnMut(&str) -> Option<H>,
    {
        let mut router = Router::with_config(config);
        for (index, spec) in self.routes.iter().enumerate() {
            let method = parse_method(&spec.method)
                .with_context(|| format!("route #{} ({} {})", index, spec.method, spec.path))?;
            let Some(handler) = resolve(&spec.handler) else {
                bail!(
                    "route #{} ({} {}): unknown handler '{}'",
                    index,
                    spec.method,
                    spec.path,
                    spec.handler
                );
            };
            router
                .register(method, &spec.path, handler)
                .with_context(|| format!("route #{} ({} {})", index, spec.method, spec.path))?;
        }

        info!(routes_count = router.len(), "Routing table loaded");
        Ok(router)
    }

    /// Build a router whose handlers are the handler names themselves.
    pub fn into_named_router(self, config: RuntimeConfig) -> Result<Router<String>> {
        self.build(config, |name| Some(name.to_string()))
    }
}

/// Read and parse a route table file.
pub fn load_table(file_path: &str) -> Result<RouteTable> {
    let content = std::fs::read_to_string(file_path)
        .with_context(|| format!("failed to read route table {}", file_path))?;
    RouteTable::parse(file_path, &content)
        .with_context(|| format!("failed to parse route table {}", file_path))
}

/// Read a route table file and build a name-keyed router from it.
pub fn load_router(file_path: impl AsRef<Path>, config: RuntimeConfig) -> Result<Router<String>> {
    let file_path = file_path.as_ref();
    let file_str = file_path
        .to_str()
        .ok_or_else(|| anyhow!("route table path is not valid UTF-8: {}", file_path.display()))?;
    load_table(file_str)?.into_named_router(config)
}

/// Parse a method name. Names are upper-cased first, so `get` is `GET`.
pub fn parse_method(name: &str) -> Result<Method> {
    let upper = name.to_ascii_uppercase();
    Method::from_bytes(upper.as_bytes()).map_err(|e| anyhow!("invalid HTTP method '{}': {}", name, e))
}
