//! # CLI Module
//!
//! Command-line tooling for route tables: check that a table registers
//! cleanly, try a request against it, or list what it registers.
//!
//! ## Commands
//!
//! ### `check`
//!
//! Load a route table and register every route, failing on the first syntax
//! error or conflict:
//!
//! ```bash
//! trierouter check --routes routes.yaml
//! ```
//!
//! ### `match`
//!
//! Resolve one request against the table and print the handler name and path
//! parameters. Exits with status 1 when no route matches:
//!
//! ```bash
//! trierouter match --routes routes.yaml GET /user/123
//! ```
//!
//! ### `dump`
//!
//! Print every registered route in registration order:
//!
//! ```bash
//! trierouter dump --routes routes.yaml
//! ```
//!
//! ## Logging
//!
//! `--log-level` (or `TRIEROUTER_LOG_LEVEL`) controls the level of the
//! router's structured events, which are written to stdout as JSON unless
//! `TRIEROUTER_LOG_FORMAT=pretty`.

mod commands;


pub use commands::{run_cli, Cli, Commands};
