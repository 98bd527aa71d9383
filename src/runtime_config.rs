//! # Runtime Configuration Module
//!
//! Environment-driven settings for how the router reports lookups.
//!
//! ## Environment Variables
//!
//! ### `TRIEROUTER_SLOW_MATCH_US`
//!
//! Lookups slower than this many microseconds are logged at `WARN`.
//! Accepts decimal (`1000`) or hexadecimal (`0x3e8`).
//!
//! Default: `1000` (1 ms)
//!
//! ### `TRIEROUTER_LOG_MATCHES`
//!
//! When `false`, per-lookup `info`/`warn` events are suppressed; slow lookups
//! are still reported. Registration events are unaffected.
//!
//! Default: `true`
//!
//! ## Usage
//!
//! ```rust
//! use trierouter::runtime_config::RuntimeConfig;
//!
//! let config = RuntimeConfig::from_env();
//! println!("Slow match threshold: {:?}", config.slow_match_threshold);
//! ```

use std::env;
use std::time::Duration;

const DEFAULT_SLOW_MATCH_US: u64 = 1000;

/// Runtime configuration loaded from environment variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Lookups slower than this are logged as slow
    pub slow_match_threshold: Duration,
    /// Emit an event for every lookup
    pub log_matches: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            slow_match_threshold: Duration::from_micros(DEFAULT_SLOW_MATCH_US),
            log_matches: true,
        }
    }
}

impl RuntimeConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let slow_us = match lookup("TRIEROUTER_SLOW_MATCH_US") {
            Some(val) => parse_number(&val).unwrap_or(DEFAULT_SLOW_MATCH_US),
            None => DEFAULT_SLOW_MATCH_US,
        };
        let log_matches = lookup("TRIEROUTER_LOG_MATCHES")
            .and_then(|s| s.parse().ok())
            .unwrap_or(true);
        RuntimeConfig {
            slow_match_threshold: Duration::from_micros(slow_us),
            log_matches,
        }
    }
}

fn parse_number(val: &str) -> Option<u64> {
    match val.strip_prefix("0x") {
        Some(hex) => u64::from_str_radix(hex, 16).ok(),
        None => val.parse().ok(),
    }
}
