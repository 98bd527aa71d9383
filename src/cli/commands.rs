use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

use crate::runtime_config::RuntimeConfig;
use crate::table::{load_router, parse_method};

/// Command-line interface for trierouter
#[derive(Parser)]
#[command(name = "trierouter")]
#[command(about = "Check and query trie route tables", long_about = None)]
pub struct Cli {
    /// Log level: trace/debug/info/warn/error
    #[arg(long, global = true, env = "TRIEROUTER_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Register every route in a table and report conflicts
    Check {
        /// Path to the route table (YAML, TOML or JSON)
        #[arg(short, long)]
        routes: PathBuf,
    },
    /// Resolve a request against a route table
    Match {
        /// Path to the route table (YAML, TOML or JSON)
        #[arg(short, long)]
        routes: PathBuf,

        /// HTTP method of the request
        method: String,

        /// Request path
        path: String,
    },
    /// Print every registered route
    Dump {
        /// Path to the route table (YAML, TOML or JSON)
        #[arg(short, long)]
        routes: PathBuf,
    },
}

/// Run a parsed command, writing results to `out`.
///
/// Returns `Ok(false)` when the command ran but found nothing (a request with
/// no matching route). Errors loading or registering the table are returned.
pub fn run_cli(cli: &Cli, out: &mut impl Write) -> Result<bool> {
    let config = RuntimeConfig::from_env();
    match &cli.command {
        Commands::Check { routes } => {
            let router = load_router(routes, config)?;
            writeln!(out, "ok: {} routes registered", router.len())?;
            Ok(true)
        }
        Commands::Match {
            routes,
            method,
            path,
        } => {
            let router = load_router(routes, config)?;
            let method = parse_method(method)?;
            match router.lookup(&method, path) {
                Some(m) => {
                    writeln!(out, "{} {} -> {}", method, m.route_pattern, m.handler)?;
                    for (name, value) in m.params.iter() {
                        writeln!(out, "  {} = {}", name, value)?;
                    }
                    Ok(true)
                }
                None => {
                    writeln!(out, "{} {} -> no route", method, path)?;
                    Ok(false)
                }
            }
        }
        Commands::Dump { routes } => {
            let router = load_router(routes, config)?;
            for entry in router.routes() {
                writeln!(out, "{} {}", entry.method, entry.path)?;
            }
            Ok(true)
        }
    }
}
