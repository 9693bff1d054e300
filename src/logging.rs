// src/logging.rs

//! Logging setup for `tododag` using `tracing` + an `EnvFilter`.
//!
//! Filter directives are chosen in this order:
//! 1. `--log-level` applies the level to every `tododag` module;
//! 2. `TODODAG_LOG`: a bare level (e.g. "debug") is scoped to `tododag`,
//!    anything else is used as `EnvFilter` directives, so single modules can
//!    be turned up, e.g. `tododag::dag::critical=trace,tododag::dag::graph=warn`;
//! 3. `tododag=info`.
//!
//! Other crates only log at `warn`. Logs are sent to STDERR so that stdout
//! carries only command output.

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, EnvFilter};

use crate::cli::LogLevel;

/// Environment variable read when `--log-level` is not given.
pub const LOG_ENV: &str = "TODODAG_LOG";

const CRATE_TARGET: &str = "tododag";
const OTHER_CRATES: &str = "warn";

/// Initialise global logging subscriber.
///
/// Call once at startup; a second call fails instead of panicking.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let env = std::env::var(LOG_ENV).ok();
    let filter = env_filter(cli_level, env.as_deref())?;

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise logging: {e}"))
}

/// Build the filter for the given CLI level and `TODODAG_LOG` value.
pub fn env_filter(cli_level: Option<LogLevel>, env: Option<&str>) -> Result<EnvFilter> {
    let directives = filter_directives(cli_level, env);
    EnvFilter::try_new(&directives)
        .with_context(|| format!("invalid {LOG_ENV} filter: {directives}"))
}

/// Directive string the subscriber filters with.
pub fn filter_directives(cli_level: Option<LogLevel>, env: Option<&str>) -> String {
    if let Some(level) = cli_level {
        return scoped(level_name(level));
    }
    match env.map(str::trim).filter(|s| !s.is_empty()) {
        Some(s) => match parse_level_str(s) {
            Some(level) => scoped(level),
            None => format!("{OTHER_CRATES},{s}"),
        },
        None => scoped("info"),
    }
}

fn scoped(level: &str) -> String {
    format!("{OTHER_CRATES},{CRATE_TARGET}={level}")
}

fn level_name(lvl: LogLevel) -> &'static str {
    match lvl {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    }
}

fn parse_level_str(s: &str) -> Option<&'static str> {
    match s.to_lowercase().as_str() {
        "error" => Some("error"),
        "warn" | "warning" => Some("warn"),
        "info" => Some("info"),
        "debug" => Some("debug"),
        "trace" => Some("trace"),
        _ => None,
    }
}
