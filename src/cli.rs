// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

use crate::config::loader::default_snapshot_path;
use crate::types::TaskId;

/// Command-line arguments for `tododag`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "tododag",
    version,
    about = "Order, schedule and validate todo dependencies.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the snapshot file (TOML).
    ///
    /// Default: `Tododag.toml` in the current working directory.
    #[arg(long, global = true, value_name = "PATH", default_value_os_t = default_snapshot_path())]
    pub snapshot: PathBuf,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// Applies to every `tododag` module. If omitted, `TODODAG_LOG` (a level
    /// or `EnvFilter` directives) or `info` is used.
    #[arg(long, global = true, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Load and validate the snapshot, then print a summary.
    Check,

    /// Print task ids so that every dependency comes first.
    Order,

    /// Print earliest/latest start and finish plus slack for every task.
    Schedule,

    /// Print the tasks on the critical path.
    Critical,

    /// Print the dependency tree with critical tasks marked.
    Tree,

    /// Check whether a dependency list may be attached to a task.
    Validate {
        /// Existing task to update; omit for a task that does not exist yet.
        #[arg(long, value_name = "ID")]
        task: Option<TaskId>,

        /// Proposed dependency ids, comma separated.
        #[arg(long, value_name = "ID,...", value_delimiter = ',')]
        deps: Vec<TaskId>,

        /// Due date the task will have (YYYY-MM-DD).
        #[arg(long, value_name = "DATE")]
        due: Option<NaiveDate>,
    },

    /// List tasks that can be offered as dependencies.
    Available {
        /// Task being edited; it is left out of the list.
        #[arg(long, value_name = "ID")]
        exclude: Option<TaskId>,
    },
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
