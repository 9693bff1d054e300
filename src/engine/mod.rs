// src/engine/mod.rs

//! Caller-facing layer of the dependency engine.
//!
//! - [`core`] wraps the graph algorithms behind a stateless [`GraphEngine`]
//!   configured with a schedule anchor.
//! - [`validation`] runs the checks a proposed dependency list must pass
//!   before the caller stores it.
//! - [`report`] assembles per-task schedule rows for display.

pub mod core;
pub mod report;
pub mod validation;

pub use self::core::GraphEngine;
pub use report::{ReportRow, ScheduleReport};
pub use validation::{validate_dependencies, DependencyProposal};
