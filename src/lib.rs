// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod engine;
pub mod errors;
pub mod logging;
pub mod types;

use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, TimeDelta, Utc};
use tracing::{debug, info};

use crate::cli::{CliArgs, Command};
use crate::config::loader::load_and_validate;
use crate::dag::DagGraph;
use crate::engine::{DependencyProposal, GraphEngine, ScheduleReport};
use crate::errors::TododagError;
use crate::types::TaskId;

/// High-level entry point used by `main.rs`.
///
/// Loads and validates the snapshot file, then runs the requested command
/// against it, printing to stdout.
pub fn run(args: CliArgs) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with_output(args, &mut out)
}

/// Same as [`run`], writing command output to `out`.
pub fn run_with_output(args: CliArgs, out: &mut impl Write) -> Result<()> {
    let snapshot = load_and_validate(&args.snapshot)?;
    let graph = snapshot.graph();
    let engine = GraphEngine::new(snapshot.anchor());

    info!(
        path = %args.snapshot.display(),
        tasks = graph.len(),
        edges = graph.edge_count(),
        anchor = %engine.anchor(),
        "snapshot loaded"
    );

    match args.command {
        Command::Check => {
            writeln!(
                out,
                "ok: {} tasks, {} dependencies, no cycles",
                graph.len(),
                graph.edge_count()
            )?;
        }
        Command::Order => {
            for id in engine.topological_order(&graph) {
                writeln!(out, "{id}\t{}", title_of(&graph, id))?;
            }
        }
        Command::Schedule => print_schedule(&engine.report(&graph), out)?,
        Command::Critical => {
            let critical = engine.critical_path(&graph);
            writeln!(out, "critical path ({} tasks):", critical.len())?;
            for id in critical {
                writeln!(out, "  {id}\t{}", title_of(&graph, id))?;
            }
        }
        Command::Tree => print_tree(&engine.report(&graph), out)?,
        Command::Validate { task, deps, due } => {
            let mut proposal = DependencyProposal::new(task, deps);
            proposal.due = due;
            engine
                .validate(&proposal, &graph)
                .map_err(TododagError::from)?;
            writeln!(out, "valid")?;
        }
        Command::Available { exclude } => {
            for task in graph.available_dependencies(exclude) {
                writeln!(
                    out,
                    "{}\t{}\tdue {}\t{}",
                    task.id,
                    task.title,
                    task.due,
                    format_days(i64::from(task.duration))
                )?;
            }
        }
    }

    debug!("command complete");
    Ok(())
}

fn title_of(graph: &DagGraph, id: TaskId) -> &str {
    graph.task(id).map(|t| t.title.as_str()).unwrap_or("?")
}

fn print_schedule(report: &ScheduleReport, out: &mut impl Write) -> Result<()> {
    writeln!(out, "anchor:         {}", format_instant(report.anchor))?;
    writeln!(out, "project finish: {}", format_instant(report.project_finish))?;
    writeln!(out)?;
    writeln!(
        out,
        "{:>5}  {:<24} {:>4}  {:<10}  {:<10}  {:<10}  {:<10}  {:>6}",
        "id", "title", "days", "ES", "EF", "LS", "LF", "slack"
    )?;
    for row in &report.rows {
        writeln!(
            out,
            "{:>5}  {:<24} {:>4}  {:<10}  {:<10}  {:<10}  {:<10}  {:>6}{}",
            row.id,
            row.title,
            row.duration,
            format_instant(row.earliest_start),
            format_instant(row.earliest_finish),
            format_instant(row.latest_start),
            format_instant(row.latest_finish),
            format_slack(row.slack),
            if row.critical { "  *" } else { "" }
        )?;
    }
    Ok(())
}

fn print_tree(report: &ScheduleReport, out: &mut impl Write) -> Result<()> {
    for row in &report.rows {
        let indent = "  ".repeat(row.depth);
        let marker = if row.critical { " [critical]" } else { "" };
        writeln!(out, "{indent}{} ({}){marker}", row.title, row.id)?;
        writeln!(
            out,
            "{indent}  due {} - {}",
            row.due.format("%b %-d"),
            format_days(i64::from(row.duration))
        )?;
        if !row.depends_on.is_empty() {
            writeln!(out, "{indent}  depends on: {}", row.depends_on.join(", "))?;
        }
    }

    let critical = report.critical_rows().count();
    if critical > 0 {
        writeln!(out)?;
        writeln!(
            out,
            "critical path ({critical} tasks): these cannot slip without moving the project finish"
        )?;
    }
    Ok(())
}

fn format_instant(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d").to_string()
}

fn format_slack(slack: TimeDelta) -> String {
    let hours = slack.num_hours();
    if hours % 24 == 0 {
        format!("{}d", hours / 24)
    } else {
        format!("{hours}h")
    }
}

fn format_days(n: i64) -> String {
    if n == 1 {
        "1 day".to_string()
    } else {
        format!("{n} days")
    }
}
