// tests/snapshot_loading.rs
mod common;
use crate::common::init_tracing;

use std::collections::BTreeSet;
use std::error::Error;
use std::io::Write;
use std::path::PathBuf;

use chrono::{NaiveDate, TimeDelta};
use tempfile::NamedTempFile;
use tododag::config::validate::MAX_DURATION_DAYS;
use tododag::config::{load_and_validate, parse_str, SnapshotFile};
use tododag::dag::{analyze, topological_order};
use tododag::errors::TododagError;
use tododag::types::ScheduleAnchor;

type TestResult = Result<(), Box<dyn Error>>;

fn load_str(contents: &str) -> tododag::errors::Result<SnapshotFile> {
    let mut file = NamedTempFile::new()?;
    write!(file, "{contents}")?;
    load_and_validate(file.path())
}

#[test]
fn demo_snapshot_loads_and_schedules() -> TestResult {
    init_tracing();
    let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let snapshot = load_and_validate(manifest.join("demos/launch.toml"))?;

    let start = NaiveDate::from_ymd_opt(2026, 10, 1).ok_or("bad date")?;
    assert_eq!(snapshot.anchor(), ScheduleAnchor::from_date(start));
    assert_eq!(snapshot.tasks.len(), 5);
    assert_eq!(snapshot.tasks[&5].duration, 1);
    assert!(snapshot.tasks[&5].image.is_some());

    let graph = snapshot.graph();
    assert_eq!(graph.edge_count(), 5);
    assert_eq!(topological_order(&graph), vec![1, 2, 3, 4, 5]);

    let anchor = snapshot.anchor().resolve();
    let analysis = analyze(&graph, anchor);
    assert_eq!(analysis.project_finish, anchor + TimeDelta::days(11));
    assert_eq!(analysis.critical_tasks(), BTreeSet::from([1, 2, 4, 5]));
    Ok(())
}

#[test]
fn missing_project_start_anchors_at_now() -> TestResult {
    init_tracing();
    let snapshot = load_str(
        r#"
[task.1]
title = "Only task"
due = "2026-11-01"
"#,
    )?;
    assert_eq!(snapshot.anchor(), ScheduleAnchor::Now);
    Ok(())
}

#[test]
fn cycle_returns_structured_error() {
    init_tracing();
    let result = load_str(
        r#"
[task.1]
title = "A"
due = "2026-11-01"
after = [2]

[task.2]
title = "B"
due = "2026-11-02"
after = [1]
"#,
    );

    match result {
        Err(TododagError::DagCycle(msg)) => {
            assert!(msg.contains("cycle detected"));
            assert!(msg.contains('1') || msg.contains('2'));
        }
        Err(e) => panic!("Expected DagCycle error, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn unknown_dependency_returns_config_error() {
    init_tracing();
    let result = load_str(
        r#"
[task.1]
title = "A"
due = "2026-11-01"
after = [9]
"#,
    );

    match result {
        Err(TododagError::ConfigError(msg)) => {
            assert!(msg.contains("unknown dependency"));
            assert!(msg.contains('9'));
        }
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn self_dependency_returns_config_error() {
    init_tracing();
    let result = load_str(
        r#"
[task.4]
title = "Loop"
due = "2026-11-01"
after = [4]
"#,
    );
    assert!(matches!(result, Err(TododagError::ConfigError(msg)) if msg.contains("itself")));
}

#[test]
fn non_integer_and_duplicate_ids_are_rejected() {
    init_tracing();
    let result = load_str(
        r#"
[task.first]
title = "A"
due = "2026-11-01"
"#,
    );
    assert!(matches!(result, Err(TododagError::ConfigError(msg)) if msg.contains("not an integer")));

    let result = load_str(
        r#"
[task.1]
title = "A"
due = "2026-11-01"

[task.01]
title = "B"
due = "2026-11-01"
"#,
    );
    assert!(matches!(result, Err(TododagError::ConfigError(msg)) if msg.contains("more than once")));
}

#[test]
fn empty_title_and_zero_duration_are_rejected() {
    init_tracing();
    let result = load_str(
        r#"
[task.1]
title = "   "
due = "2026-11-01"
"#,
    );
    assert!(matches!(result, Err(TododagError::ConfigError(msg)) if msg.contains("title")));

    let result = load_str(
        r#"
[task.1]
title = "A"
due = "2026-11-01"
duration = 0
"#,
    );
    assert!(matches!(result, Err(TododagError::ConfigError(msg)) if msg.contains("duration")));
}

#[test]
fn duration_beyond_the_date_range_is_rejected() {
    init_tracing();
    let result = load_str(
        r#"
[task.1]
title = "Forever"
due = "2026-11-01"
duration = 4000000000
"#,
    );
    match result {
        Err(TododagError::ConfigError(msg)) => {
            assert!(msg.contains("task 1"), "unexpected message: {msg}");
            assert!(msg.contains(&MAX_DURATION_DAYS.to_string()), "unexpected message: {msg}");
        }
        other => panic!("Expected ConfigError, got: {other:?}"),
    }

    let at_limit = format!(
        "[task.1]\ntitle = \"Long\"\ndue = \"2026-11-01\"\nduration = {MAX_DURATION_DAYS}\n"
    );
    assert!(load_str(&at_limit).is_ok());
}

#[test]
fn empty_snapshot_is_rejected() {
    init_tracing();
    let result = load_str("[config]\n");
    assert!(matches!(result, Err(TododagError::ConfigError(msg)) if msg.contains("at least one")));
}

#[test]
fn malformed_toml_and_dates_are_toml_errors() -> TestResult {
    init_tracing();
    assert!(matches!(parse_str("[task.1\n"), Err(TododagError::TomlError(_))));
    assert!(matches!(
        parse_str("[task.1]\ntitle = \"A\"\ndue = \"next week\"\n"),
        Err(TododagError::TomlError(_))
    ));

    let raw = parse_str("[task.3]\ntitle = \"A\"\ndue = \"2026-11-01\"\n")?;
    assert_eq!(raw.task["3"].duration, 1);
    assert!(raw.task["3"].after.is_empty());
    Ok(())
}

#[test]
fn missing_file_is_an_io_error() {
    init_tracing();
    let result = load_and_validate("/definitely/not/here/Tododag.toml");
    assert!(matches!(result, Err(TododagError::IoError(_))));
}
