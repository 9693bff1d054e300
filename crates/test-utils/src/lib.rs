pub mod builders;

use std::sync::Once;

use chrono::{DateTime, TimeZone, Utc};
use tododag::logging::{filter_directives, LOG_ENV};
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Initialise tracing for tests, captured per test by the harness.
///
/// Uses the same directives as the binary, so
/// `TODODAG_LOG=tododag::dag=trace cargo test -- --nocapture`
/// shows per-node steps of the graph passes only.
pub fn init_tracing() {
    INIT.call_once(|| {
        let env = std::env::var(LOG_ENV).ok();
        let filter = EnvFilter::try_new(filter_directives(None, env.as_deref()))
            .unwrap_or_else(|_| EnvFilter::new("warn,tododag=info"));

        // Another harness may already own the global subscriber.
        let _ = fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .try_init();
    });
}

/// Fixed anchor so schedule assertions do not depend on the wall clock.
pub fn fixed_anchor() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 1, 9, 0, 0)
        .single()
        .expect("valid anchor")
}
