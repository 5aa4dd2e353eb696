//! Opt-in structured tracing on stderr.
//!
//! Nothing is installed unless `STREAMLINE_LOG` holds an EnvFilter directive
//! (e.g. `debug` or `streamline_docker=trace`), so the default operator output
//! stays limited to the prefixed diagnostic lines.

use std::env;

use once_cell::sync::OnceCell;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

static INIT: OnceCell<bool> = OnceCell::new();

fn log_filter_from_env() -> Option<String> {
    env::var("STREAMLINE_LOG")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Install the stderr subscriber once. Returns whether tracing is active.
pub fn telemetry_init() -> bool {
    *INIT.get_or_init(|| {
        let Some(directives) = log_filter_from_env() else {
            return false;
        };
        let filter = match EnvFilter::try_new(&directives) {
            Ok(f) => f,
            Err(e) => {
                eprintln!("streamline: telemetry: invalid STREAMLINE_LOG '{directives}': {e}");
                return false;
            }
        };
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true);
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .try_init()
            .is_ok()
    })
}
