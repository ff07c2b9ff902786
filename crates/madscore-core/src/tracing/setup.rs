//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Initialize the madscore tracing/logging system.
///
/// Reads the `MADSCORE_LOG` environment variable for per-target levels.
/// Format: `MADSCORE_LOG=madscore_analysis=debug,madscore_core=warn`
///
/// Falls back to `madscore=info` if `MADSCORE_LOG` is not set or is invalid.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    install(filter);
}

/// Initialize tracing with an explicit filter directive, ignoring the
/// environment. Shares the once-guard with [`init_tracing`].
pub fn init_tracing_with_filter(filter: &str) {
    install(EnvFilter::new(filter));
}

fn install(filter: EnvFilter) {
    INIT.call_once(|| {
        // A host may already own the global subscriber; keep theirs.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
