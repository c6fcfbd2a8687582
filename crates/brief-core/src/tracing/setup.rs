//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the brief engine's tracing/logging system.
///
/// Reads the `BRIEF_LOG` environment variable for per-module log levels.
/// Format: `BRIEF_LOG=brief_analysis=debug,brief_core=warn`
///
/// Falls back to `brief=info` if `BRIEF_LOG` is not set or is invalid.
///
/// Calling this more than once is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("BRIEF_LOG")
            .unwrap_or_else(|_| EnvFilter::new("brief=info"));

        // A host application may already own the global subscriber.
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
