use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding an explicit filter, e.g. `MUELLER_LOG=mueller=debug`
pub const LOG_ENV_VAR: &str = "MUELLER_LOG";

static INIT: Once = Once::new();

/// Filter directive for a `-v` count: warn, info, debug, then trace.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "mueller=warn",
        1 => "mueller=info",
        2 => "mueller=debug",
        _ => "mueller=trace",
    }
}

/// Install the global subscriber.
///
/// `MUELLER_LOG` wins over `verbosity` when set and valid. Calling this more
/// than once is a no-op.
pub fn init_tracing(verbosity: u8) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .with(filter)
            .try_init();
    });
}
