use std::fs::File;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

/// Log destination. The terminal belongs to the TUI, so logs go to a file
/// in the working directory instead of stderr.
pub const LOG_FILE: &str = "adagio.log";

/// Install the global tracing subscriber. Filter comes from `ADAGIO_LOG`
/// (e.g. `ADAGIO_LOG=debug`), defaulting to `info`.
pub fn init() {
    let Ok(file) = File::create(LOG_FILE) else {
        // No writable working directory; run without logs.
        return;
    };

    let filter = EnvFilter::try_from_env("ADAGIO_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init();
}
