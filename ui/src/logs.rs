//! Logging to the javascript console.

use tracing_subscriber::{EnvFilter, prelude::*};
use tracing_web::MakeWebConsoleWriter;

use crate::utils::is_dev_mode;

/// Initialize logging
pub fn init_logging() {
    // Request and discard traces from the list views are only useful
    // against a local backend.
    let env_filter = if is_dev_mode() {
        EnvFilter::new("warn,ui=debug,list_view=debug,payloads=debug")
    } else {
        EnvFilter::new("error,ui=info,list_view=warn")
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_line_number(true)
        .with_ansi(false) // Only partially supported across browsers
        .without_time() // std::time is not available in browsers
        .with_writer(MakeWebConsoleWriter::new().with_pretty_level())
        .with_level(false);

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();

    tracing::info!("Initialized logs");
}
