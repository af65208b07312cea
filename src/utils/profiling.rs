use tracing_chrome::{ChromeLayerBuilder, FlushGuard};
use tracing_subscriber::{self, prelude::*, EnvFilter};

/// Installs the global tracing subscriber: compact log lines filtered by `RUST_LOG`
/// (default `info`), plus a Chrome trace written to `chrome_trace_file` when one is given.
/// Traces can be viewed in https://ui.perfetto.dev/
///
/// The returned guard flushes the trace file when dropped, so keep it alive until
/// profiling is done. Returns `None` without a trace file, or if a global subscriber
/// was already installed.
pub fn setup_tracing(chrome_trace_file: Option<&str>) -> Option<FlushGuard> {
    let log_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let log_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_filter(log_filter);

    let (chrome_layer, guard) = match chrome_trace_file {
        Some(file) => {
            let (layer, guard) = ChromeLayerBuilder::new().file(file).include_args(true).build();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(log_layer)
        .with(chrome_layer)
        .try_init()
        .ok()?;
    if let Some(file) = chrome_trace_file {
        tracing::info!(file, "Running tracing-chrome");
    }
    guard
}
