/// Install the global tracing subscriber.
///
/// Everything goes to stderr: in stdio mode stdout carries MCP JSON-RPC
/// frames and must stay clean. Level defaults to `info`, overridable via
/// `RUST_LOG`.
pub fn init() {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Emit a counter/latency observation as a structured log line. Stands in
/// for a metrics exporter, which this crate does not carry.
pub fn log_metric(tool: &str, metric: &str, value: f64) {
    tracing::info!(tool = tool, metric = metric, value = value, "metric");
}
