// 📋 Diagnostics - tracing subscriber setup
// Results go to stdout; diagnostic events go to stderr

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber
///
/// Reads `RUST_LOG`, defaults to `info` so the accumulator state emitted by
/// `AmountAccumulator::value` is visible.
///
/// ```bash
/// RUST_LOG=amount_filter=debug amount-filter filter
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
