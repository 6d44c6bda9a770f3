use tracing_subscriber::{EnvFilter, FmtSubscriber, fmt::format::FmtSpan};

/// Install a test writer subscriber filtered by `RUST_LOG`.
///
/// Span events are selected by `RUST_LOG_SPAN_EVENTS`, e.g. `new,close`.
pub fn init_test_tracing() {
    let span_events = match std::env::var_os("RUST_LOG_SPAN_EVENTS") {
        Some(value) => value
            .to_string_lossy()
            .to_ascii_lowercase()
            .split(',')
            .map(|filter| match filter.trim() {
                "new" => FmtSpan::NEW,
                "enter" => FmtSpan::ENTER,
                "exit" => FmtSpan::EXIT,
                "close" => FmtSpan::CLOSE,
                "active" => FmtSpan::ACTIVE,
                "full" => FmtSpan::FULL,
                other => panic!(
                    "RUST_LOG_SPAN_EVENTS must contain filters separated by `,`, got `{other}`"
                ),
            })
            .fold(FmtSpan::NONE, |acc, filter| filter | acc),
        None => FmtSpan::NONE,
    };

    let _ = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_span_events(span_events)
        .with_test_writer()
        .try_init();
}
