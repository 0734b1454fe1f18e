use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Directive applied on top of `RUST_LOG` for the given verbosity.
fn log_directive(quiet: bool) -> &'static str {
    if quiet { "nodedesk=error" } else { "nodedesk=info" }
}

/// Initialize logging with optional quiet mode.
///
/// When `quiet` is true, only error-level events are emitted.
/// When `quiet` is false, info-level and above events are emitted.
///
/// Events go to stderr as JSON lines so stdout stays clean for user output.
pub fn init_logging(quiet: bool) {
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = log_directive(quiet).parse() {
        filter = filter.add_directive(directive);
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(filter)
        .init();
}
