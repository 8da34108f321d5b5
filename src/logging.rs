use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::Registry;

/// Lowest level written to the browser console.
pub const CONSOLE_LEVEL: LevelFilter = LevelFilter::DEBUG;

/// Plain-text subscriber for the hydrated app. Timestamps are left out since
/// wasm has no system clock.
pub fn console_subscriber<W>(writer: W) -> impl tracing::Subscriber + Send + Sync + 'static
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let fmt = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(writer);
    Registry::default().with(CONSOLE_LEVEL).with(fmt)
}

#[cfg(feature = "hydrate")]
pub fn init_browser_logging() {
    use tracing_subscriber::util::SubscriberInitExt;

    // Fails only if a subscriber is already set.
    let _ = console_subscriber(tracing_web::MakeWebConsoleWriter::new()).try_init();
}
