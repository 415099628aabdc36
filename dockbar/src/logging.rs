use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber: fmt output filtered by `RUST_LOG`,
/// falling back to the given level, then to `info`.
pub fn setup_logging(default_level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.unwrap_or("info")));
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer());
    tracing::subscriber::set_global_default(subscriber)
        .expect("Couldn't setup global subscriber (logger)");
}
