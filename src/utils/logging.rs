use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Install the stderr subscriber.
///
/// `RUST_LOG` wins when set; otherwise only warnings are shown unless
/// `verbose` asks for debug output. Stdout is left to command output.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    // A second init (e.g. from tests) keeps the first subscriber
    let _ = Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();
}
