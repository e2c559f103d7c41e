//! Diagnostic logging setup.

use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

/// Install the global fmt subscriber, writing to stderr.
///
/// `RUST_LOG` wins when set. Otherwise only warnings are shown, or debug
/// output for the NutCart crates when `verbose` is on.
pub fn init_tracing(verbose: bool) -> Result<(), anyhow::Error> {
    let default_filter = if verbose {
        "warn,nutcart_cli=debug,nutcart_commerce=debug,nutcart_cache=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    SubscriberBuilder::default()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {}", e))
}
