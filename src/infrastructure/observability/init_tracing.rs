use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use super::TracingConfig;

/// Installs the global subscriber and reports whether this call installed it.
/// `RUST_LOG` wins over [`TracingConfig::filter_directives`].
pub fn init_tracing(config: &TracingConfig, port: u16) -> bool {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.filter_directives()));

    let json_layer = config.json_format.then(|| {
        fmt::layer()
            .json()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
    });
    let plain_layer = (!config.json_format).then(|| {
        fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
    });

    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(plain_layer)
        .try_init()
        .is_ok();

    if !installed {
        tracing::debug!("Tracing subscriber already installed");
        return false;
    }

    tracing::info!(
        port,
        environment = %config.environment,
        json_format = config.json_format,
        "Relay initialized"
    );
    true
}
