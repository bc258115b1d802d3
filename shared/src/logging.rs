//! Tracing subscriber setup

use tracing::Subscriber;
use tracing_subscriber::{
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

use crate::config::{LogFormat, LoggingConfig};

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence over the configured level. Returns `false`
/// when a global subscriber was already installed, which leaves the existing
/// one in place.
pub fn init_tracing(config: &LoggingConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let installed = tracing_subscriber::registry()
        .with(format_layer::<Registry, _>(config, std::io::stdout))
        .with(filter)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(level = %config.level, format = %config.format, "Logging initialized");
    }

    installed
}

/// Formatting layer for the configured output format, writing to `writer`
pub fn format_layer<S, W>(config: &LoggingConfig, writer: W) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a> + 'static,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = fmt::layer().with_writer(writer);
    let location = config.source_location;

    match config.format {
        LogFormat::Json => Box::new(layer.json().with_file(location).with_line_number(location)),
        LogFormat::Pretty => Box::new(
            layer
                .pretty()
                .with_ansi(config.colored)
                .with_file(location)
                .with_line_number(location),
        ),
        LogFormat::Compact => Box::new(
            layer
                .compact()
                .with_ansi(config.colored)
                .with_target(true)
                .with_file(location)
                .with_line_number(location),
        ),
    }
}
