//! Tracing setup for hosts embedding the widget core.

use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Registry};

/// Installs a global subscriber emitting bunyan-style JSON on stdout.
///
/// The level comes from `RUST_LOG`, `info` when unset. Fails if a global
/// subscriber is already installed.
pub fn init_tracing(app_name: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let formatting_layer = BunyanFormattingLayer::new(app_name.to_string(), std::io::stdout);

    let subscriber = Registry::default()
        .with(filter)
        .with(JsonStorageLayer)
        .with(formatting_layer);

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
