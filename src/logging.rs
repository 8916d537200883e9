//! Log subscriber setup.
//!
//! The subscriber is installed before the settings file is read, with a
//! reloadable filter, so events from loading the settings are not lost.
//! Once the settings are known, [`apply_settings`] swaps in their filter.

use crate::AppConfig;
use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, reload};

/// Filter used until the settings file has been read.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Handle for replacing the active filter.
pub type LogHandle = reload::Handle<EnvFilter, Registry>;

/// Builds a filter, preferring `rust_log` (the `RUST_LOG` value) over `fallback`.
pub fn filter_for(rust_log: Option<&str>, fallback: &str) -> EnvFilter {
    EnvFilter::new(rust_log.unwrap_or(fallback))
}

/// Formatting subscriber writing to `writer`, plus a handle to its filter.
pub fn subscriber<W>(
    filter: EnvFilter,
    writer: W,
) -> (impl Subscriber + Send + Sync + 'static, LogHandle)
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let (filter, handle) = reload::Layer::new(filter);
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer));
    (subscriber, handle)
}

/// Replaces the bootstrap filter with the one from `config`.
///
/// `RUST_LOG` still wins when it is set.
pub fn apply_settings(
    handle: &LogHandle,
    rust_log: Option<&str>,
    config: &AppConfig,
) -> Result<(), reload::Error> {
    handle.reload(filter_for(rust_log, config.log_filter()))
}
