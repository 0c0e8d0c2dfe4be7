//! Logging setup. Events go through `tracing`; in the browser they are written
//! to the devtools console without timestamps, since `SystemTime` is not
//! available on `wasm32-unknown-unknown`.

use super::errors::AppError;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt};

/// Builds the filter from a directive such as `info` or `academy_web=debug`.
/// Invalid directives fall back to `info` rather than silencing everything.
pub fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive.trim()).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns an error if a global subscriber is already set.
pub fn init(directive: &str) -> Result<(), AppError> {
    let fmt_layer = fmt::layer()
        .with_ansi(false)
        .with_target(false)
        .without_time();

    #[cfg(target_arch = "wasm32")]
    let fmt_layer = fmt_layer.with_writer(tracing_web::MakeWebConsoleWriter::new());

    let subscriber = Registry::default()
        .with(fmt_layer)
        .with(build_filter(directive));
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|err| AppError::Config(format!("Failed to install logger: {err}")))
}
