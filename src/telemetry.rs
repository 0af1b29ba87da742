//! Tracing setup for the application startup path.

use tracing_subscriber::EnvFilter;

use crate::config::Profile;

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise production logs at `info` and
/// development at `debug`.
pub fn init(profile: Profile) {
    let default_filter = if profile.is_production() {
        "info"
    } else {
        "debug"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(true)
        .init();
}
