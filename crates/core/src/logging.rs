//! Log subscriber setup

use tracing_subscriber::EnvFilter;

use crate::config::CoreConfig;

/// Install the global `tracing` subscriber
///
/// `RUST_LOG` wins over the configured filter. Returns `false` when a
/// subscriber was already installed.
pub fn init(config: &CoreConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.filter_directive()));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("cs2utils logging initialized");
    }
    installed
}
