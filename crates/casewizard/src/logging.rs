//! Tracing setup for the binary. The library only emits events.

use color_eyre::Result;
use tracing_subscriber::{fmt, EnvFilter};

/// Console subscriber with `RUST_LOG` override, defaulting to info.
pub fn init() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| color_eyre::eyre::eyre!("failed to init tracing: {e}"))?;
    Ok(())
}
