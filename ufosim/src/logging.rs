//! Global logging system.

use std::env;

use tracing::trace;
use tracing_subscriber::{
    fmt::{
        self,
        time::uptime,
    },
    prelude::*,
    Registry,
    EnvFilter,
};

/// Default logging environment filter. This crate logs at info, everything else is warn.
const DEFAULT_FILTER: &str = "warn,ufosim=info";

/// Installs a `tracing` backend writing compact lines to stdout. Accepts
/// ecosystem-standard `RUST_LOG` env filters on top of the default.
pub fn init_logging() -> anyhow::Result<()> {
    let format = fmt::format()
        .compact()
        .with_timer(uptime())
        .with_line_number(true);
    let stdout_log = fmt::layer()
        .event_format(format);

    let mut filter = DEFAULT_FILTER.to_owned();
    if let Ok(env_filter) = env::var(EnvFilter::DEFAULT_ENV) {
        filter.push(',');
        filter.push_str(&env_filter);
    }

    let subscriber = Registry::default()
        .with(EnvFilter::new(filter))
        .with(stdout_log);
    tracing::subscriber::set_global_default(subscriber)?;
    trace!("installed log subscriber");
    Ok(())
}
