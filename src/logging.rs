//! Tracing subscriber setup.
//!
//! Logs go to stderr so they never mix with list output on stdout.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, DEFAULT_LOG_LEVEL};

/// Install the global subscriber. Later calls are no-ops.
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(config.log_level())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        let config = Config {
            log_level: Some("not a [valid filter".to_string()),
            ..Default::default()
        };
        init_tracing(&config);
        init_tracing(&Config::default());
        tracing::debug!("still fine");
    }
}
