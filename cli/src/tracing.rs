use anyhow::Result;
use std::env;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Logs go to stderr so that stdout stays parseable.
pub fn init() -> Result<()> {
    let log_level = env::var("PROBE_DECODE_LOG").unwrap_or_else(|_| "info".to_string());
    let log_format = env::var("PROBE_DECODE_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let env_filter = EnvFilter::try_new(&log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .json()
                .with_writer(std::io::stderr)
                .with_env_filter(env_filter)
                .try_init()
                .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;
        }
        "compact" => {
            tracing_subscriber::fmt()
                .compact()
                .with_target(true)
                .with_writer(std::io::stderr)
                .with_env_filter(env_filter)
                .try_init()
                .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;
        }
        _ => {
            tracing_subscriber::fmt()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_env_filter(env_filter)
                .try_init()
                .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;
        }
    }

    Ok(())
}
