use std::env;
use std::time::Duration;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DELAY_MS: u64 = 800;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Simulated click-feed latency applied to every aggregation run.
    pub simulated_delay: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let delay_ms = env::var("ANALYTICS_DELAY_MS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(DEFAULT_DELAY_MS);

        Self {
            port,
            simulated_delay: Duration::from_millis(delay_ms),
        }
    }
}
