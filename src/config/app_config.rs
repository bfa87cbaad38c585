use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use url::Url;

use super::{deserialize_duration_from_ms, BaseHttpClientConfig};

/// Provides the default value for shutdown_grace_ms.
fn default_shutdown_grace() -> Duration {
    Duration::from_millis(500)
}

/// Application configuration for the exit beacon agent.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Base URL of the collector that receives exit beacons.
    pub collector_url: Url,

    /// Configuration for the base HTTP client.
    #[serde(default)]
    pub http: BaseHttpClientConfig,

    /// Bounded window, after the teardown event has been dispatched, in
    /// which in-flight beacon transmissions may finish before the process
    /// exits. Transmissions still in flight when it elapses are abandoned.
    #[serde(
        default = "default_shutdown_grace",
        deserialize_with = "deserialize_duration_from_ms"
    )]
    pub shutdown_grace_ms: Duration,
}

impl AppConfig {
    /// Creates a new `AppConfig` by reading from the configuration directory.
    ///
    /// Values from `app.yaml` can be overridden with `BEACON__`-prefixed
    /// environment variables.
    pub fn new(config_dir: Option<&str>) -> Result<Self, ConfigError> {
        let config_dir_str = config_dir.unwrap_or("configs");
        let s = Config::builder()
            .add_source(File::with_name(&format!("{config_dir_str}/app.yaml")))
            .add_source(Environment::with_prefix("BEACON").separator("__"))
            .build()?;
        s.try_deserialize()
    }
}
