//! HTTP server settings loaded via OrthoConfig.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 5;

/// Listener and shutdown settings, overridable through `FLEET_*` variables.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "FLEET")]
pub struct ServerSettings {
    /// Interface to bind.
    #[ortho_config(default = DEFAULT_HOST.to_owned())]
    pub host: String,
    /// TCP port to bind.
    #[ortho_config(default = DEFAULT_PORT)]
    pub port: u16,
    /// Seconds to drain in-flight requests after a shutdown signal.
    #[ortho_config(default = DEFAULT_SHUTDOWN_TIMEOUT_SECS)]
    pub shutdown_timeout_secs: u64,
}

impl ServerSettings {
    /// Host and port to bind, `0.0.0.0:8080` unless overridden.
    pub fn bind_addr(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }

    /// Graceful shutdown window, five seconds unless overridden.
    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_secs)
    }
}
