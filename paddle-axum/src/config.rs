//! Configuration types for the Axum HTTP server.

use serde::{Deserialize, Serialize};
use std::{net::SocketAddr, time::Duration};

/// Configuration for the Axum HTTP server.
///
/// # Examples
///
/// ```
/// use paddle_axum::config::AxumConfig;
/// use std::time::Duration;
///
/// // Use default configuration
/// let config = AxumConfig::default();
/// assert_eq!(config.acknowledgement, Duration::from_millis(3000));
///
/// // Custom configuration
/// let config = AxumConfig {
///     bind_address: "127.0.0.1:3000".parse().unwrap(),
///     acknowledgement: Duration::from_secs(5),
/// };
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AxumConfig {
    /// The address to bind the server to
    #[serde(default = "default_bind_address")]
    pub bind_address: SocketAddr,

    /// How long the form shows the "bid submitted" notice
    #[serde(default = "default_acknowledgement", with = "humantime_serde")]
    pub acknowledgement: Duration,
}

fn default_bind_address() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

fn default_acknowledgement() -> Duration {
    Duration::from_millis(3000)
}

impl Default for AxumConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            acknowledgement: default_acknowledgement(),
        }
    }
}
