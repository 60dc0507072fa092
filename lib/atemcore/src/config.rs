//! Connection tunables. Defaults carry the protocol values; a TOML override
//! can be parsed for deployments with slower links or unusual switchers.

use std::time::Duration;

use serde_derive::Deserialize;

use crate::error::AtemError;
use crate::protocol;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConnectionConfig {
    /// Switcher control port.
    pub udp_port: u16,
    /// Seconds of silence before the session is torn down and redialed.
    pub connection_timeout_secs: f64,
    /// Seconds to wait for the first datagram in handshake-only waits.
    pub handshake_timeout_secs: f64,
    /// How many initial payload packet ids are tracked for resends.
    pub max_init_packets: usize,
    /// Sleep between I/O loop iterations when idle.
    pub tick_millis: u64,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        ConnectionConfig {
            udp_port: protocol::UDP_PORT,
            connection_timeout_secs: protocol::DEFAULT_CONNECTION_TIMEOUT_SECS,
            handshake_timeout_secs: protocol::DEFAULT_HANDSHAKE_TIMEOUT_SECS,
            max_init_packets: protocol::MAX_INIT_PACKET_COUNT,
            tick_millis: 1,
        }
    }
}

impl ConnectionConfig {
    pub fn from_toml_str(config: &str) -> Result<ConnectionConfig, AtemError> {
        serdeconv::from_toml_str(config).map_err(|e| AtemError::Config(e.to_string()))
    }

    #[inline]
    pub fn connection_timeout(&self) -> Duration {
        Duration::from_secs_f64(self.connection_timeout_secs)
    }

    #[inline]
    pub fn handshake_timeout(&self) -> Duration {
        Duration::from_secs_f64(self.handshake_timeout_secs)
    }

    #[inline]
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConnectionConfig::default();

        assert_eq!(config.udp_port, 9910);
        assert_eq!(config.connection_timeout(), Duration::from_secs(1));
        assert_eq!(config.handshake_timeout(), Duration::from_millis(100));
        assert_eq!(config.max_init_packets, 500);
    }

    #[test]
    fn test_toml_override() {
        let config = ConnectionConfig::from_toml_str(
            r#"
            connection_timeout_secs = 2.5
            tick_millis = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.connection_timeout(), Duration::from_millis(2500));
        assert_eq!(config.tick_millis, 5);
        assert_eq!(config.udp_port, 9910);
    }

    #[test]
    fn test_bad_toml_is_error() {
        assert!(ConnectionConfig::from_toml_str("udp_port = \"nope\"").is_err());
    }
}
