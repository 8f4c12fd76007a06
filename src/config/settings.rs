// Configuration structs

use serde::Deserialize;

/// Top-level configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Client connection settings
    pub client: ClientConfig,
}

/// Settings for connecting to the daemon
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Address the daemon listens on
    #[serde(default = "default_daemon_address")]
    pub daemon_address: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            daemon_address: default_daemon_address(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

fn default_daemon_address() -> String {
    "127.0.0.1:7133".to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.daemon_address, "127.0.0.1:7133");
        assert_eq!(config.timeout_seconds, 10);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: ClientConfig = toml::from_str(r#"daemon_address = "127.0.0.1:9000""#).unwrap();
        assert_eq!(config.daemon_address, "127.0.0.1:9000");
        assert_eq!(config.timeout_seconds, 10);
    }
}
