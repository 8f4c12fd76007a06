// Configuration loader
// Loads settings from ~/.kestrel/config.toml or environment variables

use anyhow::{Context, Result};
use std::fs;

use super::settings::{ClientConfig, Config};

/// Load configuration from the Kestrel config file or environment
///
/// A missing config file is not an error; built-in defaults apply.
/// The KESTREL_DAEMON_ADDR environment variable overrides the file.
pub fn load_config() -> Result<Config> {
    let mut config = try_load_from_kestrel_config()?.unwrap_or_default();

    if let Ok(addr) = std::env::var("KESTREL_DAEMON_ADDR") {
        if !addr.is_empty() {
            config.client.daemon_address = addr;
        }
    }

    Ok(config)
}

fn try_load_from_kestrel_config() -> Result<Option<Config>> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    let config_path = home.join(".kestrel/config.toml");

    if !config_path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;

    #[derive(serde::Deserialize)]
    struct TomlConfig {
        #[serde(default)]
        client: Option<ClientConfig>,
    }

    let toml_config: TomlConfig =
        toml::from_str(&contents).context("Failed to parse config.toml")?;

    let mut config = Config::default();
    if let Some(client) = toml_config.client {
        config.client = client;
    }

    Ok(Some(config))
}

#[cfg(test)]
mod tests {
    use super::super::settings::Config;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.client.daemon_address, "127.0.0.1:7133");
    }
}
