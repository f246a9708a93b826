//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::application::errors::ConfigError;

/// Command port Maya is expected to have opened with `commandPort`
pub const DEFAULT_COMMAND_PORT: u16 = 20200;

/// Host running Maya
pub const DEFAULT_HOST: &str = "localhost";

/// Plugin binary registered with the host
pub const DEFAULT_PLUGIN_NAME: &str = "center_point_cpp";

/// Node type the plugin provides
pub const DEFAULT_NODE_TYPE: &str = "centerPoint";

/// Controller configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub host: HostConfig,
    pub plugin: PluginSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct HostConfig {
    pub address: String,
    pub command_port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct PluginSettings {
    pub name: String,
    pub node_type: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: HostConfig {
                address: DEFAULT_HOST.to_string(),
                command_port: DEFAULT_COMMAND_PORT,
            },
            plugin: PluginSettings {
                name: DEFAULT_PLUGIN_NAME.to_string(),
                node_type: DEFAULT_NODE_TYPE.to_string(),
            },
        }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))
    }

    pub fn save(&self, path: impl Into<PathBuf>) -> Result<(), ConfigError> {
        let path = path.into();
        let content = serde_yaml::to_string(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(&path, content)
            .map_err(|e| ConfigError::Write(format!("Failed to write config: {}", e)))
    }

    pub fn load_env() -> Self {
        // Load from environment variables
        let mut config = Config::default();

        if let Ok(address) = std::env::var("MAYA_HOST") {
            config.host.address = address;
        }

        if let Ok(port) = std::env::var("MAYA_COMMAND_PORT") {
            match port.parse() {
                Ok(port) => config.host.command_port = port,
                Err(_) => tracing::warn!("Ignoring non-numeric MAYA_COMMAND_PORT: {}", port),
            }
        }

        config
    }
}
