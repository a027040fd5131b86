use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::zone::ZoneSettings;

const LOCAL_CONFIG_PATH: &str = "literal-dns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/literal-dns/config.toml";

/// Main configuration structure for literal-dns
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listening port and bind address
    #[serde(default)]
    pub server: ServerConfig,

    /// Zone served and its SOA/NS data
    #[serde(default)]
    pub zone: ZoneSettings,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. literal-dns.toml in current directory
    /// 3. /etc/literal-dns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path.map(str::to_string).or_else(Self::get_config_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(zone) = overrides.zone {
            self.zone.name = zone;
        }
        if let Some(nameserver) = overrides.nameserver {
            self.zone.nameserver = nameserver;
        }
        if let Some(mailbox) = overrides.mailbox {
            self.zone.mailbox = Some(mailbox);
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if overrides.debug {
            self.logging.debug = true;
        }
        if let Some(path) = overrides.cpuprofile {
            self.logging.cpuprofile = Some(path);
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        self.server.socket_addr()?;

        self.zone
            .to_zone_config()
            .map_err(|e| ConfigError::Validation(e.to_string()))?;

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|candidate| Path::new(candidate).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub zone: Option<String>,
    pub nameserver: Option<String>,
    pub mailbox: Option<String>,
    pub log_level: Option<String>,
    pub debug: bool,
    pub cpuprofile: Option<PathBuf>,
}
