use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Forces `debug` regardless of `level`.
    #[serde(default)]
    pub debug: bool,

    #[serde(default)]
    pub cpuprofile: Option<PathBuf>,
}

impl LoggingConfig {
    pub fn effective_level(&self) -> &str {
        if self.debug {
            "debug"
        } else {
            &self.level
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            debug: false,
            cpuprofile: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
