use crate::zone::{NegativeResponse, ZoneConfig};
use crate::DomainError;
use serde::{Deserialize, Serialize};

/// Zone section as written by the operator, before canonicalisation.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ZoneSettings {
    #[serde(default = "default_zone")]
    pub name: String,

    #[serde(default = "default_nameserver")]
    pub nameserver: String,

    /// Defaults to `hostmaster.<zone>`.
    #[serde(default)]
    pub mailbox: Option<String>,

    #[serde(default)]
    pub negative_response: NegativeResponse,
}

impl ZoneSettings {
    pub fn to_zone_config(&self) -> Result<ZoneConfig, DomainError> {
        Ok(
            ZoneConfig::new(&self.name, &self.nameserver, self.mailbox.as_deref())?
                .with_negative_response(self.negative_response),
        )
    }
}

impl Default for ZoneSettings {
    fn default() -> Self {
        Self {
            name: default_zone(),
            nameserver: default_nameserver(),
            mailbox: None,
            negative_response: NegativeResponse::default(),
        }
    }
}

fn default_zone() -> String {
    "ipv6-literal".to_string()
}

fn default_nameserver() -> String {
    "ipv6-literal.".to_string()
}
