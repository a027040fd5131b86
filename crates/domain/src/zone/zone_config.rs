use super::name::{canonical, child_name, validate_name};
use crate::DomainError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// TTL of every synthesized record.
pub const RECORD_TTL: u32 = 3600;

// Hickory models the SOA intervals as i32.
pub const SOA_REFRESH: i32 = 43_200;
pub const SOA_RETRY: i32 = 180;
pub const SOA_EXPIRE: i32 = 2_419_200;
pub const SOA_MINIMUM_TTL: u32 = 10_800;

/// How to answer a question whose type the zone does not serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NegativeResponse {
    /// Always answer NXDOMAIN.
    #[default]
    NxDomain,
    /// Answer NOERROR with no records when the name exists in the zone.
    NoData,
}

/// Immutable zone parameters shared by every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneConfig {
    zone: Arc<str>,
    nameserver: Arc<str>,
    mailbox: Arc<str>,
    pub ttl: u32,
    pub refresh: i32,
    pub retry: i32,
    pub expire: i32,
    pub minimum: u32,
    pub negative_response: NegativeResponse,
}

impl ZoneConfig {
    /// Builds a zone from user input. All names are canonicalised to
    /// lowercase FQDNs; a missing mailbox becomes `hostmaster.<zone>`.
    pub fn new(zone: &str, nameserver: &str, mailbox: Option<&str>) -> Result<Self, DomainError> {
        let zone = canonical(zone);
        validate_name(&zone)?;

        let nameserver = canonical(nameserver);
        validate_name(&nameserver)?;

        let mailbox = match mailbox.map(str::trim).filter(|m| !m.is_empty()) {
            Some(mailbox) => canonical(mailbox),
            None => child_name("hostmaster", &zone),
        };
        validate_name(&mailbox)?;

        Ok(Self {
            zone: zone.into(),
            nameserver: nameserver.into(),
            mailbox: mailbox.into(),
            ttl: RECORD_TTL,
            refresh: SOA_REFRESH,
            retry: SOA_RETRY,
            expire: SOA_EXPIRE,
            minimum: SOA_MINIMUM_TTL,
            negative_response: NegativeResponse::default(),
        })
    }

    pub fn with_negative_response(mut self, policy: NegativeResponse) -> Self {
        self.negative_response = policy;
        self
    }

    pub fn zone(&self) -> &str {
        &self.zone
    }

    pub fn nameserver(&self) -> &str {
        &self.nameserver
    }

    pub fn mailbox(&self) -> &str {
        &self.mailbox
    }

    pub fn zone_name(&self) -> Arc<str> {
        Arc::clone(&self.zone)
    }

    pub fn nameserver_name(&self) -> Arc<str> {
        Arc::clone(&self.nameserver)
    }

    pub fn mailbox_name(&self) -> Arc<str> {
        Arc::clone(&self.mailbox)
    }

    pub fn is_apex(&self, name: &str) -> bool {
        name.eq_ignore_ascii_case(&self.zone)
    }

    /// True for the apex and any name below it.
    pub fn contains(&self, name: &str) -> bool {
        if &*self.zone == "." || self.is_apex(name) {
            return true;
        }
        name.len()
            .checked_sub(self.zone.len())
            .and_then(|split| name.get(..split).zip(name.get(split..)))
            .is_some_and(|(head, tail)| head.ends_with('.') && tail.eq_ignore_ascii_case(&self.zone))
    }
}
