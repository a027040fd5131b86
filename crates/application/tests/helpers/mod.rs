#![allow(dead_code)]

use chrono::NaiveDate;
use literal_dns_application::ports::Clock;
use literal_dns_application::use_cases::ResolveLiteralUseCase;
use literal_dns_domain::{NegativeResponse, ZoneConfig};
use std::sync::Arc;

pub struct FixedClock(pub NaiveDate);

impl FixedClock {
    pub fn ymd(year: i32, month: u32, day: u32) -> Self {
        Self(NaiveDate::from_ymd_opt(year, month, day).unwrap())
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

pub struct UseCaseBuilder {
    zone: String,
    nameserver: String,
    mailbox: Option<String>,
    negative_response: NegativeResponse,
    clock: FixedClock,
}

impl UseCaseBuilder {
    pub fn new() -> Self {
        Self {
            zone: "ipv6-literal.".to_string(),
            nameserver: "ipv6-literal.".to_string(),
            mailbox: Some("hostmaster.ipv6-literal.".to_string()),
            negative_response: NegativeResponse::NxDomain,
            clock: FixedClock::ymd(2024, 2, 29),
        }
    }

    pub fn zone(mut self, zone: &str) -> Self {
        self.zone = zone.to_string();
        self
    }

    pub fn nameserver(mut self, nameserver: &str) -> Self {
        self.nameserver = nameserver.to_string();
        self
    }

    pub fn negative_response(mut self, policy: NegativeResponse) -> Self {
        self.negative_response = policy;
        self
    }

    pub fn clock(mut self, clock: FixedClock) -> Self {
        self.clock = clock;
        self
    }

    pub fn build(self) -> ResolveLiteralUseCase {
        let zone = ZoneConfig::new(&self.zone, &self.nameserver, self.mailbox.as_deref())
            .unwrap()
            .with_negative_response(self.negative_response);
        ResolveLiteralUseCase::new(Arc::new(zone), Arc::new(self.clock))
    }
}
