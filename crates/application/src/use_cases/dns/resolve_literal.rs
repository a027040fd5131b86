use crate::ports::Clock;
use literal_dns_domain::{
    decode_literal, soa_serial, DomainError, LiteralQuery, LiteralRecord, LiteralReply,
    NegativeResponse, RecordType, ZoneConfig,
};
use std::sync::Arc;
use tracing::debug;

/// Turns one question into one reply.
///
/// SOA is answered for any name, NS only at the zone apex, and AAAA by
/// decoding the label in front of the zone. Every other question gets a
/// negative reply, which is non-authoritative for names outside the zone.
/// Holds no mutable state, so one instance serves all
/// requests concurrently.
pub struct ResolveLiteralUseCase {
    zone: Arc<ZoneConfig>,
    clock: Arc<dyn Clock>,
}

impl ResolveLiteralUseCase {
    pub fn new(zone: Arc<ZoneConfig>, clock: Arc<dyn Clock>) -> Self {
        Self { zone, clock }
    }

    pub fn zone(&self) -> &ZoneConfig {
        &self.zone
    }

    /// Fails only when the SOA serial cannot be derived from the clock.
    pub fn execute(&self, query: &LiteralQuery) -> Result<LiteralReply, DomainError> {
        if query.record_type != RecordType::SOA && !self.zone.contains(&query.name) {
            debug!(name = %query.name, zone = %self.zone.zone(), "Name outside zone");
            return Ok(LiteralReply::outside_zone());
        }

        match query.record_type {
            RecordType::SOA => {
                let record = self.soa_record()?;
                debug!(zone = %self.zone.zone(), "SOA reply");
                Ok(LiteralReply::answer(record))
            }
            RecordType::NS if self.zone.is_apex(&query.name) => {
                debug!(nameserver = %self.zone.nameserver(), "NS reply");
                Ok(LiteralReply::answer(LiteralRecord::Ns {
                    name: Arc::clone(&query.name),
                    nameserver: self.zone.nameserver_name(),
                    ttl: self.zone.ttl,
                }))
            }
            RecordType::AAAA => Ok(self.aaaa_reply(query)),
            _ => {
                debug!(name = %query.name, record_type = %query.record_type, "Wrong query type");
                Ok(self.negative_reply(&query.name))
            }
        }
    }

    /// Serial for today's SOA record.
    pub fn current_serial(&self) -> Result<u32, DomainError> {
        soa_serial(self.clock.today())
    }

    fn soa_record(&self) -> Result<LiteralRecord, DomainError> {
        Ok(LiteralRecord::Soa {
            zone: self.zone.zone_name(),
            nameserver: self.zone.nameserver_name(),
            mailbox: self.zone.mailbox_name(),
            serial: self.current_serial()?,
            refresh: self.zone.refresh,
            retry: self.zone.retry,
            expire: self.zone.expire,
            minimum: self.zone.minimum,
            ttl: self.zone.ttl,
        })
    }

    fn aaaa_reply(&self, query: &LiteralQuery) -> LiteralReply {
        match decode_literal(&query.name, self.zone.zone()) {
            Ok(address) => {
                debug!(name = %query.name, %address, "AAAA reply");
                LiteralReply::answer(LiteralRecord::Aaaa {
                    name: Arc::clone(&query.name),
                    address,
                    ttl: self.zone.ttl,
                })
            }
            Err(e) => {
                debug!(name = %query.name, reason = %e, "Literal rejected");
                self.negative_reply(&query.name)
            }
        }
    }

    fn negative_reply(&self, name: &str) -> LiteralReply {
        match self.zone.negative_response {
            NegativeResponse::NxDomain => LiteralReply::name_error(),
            NegativeResponse::NoData if self.name_exists(name) => LiteralReply::no_data(),
            NegativeResponse::NoData => LiteralReply::name_error(),
        }
    }

    fn name_exists(&self, name: &str) -> bool {
        self.zone.is_apex(name) || decode_literal(name, self.zone.zone()).is_ok()
    }
}
