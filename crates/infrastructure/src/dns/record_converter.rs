use hickory_proto::op::ResponseCode;
use hickory_proto::rr::rdata::{AAAA, NS, SOA};
use hickory_proto::rr::{Name, RData, Record};
use literal_dns_domain::{DomainError, LiteralRecord, LiteralReply, ReplyCode};
use std::str::FromStr;

/// Converts resolver output into hickory wire records.
pub struct RecordConverter;

impl RecordConverter {
    pub fn to_records(reply: &LiteralReply) -> Result<Vec<Record>, DomainError> {
        reply.records.iter().map(Self::to_record).collect()
    }

    pub fn to_record(record: &LiteralRecord) -> Result<Record, DomainError> {
        let converted = match record {
            LiteralRecord::Soa {
                zone,
                nameserver,
                mailbox,
                serial,
                refresh,
                retry,
                expire,
                minimum,
                ttl,
            } => {
                let soa = SOA::new(
                    parse_name(nameserver)?,
                    parse_name(mailbox)?,
                    *serial,
                    *refresh,
                    *retry,
                    *expire,
                    *minimum,
                );
                Record::from_rdata(parse_name(zone)?, *ttl, RData::SOA(soa))
            }
            LiteralRecord::Ns {
                name,
                nameserver,
                ttl,
            } => Record::from_rdata(parse_name(name)?, *ttl, RData::NS(NS(parse_name(nameserver)?))),
            LiteralRecord::Aaaa { name, address, ttl } => {
                Record::from_rdata(parse_name(name)?, *ttl, RData::AAAA(AAAA(*address)))
            }
        };
        Ok(converted)
    }

    pub fn response_code(code: ReplyCode) -> ResponseCode {
        match code {
            ReplyCode::NoError => ResponseCode::NoError,
            ReplyCode::NxDomain => ResponseCode::NXDomain,
        }
    }
}

fn parse_name(name: &str) -> Result<Name, DomainError> {
    Name::from_str(name)
        .map_err(|e| DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", name, e)))
}
