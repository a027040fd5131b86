//! literal-dns domain layer
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod dns_reply;
pub mod errors;
pub mod zone;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_query::LiteralQuery;
pub use dns_record::{LiteralRecord, RecordType};
pub use dns_reply::{LiteralReply, ReplyCode};
pub use errors::DomainError;
pub use zone::{
    decode_literal, encode_literal, fqdn, soa_serial, NegativeResponse, ZoneConfig, RECORD_TTL,
    SOA_MINIMUM_TTL,
};
