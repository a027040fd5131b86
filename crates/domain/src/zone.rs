//! Zone model: canonical names, the literal encoding and SOA timers.
pub mod literal;
pub mod name;
pub mod serial;
pub mod zone_config;

pub use literal::{decode_literal, encode_literal};
pub use name::{child_name, fqdn, validate_name};
pub use serial::soa_serial;
pub use zone_config::{
    NegativeResponse, ZoneConfig, RECORD_TTL, SOA_EXPIRE, SOA_MINIMUM_TTL, SOA_REFRESH, SOA_RETRY,
};
