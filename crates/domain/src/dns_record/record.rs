use std::net::Ipv6Addr;
use std::sync::Arc;

/// A synthesized resource record, before conversion to wire types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiteralRecord {
    Soa {
        zone: Arc<str>,
        nameserver: Arc<str>,
        mailbox: Arc<str>,
        serial: u32,
        refresh: i32,
        retry: i32,
        expire: i32,
        minimum: u32,
        ttl: u32,
    },
    Ns {
        name: Arc<str>,
        nameserver: Arc<str>,
        ttl: u32,
    },
    Aaaa {
        name: Arc<str>,
        address: Ipv6Addr,
        ttl: u32,
    },
}
