//! Hostname encoding of IPv6 literals.
//!
//! An address is queried as `<addr with '-' for ':'>.<zone>`, e.g.
//! `2001-db8--1.ipv6-literal.` for `2001:db8::1`. Colons are not valid in
//! hostnames while hyphens are.

use super::name::child_name;
use crate::DomainError;
use std::net::Ipv6Addr;

const LABEL_SEPARATOR: char = '.';

/// Decodes the single label in front of `zone` into an IPv6 address.
///
/// `zone` must be a canonical FQDN. Suffix matching is ASCII case-insensitive.
pub fn decode_literal(name: &str, zone: &str) -> Result<Ipv6Addr, DomainError> {
    if name.len() <= zone.len() {
        return Err(DomainError::MissingLiteralLabel(name.to_string()));
    }

    let candidate = strip_zone(name, zone).ok_or_else(|| DomainError::OutsideZone {
        name: name.to_string(),
        zone: zone.to_string(),
    })?;

    // Deeper subdomains and dotted IPv4 forms both land here.
    if candidate.contains(LABEL_SEPARATOR) {
        return Err(DomainError::NestedLabel(candidate.to_string()));
    }

    candidate
        .replace('-', ":")
        .parse::<Ipv6Addr>()
        .map_err(|_| DomainError::InvalidLiteral(candidate.to_string()))
}

/// Inverse of [`decode_literal`].
pub fn encode_literal(address: &Ipv6Addr, zone: &str) -> String {
    let text = address.to_string();
    let label = if text.contains(LABEL_SEPARATOR) {
        // IPv4-mapped addresses print with a dotted tail.
        address
            .segments()
            .iter()
            .map(|segment| format!("{:x}", segment))
            .collect::<Vec<_>>()
            .join("-")
    } else {
        text.replace(':', "-")
    };
    child_name(&label, zone)
}

fn strip_zone<'a>(name: &'a str, zone: &str) -> Option<&'a str> {
    let split = name.len().checked_sub(zone.len())?;
    let head = name.get(..split)?;
    let tail = name.get(split..)?;
    if !tail.eq_ignore_ascii_case(zone) {
        return None;
    }
    if zone == "." {
        return Some(head);
    }
    head.strip_suffix(LABEL_SEPARATOR)
}
