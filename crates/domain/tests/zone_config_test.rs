use literal_dns_domain::{NegativeResponse, ZoneConfig, RECORD_TTL, SOA_MINIMUM_TTL};

#[test]
fn test_zone_is_made_fully_qualified() {
    let zone = ZoneConfig::new("ipv6-literal", "ns1.example", None).unwrap();
    assert_eq!(zone.zone(), "ipv6-literal.");
    assert_eq!(zone.nameserver(), "ns1.example.");
}

#[test]
fn test_default_mailbox_is_hostmaster() {
    let zone = ZoneConfig::new("ipv6-literal", "ipv6-literal.", None).unwrap();
    assert_eq!(zone.mailbox(), "hostmaster.ipv6-literal.");
}

#[test]
fn test_blank_mailbox_uses_default() {
    let zone = ZoneConfig::new("ipv6-literal", "ipv6-literal.", Some("  ")).unwrap();
    assert_eq!(zone.mailbox(), "hostmaster.ipv6-literal.");
}

#[test]
fn test_explicit_mailbox_is_made_fully_qualified() {
    let zone = ZoneConfig::new("ipv6-literal", "ipv6-literal.", Some("dns.example.org")).unwrap();
    assert_eq!(zone.mailbox(), "dns.example.org.");
}

#[test]
fn test_names_are_lowercased() {
    let zone = ZoneConfig::new("IPv6-Literal.Example", "NS1.Example", None).unwrap();
    assert_eq!(zone.zone(), "ipv6-literal.example.");
    assert_eq!(zone.nameserver(), "ns1.example.");
}

#[test]
fn test_root_zone_mailbox() {
    let zone = ZoneConfig::new(".", "ns.", None).unwrap();
    assert_eq!(zone.zone(), ".");
    assert_eq!(zone.mailbox(), "hostmaster.");
}

#[test]
fn test_invalid_names_rejected() {
    assert!(ZoneConfig::new("a..b", "ns.", None).is_err());
    assert!(ZoneConfig::new("zone", "..", None).is_err());
    assert!(ZoneConfig::new("zone", "ns.", Some("bad..mailbox")).is_err());
}

#[test]
fn test_defaults() {
    let zone = ZoneConfig::new("ipv6-literal", "ipv6-literal.", None).unwrap();
    assert_eq!(zone.ttl, RECORD_TTL);
    assert_eq!(zone.refresh, 43200);
    assert_eq!(zone.retry, 180);
    assert_eq!(zone.expire, 2419200);
    assert_eq!(zone.minimum, SOA_MINIMUM_TTL);
    assert_eq!(zone.negative_response, NegativeResponse::NxDomain);
}

#[test]
fn test_is_apex() {
    let zone = ZoneConfig::new("ipv6-literal", "ipv6-literal.", None).unwrap();
    assert!(zone.is_apex("ipv6-literal."));
    assert!(zone.is_apex("IPV6-LITERAL."));
    assert!(!zone.is_apex("ipv6-literal"));
    assert!(!zone.is_apex("other."));
}

#[test]
fn test_contains() {
    let zone = ZoneConfig::new("ipv6-literal", "ipv6-literal.", None).unwrap();
    assert!(zone.contains("ipv6-literal."));
    assert!(zone.contains("2001-db8--1.ipv6-literal."));
    assert!(zone.contains("foo.bar.IPV6-Literal."));
    assert!(!zone.contains("other."));
    assert!(!zone.contains("notipv6-literal."));
    assert!(!zone.contains("ipv6-literal"));
    assert!(!zone.contains("literal."));
}

#[test]
fn test_root_zone_contains_everything() {
    let zone = ZoneConfig::new(".", "ns1.example.", None).unwrap();
    assert!(zone.contains("."));
    assert!(zone.contains("2001-db8--1."));
    assert!(zone.contains("other.example."));
}
