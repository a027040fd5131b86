use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("No literal label in {0}")]
    MissingLiteralLabel(String),

    #[error("Name {name} is outside zone {zone}")]
    OutsideZone { name: String, zone: String },

    #[error("Literal label contains a subdomain separator: {0}")]
    NestedLabel(String),

    #[error("Not an IPv6 literal: {0}")]
    InvalidLiteral(String),

    #[error("Cannot derive SOA serial from date {0}")]
    InvalidSerial(String),
}
