use std::fmt;

/// Question types the literal resolver distinguishes.
///
/// Everything except SOA, NS and AAAA is carried as `Other` with its wire
/// code so it can still be logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    SOA,
    NS,
    AAAA,
    Other(u16),
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::SOA => "SOA",
            RecordType::NS => "NS",
            RecordType::AAAA => "AAAA",
            RecordType::Other(_) => "OTHER",
        }
    }

    pub fn from_u16(code: u16) -> Self {
        match code {
            2 => RecordType::NS,
            6 => RecordType::SOA,
            28 => RecordType::AAAA,
            other => RecordType::Other(other),
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordType::Other(code) => write!(f, "TYPE{}", code),
            known => f.write_str(known.as_str()),
        }
    }
}

impl From<u16> for RecordType {
    fn from(code: u16) -> Self {
        Self::from_u16(code)
    }
}
