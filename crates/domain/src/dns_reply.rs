use super::LiteralRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyCode {
    NoError,
    NxDomain,
}

impl ReplyCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReplyCode::NoError => "NOERROR",
            ReplyCode::NxDomain => "NXDOMAIN",
        }
    }
}

/// Answer produced for exactly one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralReply {
    pub records: Vec<LiteralRecord>,
    pub code: ReplyCode,
    /// False only for names outside the served zone.
    pub authoritative: bool,
}

impl LiteralReply {
    pub fn answer(record: LiteralRecord) -> Self {
        Self {
            records: vec![record],
            code: ReplyCode::NoError,
            authoritative: true,
        }
    }

    pub fn name_error() -> Self {
        Self {
            records: Vec::new(),
            code: ReplyCode::NxDomain,
            authoritative: true,
        }
    }

    /// NOERROR with an empty answer section.
    pub fn no_data() -> Self {
        Self {
            records: Vec::new(),
            code: ReplyCode::NoError,
            authoritative: true,
        }
    }

    /// Name error for a name this server holds no authority over.
    pub fn outside_zone() -> Self {
        Self {
            records: Vec::new(),
            code: ReplyCode::NxDomain,
            authoritative: false,
        }
    }
}
