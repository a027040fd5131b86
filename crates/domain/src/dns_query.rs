use super::RecordType;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct LiteralQuery {
    pub name: Arc<str>,
    pub record_type: RecordType,
}

impl LiteralQuery {
    pub fn new(name: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            name: name.into(),
            record_type,
        }
    }
}
