pub mod record;
pub mod record_type;

pub use record::LiteralRecord;
pub use record_type::RecordType;
