//! Mapping from `hickory_proto::rr::RecordType` to `literal_dns_domain::RecordType`

use hickory_proto::rr::RecordType as HickoryRecordType;
use literal_dns_domain::RecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Never fails: types the resolver does not serve become `Other`.
    pub fn from_hickory(hickory_type: HickoryRecordType) -> RecordType {
        RecordType::from(u16::from(hickory_type))
    }
}
