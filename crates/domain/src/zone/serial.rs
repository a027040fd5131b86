use crate::DomainError;
use chrono::NaiveDate;

/// SOA serial for `date` in `YYYYMMDD` form.
pub fn soa_serial(date: NaiveDate) -> Result<u32, DomainError> {
    date.format("%Y%m%d")
        .to_string()
        .parse::<u32>()
        .map_err(|_| DomainError::InvalidSerial(date.to_string()))
}
