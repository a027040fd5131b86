use chrono::NaiveDate;

/// Source of the current UTC date, used for SOA serials.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}
