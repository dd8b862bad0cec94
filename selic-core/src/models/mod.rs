mod rate_record;
mod rate_set;

pub use rate_record::RateRecord;
pub use rate_set::RateSet;
