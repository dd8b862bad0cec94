use chrono::Month;
use rust_decimal::Decimal;

/// One published monthly rate.
///
/// Two records with the same year, month and rate are the same record.
/// Ordering is year, then month, then rate, so records sharing a period but
/// differing in rate stay distinct inside an ordered set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RateRecord {
    year: i32,
    month: u32,
    rate: Decimal,
}

impl RateRecord {
    pub fn new(year: i32, month: Month, rate: Decimal) -> Self {
        Self {
            year,
            month: month.number_from_month(),
            rate,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month ordinal, 1 through 12.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Rate as a percentage (e.g. `1.15` for 1.15%).
    pub fn rate(&self) -> Decimal {
        self.rate
    }

    pub fn period(&self) -> (i32, u32) {
        (self.year, self.month)
    }
}
