pub mod models;
pub mod month;
pub mod report;

pub use chrono::{Locale, Month};
pub use models::*;
pub use month::{MonthNames, MonthParseError};
pub use report::{REPORT_HEADER, ReportError, ReportWriter};
