use std::path::PathBuf;

use thiserror::Error;

use crate::models::RateRecord;

/// Column titles of every report, in order.
pub const REPORT_HEADER: [&str; 3] = ["Year", "Month", "Rate (%)"];

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Serialization error: {0}")]
    Serialize(String),

    #[error("cannot write '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Destination for the final record sequence.
///
/// `records` arrive already sorted; implementations write them in the given
/// order, after a [`REPORT_HEADER`] row.
pub trait ReportWriter {
    fn write(&self, records: &[RateRecord]) -> Result<(), ReportError>;
}
