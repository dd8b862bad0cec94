use std::fmt;

use selic_core::{MonthParseError, ReportError};
use thiserror::Error;

/// Errors from retrieving the source page.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned an empty body")]
    EmptyBody { url: String },
}

/// Which numeric cell failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    Year,
    Rate,
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Year => f.write_str("year"),
            Self::Rate => f.write_str("rate"),
        }
    }
}

/// Every way a run can fail. Table, row and column are positions in the
/// page's `<table>` order and the table's own row/cell order, zero-based.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("table {table}: {detail} (has the page layout changed?)")]
    TableShape { table: usize, detail: String },

    #[error("table {table}, row {row}: {source}")]
    MonthParse {
        table: usize,
        row: usize,
        #[source]
        source: MonthParseError,
    },

    #[error("table {table}, row {row}, column {column}: invalid {field} '{text}'")]
    NumberParse {
        table: usize,
        row: usize,
        column: usize,
        field: NumericField,
        text: String,
    },

    #[error("Write error: {0}")]
    Write(#[from] ReportError),
}
