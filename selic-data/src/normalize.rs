//! Turns one scraped rate table into records.
//!
//! ## Table layout
//!
//! | Mês/Ano   | 2019 | 2020 | 2021 |
//! |-----------|------|------|------|
//! | Janeiro   | 0,54 | 0,38 | 0,15 |
//! | Fevereiro | 0,49 | 0,29 |      |
//! | ...       |      |      |      |
//!
//! Row 0 holds years, column 0 holds Portuguese month names. Each year column
//! is read top to bottom and ends at its first blank cell: months of the
//! current year that have not been published yet are left empty, and anything
//! below a blank is ignored.

use std::collections::HashSet;
use std::str::FromStr;

use rust_decimal::Decimal;
use selic_core::{Month, MonthNames, RateRecord};
use tracing::debug;

use crate::config::TableGeometry;
use crate::error::{NumericField, ScrapeError};
use crate::grid::TableGrid;

pub struct TableNormalizer<'a> {
    months: &'a MonthNames,
    geometry: TableGeometry,
}

impl<'a> TableNormalizer<'a> {
    pub fn new(months: &'a MonthNames, geometry: TableGeometry) -> Self {
        Self { months, geometry }
    }

    /// Records of one table. `table` is only used to label errors.
    ///
    /// # Errors
    ///
    /// * [ScrapeError::TableShape]: a row or cell inside the geometry is
    ///   missing before the column's first blank.
    /// * [ScrapeError::NumberParse]: a year header or rate is malformed.
    /// * [ScrapeError::MonthParse]: a month label is not recognised.
    pub fn normalize(
        &self,
        table: usize,
        grid: &TableGrid,
    ) -> Result<HashSet<RateRecord>, ScrapeError> {
        let mut records = HashSet::new();

        for column in 1..self.geometry.columns {
            let mut column_year = None;

            for row in 1..self.geometry.rows {
                let text = self.cell(table, grid, row, column)?;
                if text.trim().is_empty() {
                    debug!(table, column, row, "column ends at blank cell");
                    break;
                }

                let year = match column_year {
                    Some(year) => year,
                    None => *column_year.insert(self.year(table, grid, column)?),
                };
                let month = self.month(table, grid, row)?;
                let rate = parse_rate(text).ok_or_else(|| ScrapeError::NumberParse {
                    table,
                    row,
                    column,
                    field: NumericField::Rate,
                    text: text.trim().to_string(),
                })?;

                records.insert(RateRecord::new(year, month, rate));
            }
        }

        Ok(records)
    }

    fn year(&self, table: usize, grid: &TableGrid, column: usize) -> Result<i32, ScrapeError> {
        let text = self.cell(table, grid, 0, column)?;
        parse_year(text).ok_or_else(|| ScrapeError::NumberParse {
            table,
            row: 0,
            column,
            field: NumericField::Year,
            text: text.trim().to_string(),
        })
    }

    fn month(&self, table: usize, grid: &TableGrid, row: usize) -> Result<Month, ScrapeError> {
        let label = self.cell(table, grid, row, 0)?;
        self.months
            .resolve(label)
            .map_err(|source| ScrapeError::MonthParse { table, row, source })
    }

    fn cell<'g>(
        &self,
        table: usize,
        grid: &'g TableGrid,
        row: usize,
        column: usize,
    ) -> Result<&'g str, ScrapeError> {
        let Some(len) = grid.row_len(row) else {
            return Err(ScrapeError::TableShape {
                table,
                detail: format!(
                    "missing row {row}: table has {} rows, expected {}",
                    grid.row_count(),
                    self.geometry.rows
                ),
            });
        };

        grid.cell(row, column).ok_or_else(|| ScrapeError::TableShape {
            table,
            detail: format!(
                "row {row} has {len} cells, expected at least {}",
                self.geometry.columns
            ),
        })
    }
}

/// Four ASCII digits, surrounding whitespace allowed.
fn parse_year(text: &str) -> Option<i32> {
    let text = text.trim();
    if text.len() != 4 || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// Decimal-comma percentage such as `0,54`: ASCII digits with at most one
/// `,` or `.` between them. Signs and exponents are rejected.
fn parse_rate(text: &str) -> Option<Decimal> {
    let text = text.trim();
    let (whole, fraction) = match text.split_once([',', '.']) {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text, None),
    };
    let digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    if !digits(whole) || !fraction.is_none_or(digits) {
        return None;
    }
    Decimal::from_str(&text.replace(',', ".")).ok()
}
