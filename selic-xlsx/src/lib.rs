use std::io::Write;
use std::path::{Path, PathBuf};

use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{Format, Workbook, XlsxError};
use selic_core::{REPORT_HEADER, RateRecord, ReportError, ReportWriter};
use tempfile::NamedTempFile;
use tracing::debug;

pub const DEFAULT_SHEET_NAME: &str = "Selic";

/// Writes the report as a single-sheet `.xlsx` workbook.
///
/// The workbook is built in memory and then swapped into place through a
/// temporary file in the destination directory, so a failed run never leaves
/// a truncated file behind.
pub struct XlsxReportWriter {
    path: PathBuf,
    sheet_name: String,
}

impl XlsxReportWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
        }
    }

    pub fn with_sheet_name(mut self, sheet_name: impl Into<String>) -> Self {
        self.sheet_name = sheet_name.into();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize `records` to xlsx bytes without touching the filesystem.
    pub fn render(&self, records: &[RateRecord]) -> Result<Vec<u8>, ReportError> {
        let header_format = Format::new().set_bold();
        let rate_format = Format::new().set_num_format("0.00");

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet
            .set_name(self.sheet_name.as_str())
            .map_err(serialize_error)?;

        for (col, title) in (0u16..).zip(REPORT_HEADER) {
            sheet
                .write_string_with_format(0, col, title, &header_format)
                .map_err(serialize_error)?;
        }

        for (row, record) in (1u32..).zip(records) {
            let rate = record.rate().to_f64().ok_or_else(|| {
                ReportError::Serialize(format!(
                    "rate {} for {}-{:02} has no f64 representation",
                    record.rate(),
                    record.year(),
                    record.month()
                ))
            })?;

            sheet
                .write_number(row, 0, record.year())
                .map_err(serialize_error)?;
            sheet
                .write_number(row, 1, record.month())
                .map_err(serialize_error)?;
            sheet
                .write_number_with_format(row, 2, rate, &rate_format)
                .map_err(serialize_error)?;
        }

        workbook.save_to_buffer().map_err(serialize_error)
    }

    fn persist(&self, bytes: &[u8]) -> Result<(), ReportError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut staged = NamedTempFile::new_in(dir).map_err(|e| self.io_error(e))?;
        staged.write_all(bytes).map_err(|e| self.io_error(e))?;
        staged.as_file().sync_all().map_err(|e| self.io_error(e))?;
        staged
            .persist(&self.path)
            .map_err(|e| self.io_error(e.error))?;

        Ok(())
    }

    fn io_error(&self, source: std::io::Error) -> ReportError {
        ReportError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl ReportWriter for XlsxReportWriter {
    fn write(&self, records: &[RateRecord]) -> Result<(), ReportError> {
        let bytes = self.render(records)?;
        self.persist(&bytes)?;

        debug!(
            path = %self.path.display(),
            rows = records.len(),
            bytes = bytes.len(),
            "workbook written"
        );
        Ok(())
    }
}

fn serialize_error(err: XlsxError) -> ReportError {
    ReportError::Serialize(err.to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use selic_core::Month;

    use super::*;

    #[test]
    fn test_render_empty_is_a_zip_archive() {
        let writer = XlsxReportWriter::new("unused.xlsx");

        let bytes = writer.render(&[]).expect("should render");

        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_render_rejects_invalid_sheet_name() {
        let writer = XlsxReportWriter::new("unused.xlsx").with_sheet_name("rates/2024");

        let err = writer.render(&[]).expect_err("sheet name with '/' is invalid");

        assert!(matches!(err, ReportError::Serialize(_)), "got {err:?}");
    }

    #[test]
    fn test_write_into_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing").join("report.xlsx");
        let writer = XlsxReportWriter::new(&path);
        let records = [RateRecord::new(2020, Month::January, dec!(0.38))];

        let err = writer.write(&records).expect_err("parent does not exist");

        let ReportError::Io { path: reported, .. } = err else {
            panic!("expected Io error, got: {:?}", err);
        };
        assert_eq!(reported, path);
        assert!(!path.exists());
    }

    #[test]
    fn test_path_and_sheet_name_defaults() {
        let writer = XlsxReportWriter::new("out.xlsx");

        assert_eq!(writer.path(), Path::new("out.xlsx"));
        assert_eq!(writer.sheet_name, DEFAULT_SHEET_NAME);
    }
}
