use std::path::PathBuf;
use std::time::Duration;

use selic_xlsx::DEFAULT_SHEET_NAME;

/// Receita Federal page publishing the monthly SELIC rates.
pub const SOURCE_URL: &str = "http://receita.economia.gov.br/orientacao/tributaria/pagamentos-e-parcelamentos/taxa-de-juros-selic";

pub const OUTPUT_FILE: &str = "selic_monthly.xlsx";

/// Zero-based positions of the monthly tables among the page's `<table>`
/// elements (the 2nd, 3rd and 4th). Nothing else ties the scraper to the
/// page, so a layout change on the site shows up here first.
pub const TABLE_INDICES: [usize; 3] = [1, 2, 3];

/// Month label column plus eight year columns; year header row plus twelve
/// month rows.
pub const TABLE_GEOMETRY: TableGeometry = TableGeometry {
    columns: 9,
    rows: 13,
};

pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// How much of each table is read, header row and column included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableGeometry {
    pub columns: usize,
    pub rows: usize,
}

/// Everything a run needs to know about the source page and the output.
///
/// | field           | default                          |
/// |-----------------|----------------------------------|
/// | `url`           | [`SOURCE_URL`]                   |
/// | `output`        | [`OUTPUT_FILE`]                  |
/// | `sheet_name`    | [`DEFAULT_SHEET_NAME`]           |
/// | `table_indices` | [`TABLE_INDICES`]                |
/// | `geometry`      | [`TABLE_GEOMETRY`]               |
/// | `timeout`       | [`FETCH_TIMEOUT`]                |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeConfig {
    pub url: String,
    pub output: PathBuf,
    pub sheet_name: String,
    pub table_indices: Vec<usize>,
    pub geometry: TableGeometry,
    pub timeout: Duration,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            url: SOURCE_URL.to_string(),
            output: PathBuf::from(OUTPUT_FILE),
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            table_indices: TABLE_INDICES.to_vec(),
            geometry: TABLE_GEOMETRY,
            timeout: FETCH_TIMEOUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_selects_second_through_fourth_tables() {
        let config = ScrapeConfig::default();

        assert_eq!(config.table_indices, vec![1, 2, 3]);
        assert_eq!(config.geometry, TableGeometry { columns: 9, rows: 13 });
        assert_eq!(config.output, PathBuf::from("selic_monthly.xlsx"));
        assert_eq!(config.sheet_name, "Selic");
    }
}
