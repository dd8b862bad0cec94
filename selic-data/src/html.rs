use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::error::ScrapeError;
use crate::grid::TableGrid;

static TABLE: LazyLock<Selector> = LazyLock::new(|| selector("table"));
static ROW: LazyLock<Selector> = LazyLock::new(|| selector("tr"));
static CELL: LazyLock<Selector> = LazyLock::new(|| selector("td, th"));

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector is valid CSS")
}

/// Grids for the `<table>` elements at `indices` (zero-based, document
/// order), paired with their index.
///
/// # Errors
///
/// [ScrapeError::TableShape] when the page has fewer tables than an index
/// requires.
pub fn extract_tables(
    html: &str,
    indices: &[usize],
) -> Result<Vec<(usize, TableGrid)>, ScrapeError> {
    let document = Html::parse_document(html);
    let tables: Vec<ElementRef<'_>> = document.select(&TABLE).collect();
    debug!(tables = tables.len(), "parsed page");

    indices
        .iter()
        .map(|&index| {
            let table = tables.get(index).ok_or_else(|| ScrapeError::TableShape {
                table: index,
                detail: format!("page has only {} tables", tables.len()),
            })?;
            Ok((index, grid_from_table(*table)))
        })
        .collect()
}

fn grid_from_table(table: ElementRef<'_>) -> TableGrid {
    TableGrid::new(
        table
            .select(&ROW)
            .map(|row| row.select(&CELL).map(cell_text).collect())
            .collect(),
    )
}

/// Text content with whitespace runs (non-breaking spaces included) collapsed.
fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const PAGE: &str = r#"
<html><body>
  <table><tr><td>menu</td></tr></table>
  <table>
    <tr><th>Mês/Ano</th><th><strong>2020</strong></th></tr>
    <tr><td> Janeiro </td><td>0,38</td></tr>
    <tr><td>Fevereiro</td><td>&nbsp;</td></tr>
  </table>
  <table>
    <tr><td>Mês/Ano</td><td>2019</td></tr>
    <tr><td>Janeiro</td><td><span>0,</span><span>54</span></td></tr>
  </table>
</body></html>
"#;

    #[test]
    fn test_extracts_tables_by_position() {
        let tables = extract_tables(PAGE, &[2, 1]).expect("should extract");

        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].0, 2);
        assert_eq!(
            tables[0].1,
            TableGrid::from_cells([["Mês/Ano", "2019"], ["Janeiro", "0,54"]])
        );
        assert_eq!(tables[1].0, 1);
        assert_eq!(
            tables[1].1,
            TableGrid::from_cells([
                ["Mês/Ano", "2020"],
                ["Janeiro", "0,38"],
                ["Fevereiro", ""],
            ])
        );
    }

    #[test]
    fn test_missing_table_is_table_shape_error() {
        let err = extract_tables(PAGE, &[1, 5]).expect_err("page has three tables");

        let ScrapeError::TableShape { table, detail } = err else {
            panic!("Expected TableShape error, got: {:?}", err);
        };
        assert_eq!(table, 5);
        assert_eq!(detail, "page has only 3 tables");
    }

    #[test]
    fn test_no_indices_yields_nothing() {
        let tables = extract_tables(PAGE, &[]).expect("should extract");

        assert!(tables.is_empty());
    }
}
