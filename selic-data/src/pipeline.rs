use selic_core::{MonthNames, RateSet, ReportWriter};
use tracing::{debug, info, warn};

use crate::config::ScrapeConfig;
use crate::error::ScrapeError;
use crate::html::extract_tables;
use crate::normalize::TableNormalizer;
use crate::page::PageSource;

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Tables read from the page.
    pub tables: usize,
    /// Rows written after deduplication.
    pub records: usize,
    /// `(year, month)` pairs published with more than one rate.
    pub conflicts: Vec<(i32, u32)>,
}

/// Fetch, extract, normalize, aggregate, sort and write, in that order.
///
/// The first failure aborts the run; nothing is written unless every table
/// normalized cleanly.
pub async fn run<S, W>(
    source: &S,
    writer: &W,
    config: &ScrapeConfig,
    months: &MonthNames,
) -> Result<RunSummary, ScrapeError>
where
    S: PageSource + ?Sized,
    W: ReportWriter + ?Sized,
{
    info!(url = source.url(), "fetching rate page");
    let html = source.fetch().await?;

    let grids = extract_tables(&html, &config.table_indices)?;
    info!(tables = grids.len(), "extracted rate tables");

    let normalizer = TableNormalizer::new(months, config.geometry);
    let mut rates = RateSet::new();
    for (table, grid) in &grids {
        let records = normalizer.normalize(*table, grid)?;
        debug!(table = *table, records = records.len(), "normalized table");
        rates.extend(records);
    }

    let conflicts = rates.conflicts();
    for &(year, month) in &conflicts {
        warn!(year, month, "more than one rate published for the same month; keeping all");
    }

    let records = rates.into_sorted();
    writer.write(&records)?;

    Ok(RunSummary {
        tables: grids.len(),
        records: records.len(),
        conflicts,
    })
}
