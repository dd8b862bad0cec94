use anyhow::{Context, Result};
use clap::Parser;
use selic_core::MonthNames;
use selic_data::{HttpPageSource, ScrapeConfig};
use selic_xlsx::XlsxReportWriter;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Download the monthly SELIC rates published by Receita Federal and write
/// them to an xlsx report.
///
/// Takes no options: the source URL, the positions of the three rate tables
/// on the page and the output file are fixed. Exits non-zero if the page
/// cannot be fetched, its tables do not parse, or the report cannot be
/// written.
#[derive(Parser, Debug)]
#[command(name = "selic-report")]
#[command(version, about, long_about = None)]
struct Args {}

/// * Honours `RUST_LOG` when set.
/// * Falls back to `info`.
/// * No timestamps or targets.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let _ = Args::parse();
    init_tracing();

    let config = ScrapeConfig::default();

    let source = HttpPageSource::new(&config.url, config.timeout)
        .context("Failed to build HTTP client")?;
    let writer = XlsxReportWriter::new(&config.output).with_sheet_name(&config.sheet_name);
    let months = MonthNames::portuguese();

    let summary = selic_data::run(&source, &writer, &config, &months)
        .await
        .with_context(|| format!("Failed to build SELIC report from {}", config.url))?;

    info!(
        records = summary.records,
        tables = summary.tables,
        path = %config.output.display(),
        "report written"
    );

    Ok(())
}
