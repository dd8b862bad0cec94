pub mod config;
pub mod error;
pub mod grid;
pub mod html;
pub mod normalize;
pub mod page;
pub mod pipeline;

pub use config::{ScrapeConfig, TableGeometry};
pub use error::{FetchError, NumericField, ScrapeError};
pub use grid::TableGrid;
pub use html::extract_tables;
pub use normalize::TableNormalizer;
pub use page::{HttpPageSource, PageSource};
pub use pipeline::{RunSummary, run};
