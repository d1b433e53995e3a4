//! Catch2 benchmark console output → structured rows → HTML tables.
//!
//! `extract` splits a report into sections delimited by the 79-column
//! `---`/`===` rules Catch2 prints and pulls ten-field benchmark rows out of each
//! section body. `render` turns the resulting model into one `<table>` per section.
mod extract;
mod options;
mod render;
mod types;

pub use extract::{Extractor, extract};
pub use options::{DEFAULT_LITERAL_LABELS, ExtractOptions};
pub use render::{HEADER_ROW, render};
pub use types::{BenchmarkRow, ReportModel, Section};
