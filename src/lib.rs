pub mod cli;
pub mod config;
pub mod errors;
pub mod logger;
pub mod report;

pub use errors::ReportError;
pub use report::{BenchmarkRow, ReportModel, Section, extract, render};

/// Extracts every section of a Catch2 report and renders it as HTML tables.
#[must_use]
pub fn convert(text: &str) -> String {
    render(&extract(text))
}
