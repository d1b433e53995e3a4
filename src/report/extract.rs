use crate::errors::ReportError;
use regex::{Captures, Regex};
use std::sync::LazyLock;

use super::options::ExtractOptions;
use super::types::{BenchmarkRow, ReportModel};

// rule, header, rule, body, terminator; all rules are 79 columns wide
const SECTION_PATTERN: &str = r"(?s)-{79}\n(.*?)\n-{79}\n(.*?)\n={79}";
const GENERIC_LABEL: &str = r"\w+ with [\w:]+";

static SECTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SECTION_PATTERN).expect("section pattern compiles"));

static DEFAULT_EXTRACTOR: LazyLock<Extractor> = LazyLock::new(|| {
    Extractor::new(&ExtractOptions::default()).expect("default label set compiles")
});

/// Compiled row matcher for one label set.
#[derive(Debug, Clone)]
pub struct Extractor {
    row_re: Regex,
}

impl Extractor {
    /// Compiles the row pattern for `opts`.
    ///
    /// # Errors
    /// Returns `ReportError::Pattern` if the resulting expression exceeds the
    /// regex engine's size limits.
    pub fn new(opts: &ExtractOptions) -> Result<Self, ReportError> {
        let pattern = row_pattern(&opts.literal_labels);
        log::debug!("row pattern: {pattern}");
        Ok(Self { row_re: Regex::new(&pattern)? })
    }

    /// Splits `text` into sections and collects the rows of each.
    #[must_use]
    pub fn extract(&self, text: &str) -> ReportModel {
        let mut model = ReportModel::new();
        for caps in SECTION_RE.captures_iter(text) {
            let name = group(&caps, 1).trim();
            let rows = self.rows(group(&caps, 2));
            if rows.is_empty() {
                log::debug!("section '{name}' has no benchmark rows");
            }
            if model.get(name).is_some() {
                log::debug!("section '{name}' repeated; keeping the later block");
            }
            model.insert(name.to_string(), rows);
        }
        log::debug!("extracted {} sections, {} rows", model.len(), model.row_count());
        model
    }

    /// Every row match in a section body, in order. Other lines are skipped.
    #[must_use]
    pub fn rows(&self, body: &str) -> Vec<BenchmarkRow> {
        self.row_re
            .captures_iter(body)
            .map(|caps| {
                BenchmarkRow::from_fields(std::array::from_fn(|i| group(&caps, i + 1)))
            })
            .collect()
    }
}

/// Extracts with the default label set.
#[must_use]
pub fn extract(text: &str) -> ReportModel {
    DEFAULT_EXTRACTOR.extract(text)
}

fn row_pattern(literal_labels: &[String]) -> String {
    let mut labels = vec![GENERIC_LABEL.to_string()];
    labels.extend(
        literal_labels.iter().filter(|l| !l.trim().is_empty()).map(|l| regex::escape(l)),
    );
    format!(
        r"({})\s+(\d+)\s+(\d+)\s+([\d.]+ ms){}",
        labels.join("|"),
        r"\s+([\d.]+ ns)".repeat(6)
    )
}

fn group<'t>(caps: &Captures<'t>, i: usize) -> &'t str {
    caps.get(i).map_or("", |m| m.as_str())
}
