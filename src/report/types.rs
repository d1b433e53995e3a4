use serde::Serialize;
use std::collections::HashMap;

/// One benchmark result line. Every field keeps the text exactly as printed,
/// units included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BenchmarkRow {
    pub name: String,
    pub samples: String,
    pub iterations: String,
    pub estimated: String,
    pub mean: String,
    pub low_mean: String,
    pub high_mean: String,
    pub std_dev: String,
    pub low_std_dev: String,
    pub high_std_dev: String,
}

impl BenchmarkRow {
    pub const COLUMNS: [&'static str; 10] = [
        "Benchmark Name",
        "Samples",
        "Iterations",
        "Estimated",
        "Mean",
        "Low Mean",
        "High Mean",
        "Std Dev",
        "Low Std Dev",
        "High Std Dev",
    ];

    /// Builds a row from ten fields in column order.
    #[must_use]
    pub fn from_fields(fields: [&str; 10]) -> Self {
        let [name, samples, iterations, estimated, mean, low_mean, high_mean, std_dev, low_std_dev, high_std_dev] =
            fields.map(str::to_string);
        Self {
            name,
            samples,
            iterations,
            estimated,
            mean,
            low_mean,
            high_mean,
            std_dev,
            low_std_dev,
            high_std_dev,
        }
    }

    /// Fields in column order.
    #[must_use]
    pub fn fields(&self) -> [&str; 10] {
        [
            self.name.as_str(),
            self.samples.as_str(),
            self.iterations.as_str(),
            self.estimated.as_str(),
            self.mean.as_str(),
            self.low_mean.as_str(),
            self.high_mean.as_str(),
            self.std_dev.as_str(),
            self.low_std_dev.as_str(),
            self.high_std_dev.as_str(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub name: String,
    pub rows: Vec<BenchmarkRow>,
}

/// Sections keyed by header, in the order each header first appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReportModel {
    sections: Vec<Section>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl ReportModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a section. A repeated name replaces the earlier rows but keeps
    /// the earlier position.
    pub fn insert(&mut self, name: String, rows: Vec<BenchmarkRow>) {
        if let Some(&pos) = self.index.get(&name) {
            self.sections[pos].rows = rows;
            return;
        }
        self.index.insert(name.clone(), self.sections.len());
        self.sections.push(Section { name, rows });
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[BenchmarkRow]> {
        self.index.get(name).map(|&pos| self.sections[pos].rows.as_slice())
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Total number of rows across all sections.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.sections.iter().map(|s| s.rows.len()).sum()
    }
}
