/// Benchmark labels recognised verbatim in addition to the `<word> with <ident>` shape.
pub const DEFAULT_LITERAL_LABELS: [&str; 2] = ["Factorial with Raw Type", "Cube with Raw Type"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Literal labels, tried in order after the generic label shape.
    pub literal_labels: Vec<String>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self { literal_labels: DEFAULT_LITERAL_LABELS.iter().map(|s| (*s).to_string()).collect() }
    }
}

impl ExtractOptions {
    /// Appends labels after the current ones, skipping blanks and duplicates.
    #[must_use]
    pub fn with_extra_labels<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for label in extra {
            let label = label.into();
            if label.trim().is_empty() || self.literal_labels.contains(&label) {
                continue;
            }
            self.literal_labels.push(label);
        }
        self
    }
}
