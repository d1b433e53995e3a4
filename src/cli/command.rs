use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Read a Catch2 console report and print it as HTML tables.
    Convert { file: PathBuf },
}
