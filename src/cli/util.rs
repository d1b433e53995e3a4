use crate::errors::ReportError;
use std::path::Path;

/// Reads a report as text with `\r\n` and lone `\r` turned into `\n`.
///
/// # Errors
/// `FileNotFound` if the file cannot be opened or read, `Io` if it is not UTF-8.
pub fn read_report(path: &Path) -> Result<String, ReportError> {
    let bytes = std::fs::read(path).map_err(|e| {
        log::warn!("cannot read {}: {e}", path.display());
        ReportError::FileNotFound(path.to_path_buf())
    })?;
    let text = String::from_utf8(bytes)
        .map_err(|e| ReportError::Io(format!("{}: {e}", path.display())))?;
    log::info!("read {} bytes from {}", text.len(), path.display());
    Ok(normalize_newlines(&text))
}

#[must_use]
pub fn normalize_newlines(s: &str) -> String {
    if !s.contains('\r') {
        return s.to_string();
    }
    s.replace("\r\n", "\n").replace('\r', "\n")
}
