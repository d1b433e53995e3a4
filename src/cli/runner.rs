use crate::errors::ReportError;
use crate::report;
use std::io::Write;

use super::command::Command;
use super::util::read_report;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConvertReport {
    pub sections: usize,
    pub rows: usize,
}

/// Runs `cmd`, writing its output to `out`.
///
/// # Errors
/// `FileNotFound` for an unreadable input, `Io` for non UTF-8 input or a failed
/// write.
pub fn run<W: Write>(cmd: Command, out: &mut W) -> Result<ConvertReport, ReportError> {
    match cmd {
        Command::Convert { file } => {
            let text = read_report(&file)?;
            let model = report::extract(&text);
            let html = report::render(&model);
            writeln!(out, "{html}").map_err(|e| ReportError::Io(e.to_string()))?;
            out.flush().map_err(|e| ReportError::Io(e.to_string()))?;
            let rep = ConvertReport { sections: model.len(), rows: model.row_count() };
            log::info!(
                "convert: file={}, sections={}, rows={}",
                file.display(),
                rep.sections,
                rep.rows
            );
            Ok(rep)
        }
    }
}
