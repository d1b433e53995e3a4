use super::types::{BenchmarkRow, ReportModel};

pub const HEADER_ROW: &str = "<tr><th>Benchmark Name</th><th>Samples</th><th>Iterations</th><th>Estimated</th><th>Mean</th><th>Low Mean</th><th>High Mean</th><th>Std Dev</th><th>Low Std Dev</th><th>High Std Dev</th></tr>";

/// Renders one bordered `<table>` per section, each followed by a newline.
///
/// Cell text is emitted as-is: rows only ever hold what the row pattern
/// matched, so there is nothing to escape.
#[must_use]
pub fn render(model: &ReportModel) -> String {
    let mut html = String::new();
    for section in model.sections() {
        html.push_str("<table border=\"1\">\n");
        html.push_str(HEADER_ROW);
        html.push('\n');
        for row in &section.rows {
            push_row(&mut html, row);
        }
        html.push_str("</table>\n");
    }
    html
}

fn push_row(html: &mut String, row: &BenchmarkRow) {
    html.push_str("<tr>");
    for cell in row.fields() {
        html.push_str("<td>");
        html.push_str(cell);
        html.push_str("</td>");
    }
    html.push_str("</tr>\n");
}
