use super::super::_support::{SAMPLE, SAMPLE_HTML, block, row_line};
use catch2html::ReportError;
use catch2html::cli::{Command, ConvertReport, run};
use catch2html::report::HEADER_ROW;
use std::fs;
use tempfile::tempdir;

fn convert_cmd(file: std::path::PathBuf) -> Command {
    Command::Convert { file }
}

#[test]
fn test_cli_convert_sample() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bench.txt");
    fs::write(&path, SAMPLE).unwrap();

    let mut out = Vec::new();
    let rep = run(convert_cmd(path), &mut out).unwrap();
    assert_eq!(rep, ConvertReport { sections: 2, rows: 5 });
    assert_eq!(String::from_utf8(out).unwrap(), SAMPLE_HTML);
}

#[test]
fn test_cli_convert_crlf_input() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bench_crlf.txt");
    fs::write(&path, SAMPLE.replace('\n', "\r\n")).unwrap();

    let mut out = Vec::new();
    let rep = run(convert_cmd(path), &mut out).unwrap();
    assert_eq!(rep.rows, 5);
    assert_eq!(String::from_utf8(out).unwrap(), SAMPLE_HTML);
}

#[test]
fn test_cli_empty_file_prints_blank_line() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.txt");
    fs::write(&path, "").unwrap();

    let mut out = Vec::new();
    let rep = run(convert_cmd(path), &mut out).unwrap();
    assert_eq!(rep, ConvertReport::default());
    assert_eq!(out, b"\n");
}

#[test]
fn test_cli_missing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.txt");
    let mut out = Vec::new();
    let err = run(convert_cmd(path.clone()), &mut out).unwrap_err();
    match &err {
        ReportError::FileNotFound(p) => assert_eq!(p, &path),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(err.to_string(), format!("Error: File '{}' not found.", path.display()));
    assert!(out.is_empty());
}

#[test]
fn test_cli_uses_builtin_labels_only() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("custom.txt");
    let body = row_line(
        "Baseline",
        ["100", "3", "1.5 ms", "4.1 ns", "4.0 ns", "4.2 ns", "0.1 ns", "0.05 ns", "0.2 ns"],
    );
    fs::write(&path, block("custom", &body)).unwrap();

    let mut out = Vec::new();
    let rep = run(convert_cmd(path), &mut out).unwrap();
    assert_eq!(rep, ConvertReport { sections: 1, rows: 0 });
    let html = String::from_utf8(out).unwrap();
    assert_eq!(html, format!("<table border=\"1\">\n{}\n</table>\n\n", HEADER_ROW));
}
