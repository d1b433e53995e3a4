use super::super::_support::{SAMPLE, block, row_line};
use catch2html::report::{ExtractOptions, Extractor, extract};

#[test]
fn sample_report_sections_in_order() {
    let model = extract(SAMPLE);
    let names: Vec<&str> = model.sections().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["factorial - int64_t", "cube - double"]);
    assert_eq!(model.get("factorial - int64_t").unwrap().len(), 3);
    // `Cube with std::optional` reports its mean in microseconds and is skipped
    let cube = model.get("cube - double").unwrap();
    assert_eq!(cube.len(), 2);
    assert_eq!(cube[0].name, "Cube with expected64");
    assert_eq!(cube[1].name, "Cube with Raw Type");
    assert_eq!(model.row_count(), 5);
}

#[test]
fn sample_row_fields_verbatim() {
    let model = extract(SAMPLE);
    let raw = &model.get("factorial - int64_t").unwrap()[2];
    assert_eq!(
        raw.fields(),
        [
            "Factorial with Raw Type",
            "100",
            "1",
            "2.1054 ms",
            "21.0398 ns",
            "20.9132 ns",
            "21.2311 ns",
            "0.781092 ns",
            "0.571206 ns",
            "1.06993 ns"
        ]
    );
    let opt = &model.get("factorial - int64_t").unwrap()[1];
    assert_eq!(opt.name, "Factorial with std::optional");
    assert_eq!(opt.low_std_dev, "0.925806 ns");
}

#[test]
fn rows_wrapped_over_three_lines() {
    let body = row_line(
        "Sum with int",
        ["100", "3", "1.5 ms", "4.1 ns", "4.0 ns", "4.2 ns", "0.1 ns", "0.05 ns", "0.2 ns"],
    );
    let model = extract(&block("sum - int", &body));
    let rows = model.get("sum - int").unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].iterations, "3");
    assert_eq!(rows[0].high_std_dev, "0.2 ns");
}

#[test]
fn text_outside_blocks_is_ignored() {
    let body = row_line(
        "Sum with int",
        ["100", "3", "1.5 ms", "4.1 ns", "4.0 ns", "4.2 ns", "0.1 ns", "0.05 ns", "0.2 ns"],
    );
    let text = format!("{body}\n\nnot a section\n{}", block("inside", &body));
    let model = extract(&text);
    assert_eq!(model.len(), 1);
    assert_eq!(model.get("inside").unwrap().len(), 1);
}

#[test]
fn extra_labels_pick_up_custom_rows() {
    let body = row_line(
        "Baseline",
        ["100", "3", "1.5 ms", "4.1 ns", "4.0 ns", "4.2 ns", "0.1 ns", "0.05 ns", "0.2 ns"],
    );
    let text = block("custom", &body);
    assert_eq!(extract(&text).row_count(), 0);
    let ex = Extractor::new(&ExtractOptions::default().with_extra_labels(["Baseline"])).unwrap();
    assert_eq!(ex.extract(&text).row_count(), 1);
}

#[test]
fn model_serializes_sections_and_rows() {
    let model = extract(SAMPLE);
    let v = serde_json::to_value(&model).unwrap();
    let sections = v["sections"].as_array().unwrap();
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[1]["name"], "cube - double");
    assert_eq!(sections[1]["rows"][0]["estimated"], "2.0152 ms");
    assert!(v.get("index").is_none());
}
