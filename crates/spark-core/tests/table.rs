// File: crates/spark-core/tests/table.rs
// Purpose: Validate the tabular variant: windowing, highlighted now cell, units.

use spark_core::{HourlyPoint, HourlyTable, TableOptions};

fn hourly(n: usize) -> Vec<HourlyPoint> {
    (0..n).map(|i| HourlyPoint::new(format!("{i}h"), i as f64)).collect()
}

#[test]
fn table_windows_around_now_and_appends_the_unit() {
    let table = HourlyTable::new(hourly(12), "kt").with_now_index(9);
    let svg = table.to_svg_string(&TableOptions::default()).expect("enough data");
    // window of 8 centered on 9 covers samples 4..=11; last cell carries the unit
    assert!(svg.contains(">11.0kt</text>"));
    assert!(!svg.contains(">3.0</text>"), "sample 3 lies outside the window");
    // highlighted cell background plus emphasized text for the now column
    assert!(svg.contains("<rect "));
    assert!(svg.contains("fill-opacity=\"0.15\""));
    assert!(svg.contains("font-weight=\"600\""));
}

#[test]
fn table_without_now_has_no_highlight() {
    let table = HourlyTable::new(hourly(6), "kt");
    let svg = table.to_svg_string(&TableOptions::default()).expect("enough data");
    assert!(!svg.contains("<rect "));
    assert!(!svg.contains("font-weight=\"600\""));
}

#[test]
fn direction_labels_join_the_time_row() {
    let points = vec![
        HourlyPoint::new("3pm", 12.0).with_direction("NW"),
        HourlyPoint::new("4pm", 14.0).with_direction("N"),
    ];
    let svg = HourlyTable::new(points, "kt")
        .to_svg_string(&TableOptions::default())
        .expect("enough data");
    assert!(svg.contains("3pm NW"));
    assert!(svg.contains("4pm N"));
}

#[test]
fn long_time_labels_are_truncated() {
    let points = vec![
        HourlyPoint::new("15:00h", 12.0),
        HourlyPoint::new("16:00h", 14.0),
    ];
    let svg = HourlyTable::new(points, "kt")
        .to_svg_string(&TableOptions::default())
        .expect("enough data");
    assert!(svg.contains(">15:0</text>"));
    assert!(!svg.contains("15:00h"));
}

#[test]
fn too_little_data_renders_nothing() {
    let opts = TableOptions::default();
    assert!(HourlyTable::new(vec![], "kt").to_svg_string(&opts).is_none());
    assert!(HourlyTable::new(hourly(1), "kt").to_svg_string(&opts).is_none());

    let out = std::path::PathBuf::from("target/test_out/empty_table.svg");
    let wrote = HourlyTable::new(hourly(1), "kt")
        .render_to_svg(&opts, &out)
        .expect("no error for short series");
    assert!(!wrote);
    assert!(!out.exists());
}
