use std::path::PathBuf;

use rvtools_csv2excel::model::{CellValue, ColumnKind, CsvTable};
use rvtools_csv2excel::style::{Highlight, StyleSheet, clamp_width, column_widths, highlight_for};

fn text(value: &str) -> CellValue {
    CellValue::Text(value.to_string())
}

#[test]
fn cells_are_coerced_to_narrowest_type() {
    assert_eq!(CellValue::parse(""), CellValue::Empty);
    assert_eq!(CellValue::parse("NaN"), CellValue::Empty);
    assert_eq!(CellValue::parse("N/A"), CellValue::Empty);
    assert_eq!(CellValue::parse("42"), CellValue::Integer(42));
    assert_eq!(CellValue::parse("-7"), CellValue::Integer(-7));
    assert_eq!(CellValue::parse("-3.5"), CellValue::Float(-3.5));
    assert_eq!(CellValue::parse("1e3"), CellValue::Float(1000.0));
    assert_eq!(CellValue::parse("TRUE"), CellValue::Boolean(true));
    assert_eq!(CellValue::parse("false"), CellValue::Boolean(false));
    assert_eq!(CellValue::parse("4.4.5.0"), text("4.4.5.0"));
    assert_eq!(CellValue::parse("inf"), text("inf"));
    assert_eq!(
        CellValue::parse("99999999999999999999"),
        text("99999999999999999999")
    );
    assert_eq!(CellValue::parse(" padded "), text(" padded "));
}

#[test]
fn display_follows_exported_text() {
    assert_eq!(CellValue::Boolean(true).display(), "True");
    assert_eq!(CellValue::Float(2.0).display(), "2.0");
    assert_eq!(CellValue::Float(0.25).display(), "0.25");
    assert_eq!(CellValue::Integer(0).display_len(), 0);
    assert_eq!(CellValue::Float(0.0).display_len(), 0);
    assert_eq!(CellValue::Boolean(false).display_len(), 5);
    assert_eq!(text("héllo").display_len(), 5);
}

#[test]
fn conditional_highlights_match_status_columns() {
    assert_eq!(
        highlight_for("Powerstate", &text("poweredOff")),
        Some(Highlight::Red)
    );
    assert_eq!(highlight_for("Powerstate", &text("poweredOn")), None);
    assert_eq!(
        highlight_for("Config status", &text("green")),
        Some(Highlight::Green)
    );
    assert_eq!(
        highlight_for("Config status", &text("red")),
        Some(Highlight::Red)
    );
    assert_eq!(
        highlight_for("Config status", &text("yellow")),
        Some(Highlight::Orange)
    );
    assert_eq!(highlight_for("Config status", &text("gray")), None);
    assert_eq!(highlight_for("VM", &text("poweredOff")), None);
    assert_eq!(Highlight::Orange.rgb(), 0xFFA500);

    let styles = StyleSheet::new();
    assert_eq!(styles.for_cell("VM", &text("web01")), &styles.data);
    assert_ne!(styles.for_cell("Powerstate", &text("poweredOff")), &styles.data);
}

#[test]
fn column_widths_are_padded_and_clamped() {
    let table = CsvTable {
        sheet_name: "vInfo".to_string(),
        source: PathBuf::from("RVTools_tabvInfo.csv"),
        columns: vec![
            "VM".to_string(),
            "Config status".to_string(),
            "Annotation".to_string(),
            "CPUs".to_string(),
        ],
        rows: vec![
            vec![
                text("web01"),
                text("green"),
                text(&"n".repeat(150)),
                CellValue::Integer(0),
            ],
            vec![
                CellValue::Empty,
                text("yellow"),
                CellValue::Empty,
                CellValue::Integer(123456789),
            ],
        ],
    };

    assert_eq!(column_widths(&table), vec![8.0, 15.0, 100.0, 11.0]);
    assert_eq!(clamp_width(0), 8.0);
    assert_eq!(clamp_width(40), 42.0);
}

#[test]
fn none_is_a_missing_value() {
    assert_eq!(CellValue::parse("None"), CellValue::Empty);
    assert_eq!(CellValue::parse("none"), text("none"));
}

#[test]
fn columns_share_one_inferred_type() {
    assert_eq!(ColumnKind::infer(["1", "2", ""]), ColumnKind::Float);
    assert_eq!(ColumnKind::infer(["1", "2"]), ColumnKind::Integer);
    assert_eq!(ColumnKind::infer(["1", "2.5"]), ColumnKind::Float);
    assert_eq!(ColumnKind::infer(["True", "", "false"]), ColumnKind::Boolean);
    assert_eq!(ColumnKind::infer(["True", "1"]), ColumnKind::Text);
    assert_eq!(ColumnKind::infer(["7.0.3", "8"]), ColumnKind::Text);
    assert_eq!(ColumnKind::infer(["", "NA"]), ColumnKind::Text);

    assert_eq!(CellValue::coerce("007", ColumnKind::Text), text("007"));
    assert_eq!(CellValue::coerce("8", ColumnKind::Float), CellValue::Float(8.0));
    assert_eq!(CellValue::coerce("NA", ColumnKind::Text), CellValue::Empty);
}
