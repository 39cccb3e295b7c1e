use std::fs;

use rvtools_csv2excel::ToolError;
use rvtools_csv2excel::io::csv_read::{TextEncoding, decode, read_csv_table};
use rvtools_csv2excel::model::CellValue;
use tempfile::tempdir;

#[test]
fn reads_header_and_coerces_values() {
    let temp_dir = tempdir().expect("temporary directory");
    let path = temp_dir.path().join("RVTools_tabvInfo.csv");
    fs::write(
        &path,
        "\u{feff} VM , CPUs,Memory,Template,Annotation\nweb01,2,4096.5,False,\ndb01,4\n\n",
    )
    .expect("fixture written");

    let table = read_csv_table(&path, "vInfo").expect("table read");
    assert_eq!(table.sheet_name, "vInfo");
    assert_eq!(table.source, path);
    assert_eq!(table.columns, vec!["VM", "CPUs", "Memory", "Template", "Annotation"]);
    assert_eq!(
        table.rows,
        vec![
            vec![
                CellValue::Text("web01".into()),
                CellValue::Integer(2),
                CellValue::Float(4096.5),
                CellValue::Boolean(false),
                CellValue::Empty,
            ],
            vec![
                CellValue::Text("db01".into()),
                CellValue::Integer(4),
                CellValue::Empty,
                CellValue::Empty,
                CellValue::Empty,
            ],
        ]
    );
}

#[test]
fn quoted_fields_accept_backslash_escapes() {
    let temp_dir = tempdir().expect("temporary directory");
    let path = temp_dir.path().join("notes.csv");
    fs::write(
        &path,
        "VM,Annotation\nweb01,\"owner: ops, tier \\\"gold\\\"\"\nweb02,\"say \"\"hi\"\"\"\n",
    )
    .expect("fixture written");

    let table = read_csv_table(&path, "notes").expect("table read");
    assert_eq!(
        table.rows[0][1],
        CellValue::Text("owner: ops, tier \"gold\"".into())
    );
    assert_eq!(table.rows[1][1], CellValue::Text("say \"hi\"".into()));
}

#[test]
fn latin1_files_are_decoded() {
    let temp_dir = tempdir().expect("temporary directory");
    let path = temp_dir.path().join("latin.csv");
    fs::write(&path, b"VM,Datacenter\nweb01,Z\xfcrich\n").expect("fixture written");

    let table = read_csv_table(&path, "latin").expect("table read");
    assert_eq!(table.rows[0][1], CellValue::Text("Zürich".into()));

    let (_, encoding) = decode(b"caf\xe9");
    assert_eq!(encoding, TextEncoding::Windows1252);
    let (text, encoding) = decode("\u{feff}café".as_bytes());
    assert_eq!(encoding, TextEncoding::Utf8);
    assert_eq!(text, "café");
}

#[test]
fn duplicate_and_blank_headers_are_renamed() {
    let temp_dir = tempdir().expect("temporary directory");
    let path = temp_dir.path().join("dupes.csv");
    fs::write(&path, "Name,Name,,Name\na,b,c,d\n").expect("fixture written");

    let table = read_csv_table(&path, "dupes").expect("table read");
    assert_eq!(table.columns, vec!["Name", "Name.1", "Unnamed: 2", "Name.2"]);
    assert_eq!(table.column_index("Name.2"), Some(3));
}

#[test]
fn falls_back_to_unquoted_parsing() {
    let temp_dir = tempdir().expect("temporary directory");
    let path = temp_dir.path().join("stray.csv");
    fs::write(&path, "\"A,B\",C\n1,2,3\n").expect("fixture written");

    let table = read_csv_table(&path, "stray").expect("table read");
    assert_eq!(table.columns, vec!["\"A", "B\"", "C"]);
    assert_eq!(
        table.rows,
        vec![vec![
            CellValue::Integer(1),
            CellValue::Integer(2),
            CellValue::Integer(3),
        ]]
    );
}

#[test]
fn empty_and_ragged_files_are_rejected() {
    let temp_dir = tempdir().expect("temporary directory");
    let empty = temp_dir.path().join("empty.csv");
    fs::write(&empty, "").expect("fixture written");
    assert!(matches!(
        read_csv_table(&empty, "empty"),
        Err(ToolError::EmptyCsv(_))
    ));

    let ragged = temp_dir.path().join("ragged.csv");
    fs::write(&ragged, "A,B\n1,2,3\n").expect("fixture written");
    assert!(matches!(
        read_csv_table(&ragged, "ragged"),
        Err(ToolError::Unreadable { .. })
    ));
}

#[test]
fn mixed_columns_keep_their_text() {
    let temp_dir = tempdir().expect("temporary directory");
    let path = temp_dir.path().join("versions.csv");
    fs::write(&path, "Version,Annotation,Disks\n7.0.3,hello,1\n8,007,\n").expect("fixture written");

    let table = read_csv_table(&path, "versions").expect("table read");
    assert_eq!(
        table.rows,
        vec![
            vec![
                CellValue::Text("7.0.3".into()),
                CellValue::Text("hello".into()),
                CellValue::Float(1.0),
            ],
            vec![
                CellValue::Text("8".into()),
                CellValue::Text("007".into()),
                CellValue::Empty,
            ],
        ]
    );
}
