use std::borrow::Cow;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use encoding_rs::WINDOWS_1252;
use tracing::{debug, instrument, warn};

use crate::rvtools::tools::error::{Result, ToolError};
use crate::rvtools::tools::model::{CellValue, ColumnKind, CsvTable};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
/// Bytes inspected when deciding whether the file uses quoted fields.
const QUOTE_SNIFF_LEN: usize = 4096;

/// Character set the file was decoded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Windows1252,
}

/// How field quoting is interpreted while tokenizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quoting {
    /// RFC 4180 quoting with doubled quotes.
    Standard,
    /// Quoted fields that may also escape quotes with a backslash.
    Escaped,
    /// Quote characters are ordinary data.
    Disabled,
}

/// Loads a CSV export into a [`CsvTable`] named `sheet_name`.
///
/// Files that are not valid UTF-8 are decoded as Windows-1252. When the
/// preferred quoting mode cannot tokenize the file a second pass with quoting
/// disabled is attempted before giving up.
#[instrument(level = "debug", skip_all, fields(path = %path.display(), sheet = sheet_name))]
pub fn read_csv_table(path: &Path, sheet_name: &str) -> Result<CsvTable> {
    let bytes = fs::read(path)?;
    let (text, encoding) = decode(&bytes);
    if encoding != TextEncoding::Utf8 {
        debug!(?encoding, "file is not valid UTF-8, decoded with fallback encoding");
    }

    let preferred = if sniff_quotes(&bytes) {
        Quoting::Escaped
    } else {
        Quoting::Standard
    };

    let (columns, rows) = match parse_records(&text, preferred, path) {
        Ok(parsed) => parsed,
        Err(error @ ToolError::EmptyCsv(_)) => return Err(error),
        Err(error) => {
            warn!(%error, ?preferred, "parse failed, retrying with quoting disabled");
            parse_records(&text, Quoting::Disabled, path).map_err(|retry_error| {
                ToolError::Unreadable {
                    path: path.to_path_buf(),
                    reason: retry_error.to_string(),
                }
            })?
        }
    };

    debug!(
        rows = rows.len(),
        columns = columns.len(),
        "read CSV table"
    );

    Ok(CsvTable {
        sheet_name: sheet_name.to_string(),
        source: path.to_path_buf(),
        columns,
        rows,
    })
}

/// Decodes the raw file contents, stripping a UTF-8 byte-order mark.
pub fn decode(bytes: &[u8]) -> (Cow<'_, str>, TextEncoding) {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(text) => (Cow::Borrowed(text), TextEncoding::Utf8),
        Err(_) => {
            let (text, _) = WINDOWS_1252.decode_without_bom_handling(bytes);
            (text, TextEncoding::Windows1252)
        }
    }
}

fn sniff_quotes(bytes: &[u8]) -> bool {
    bytes[..bytes.len().min(QUOTE_SNIFF_LEN)].contains(&b'"')
}

type ParsedRecords = (Vec<String>, Vec<Vec<CellValue>>);

fn parse_records(text: &str, quoting: Quoting, path: &Path) -> Result<ParsedRecords> {
    let mut builder = ReaderBuilder::new();
    builder.has_headers(false).flexible(true);
    match quoting {
        Quoting::Standard => {}
        Quoting::Escaped => {
            builder.escape(Some(b'\\'));
        }
        Quoting::Disabled => {
            builder.quoting(false);
        }
    }

    let mut reader = builder.from_reader(text.as_bytes());
    let mut records = reader.records();

    let header = match records.next() {
        Some(record) => record?,
        None => return Err(ToolError::EmptyCsv(path.to_path_buf())),
    };
    let columns = header_names(&header);

    let mut rows = Vec::new();
    for record in records {
        let record = record?;
        if record.len() > columns.len() {
            return Err(ToolError::RaggedRow {
                line: record.position().map(|pos| pos.line()).unwrap_or_default(),
                expected: columns.len(),
                found: record.len(),
            });
        }

        let mut row: Vec<String> = record.iter().map(str::to_string).collect();
        row.resize(columns.len(), String::new());
        rows.push(row);
    }

    let rows = coerce_columns(columns.len(), rows);
    Ok((columns, rows))
}

/// Coerces every column to the single type inferred from all of its values.
pub fn coerce_columns(column_count: usize, rows: Vec<Vec<String>>) -> Vec<Vec<CellValue>> {
    let kinds: Vec<ColumnKind> = (0..column_count)
        .map(|col_idx| {
            ColumnKind::infer(
                rows.iter()
                    .map(|row| row.get(col_idx).map(String::as_str).unwrap_or_default()),
            )
        })
        .collect();

    rows.into_iter()
        .map(|row| {
            row.iter()
                .zip(&kinds)
                .map(|(raw, kind)| CellValue::coerce(raw, *kind))
                .collect()
        })
        .collect()
}

/// Trims header names, names blank headers after their position, and
/// numbers repeated headers `Name`, `Name.1`, `Name.2`.
pub fn header_names(record: &StringRecord) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut names = Vec::with_capacity(record.len());

    for (idx, raw) in record.iter().enumerate() {
        let trimmed = raw.trim();
        let base = if trimmed.is_empty() {
            format!("Unnamed: {idx}")
        } else {
            trimmed.to_string()
        };

        let mut name = base.clone();
        let mut counter = 1;
        while seen.contains(&name) {
            name = format!("{base}.{counter}");
            counter += 1;
        }
        seen.insert(name.clone());
        names.push(name);
    }

    names
}
