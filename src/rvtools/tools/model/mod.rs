use std::path::PathBuf;

use crate::rvtools::tools::metadata::Metadata;

/// Tokens the CSV loader treats as missing values.
const MISSING_MARKERS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN", "<NA>",
    "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// A single coerced cell read from a CSV file.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Blank field or a recognised missing-value marker.
    Empty,
    /// Whole number that fits in an `i64`.
    Integer(i64),
    /// Decimal or exponent notation number.
    Float(f64),
    /// `True`/`False` in any of the usual spellings.
    Boolean(bool),
    /// Everything else, kept verbatim.
    Text(String),
}

impl CellValue {
    /// Coerces a raw CSV field into the narrowest matching value.
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() || MISSING_MARKERS.contains(&raw) {
            return CellValue::Empty;
        }

        match raw {
            "True" | "TRUE" | "true" => return CellValue::Boolean(true),
            "False" | "FALSE" | "false" => return CellValue::Boolean(false),
            _ => {}
        }

        if looks_like_integer(raw) {
            if let Ok(value) = raw.parse::<i64>() {
                return CellValue::Integer(value);
            }
            return CellValue::Text(raw.to_string());
        }

        if looks_like_float(raw) {
            if let Ok(value) = raw.parse::<f64>() {
                if value.is_finite() {
                    return CellValue::Float(value);
                }
            }
        }

        CellValue::Text(raw.to_string())
    }

    /// Coerces a raw field to the type inferred for its whole column.
    pub fn coerce(raw: &str, kind: ColumnKind) -> Self {
        match (kind, CellValue::parse(raw)) {
            (_, CellValue::Empty) => CellValue::Empty,
            (ColumnKind::Text, _) => CellValue::Text(raw.to_string()),
            (ColumnKind::Float, CellValue::Integer(value)) => CellValue::Float(value as f64),
            (_, cell) => cell,
        }
    }

    /// Text shown for the value, booleans rendered as `True`/`False`.
    pub fn display(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Integer(value) => value.to_string(),
            CellValue::Float(value) => format_float(*value),
            CellValue::Boolean(true) => "True".to_string(),
            CellValue::Boolean(false) => "False".to_string(),
            CellValue::Text(value) => value.clone(),
        }
    }

    /// Length used when sizing columns. Blank cells and numeric zero count
    /// as nothing.
    pub fn display_len(&self) -> usize {
        match self {
            CellValue::Empty => 0,
            CellValue::Integer(0) => 0,
            CellValue::Float(value) if *value == 0.0 => 0,
            other => other.display().chars().count(),
        }
    }

    /// Raw text of the cell, used when matching formatting rules.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(value) => Some(value),
            _ => None,
        }
    }
}

/// Type shared by every non-missing value of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Boolean,
    Integer,
    Float,
    Text,
}

impl ColumnKind {
    /// Infers the narrowest type that fits every value of a column.
    ///
    /// Integers and floats widen to `Float`, any other mix falls back to
    /// `Text`. Whole-number columns with missing values become `Float`, and
    /// columns with nothing but missing values are `Text`.
    pub fn infer<'a>(values: impl IntoIterator<Item = &'a str>) -> Self {
        let mut kind: Option<ColumnKind> = None;
        let mut has_missing = false;

        for raw in values {
            let value_kind = match CellValue::parse(raw) {
                CellValue::Empty => {
                    has_missing = true;
                    continue;
                }
                CellValue::Boolean(_) => ColumnKind::Boolean,
                CellValue::Integer(_) => ColumnKind::Integer,
                CellValue::Float(_) => ColumnKind::Float,
                CellValue::Text(_) => return ColumnKind::Text,
            };

            kind = Some(match (kind, value_kind) {
                (None, next) => next,
                (Some(current), next) if current == next => current,
                (Some(ColumnKind::Integer), ColumnKind::Float)
                | (Some(ColumnKind::Float), ColumnKind::Integer) => ColumnKind::Float,
                _ => return ColumnKind::Text,
            });
        }

        match kind {
            Some(ColumnKind::Integer) if has_missing => ColumnKind::Float,
            Some(kind) => kind,
            None => ColumnKind::Text,
        }
    }
}

fn looks_like_integer(raw: &str) -> bool {
    let digits = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    !digits.is_empty() && digits.bytes().all(|byte| byte.is_ascii_digit())
}

fn looks_like_float(raw: &str) -> bool {
    raw.bytes().any(|byte| byte.is_ascii_digit())
        && raw
            .bytes()
            .all(|byte| byte.is_ascii_digit() || matches!(byte, b'+' | b'-' | b'.' | b'e' | b'E'))
}

fn format_float(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// One CSV file loaded into memory, ready to become a worksheet.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvTable {
    pub sheet_name: String,
    pub source: PathBuf,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl CsvTable {
    /// Index of the column with the given header, if present.
    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == header)
    }
}

/// A worksheet of the output workbook.
#[derive(Debug, Clone, PartialEq)]
pub enum Sheet {
    /// Sheet holding the contents of one CSV file.
    Data(CsvTable),
    /// The conversion summary sheet.
    Metadata(Metadata),
}

impl Sheet {
    pub fn name(&self) -> &str {
        match self {
            Sheet::Data(table) => &table.sheet_name,
            Sheet::Metadata(metadata) => &metadata.sheet_name,
        }
    }
}

/// Everything required to materialise the output workbook, in sheet order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorkbookData {
    pub sheets: Vec<Sheet>,
}

impl WorkbookData {
    /// Worksheet names in the order they will be written.
    pub fn sheet_names(&self) -> Vec<String> {
        self.sheets.iter().map(|sheet| sheet.name().to_string()).collect()
    }
}
