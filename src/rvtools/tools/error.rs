use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ToolError>;

/// Error type covering the different failure cases that can occur when the
/// tool discovers, loads, or writes data.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Wrapper for IO failures such as reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised when the CSV tokenizer rejects a file.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Errors bubbled up from the Excel writer implementation.
    #[error("Excel write error: {0}")]
    ExcelWrite(#[from] rust_xlsxwriter::XlsxError),

    /// Raised when a recursive directory scan fails at its root.
    #[error("directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Raised when the user provides an input directory that does not exist.
    #[error("input directory not found: {0}")]
    MissingInput(PathBuf),

    /// Raised when a CSV file has no header record.
    #[error("no columns to parse from file {0}")]
    EmptyCsv(PathBuf),

    /// Raised when a data row carries more fields than the header declares.
    #[error("expected {expected} fields in line {line}, saw {found}")]
    RaggedRow {
        line: u64,
        expected: usize,
        found: usize,
    },

    /// Raised when a table does not fit into one worksheet.
    #[error("{rows} rows and {columns} columns exceed the worksheet limits")]
    SheetTooLarge { rows: usize, columns: usize },

    /// Raised when every parsing strategy failed for a CSV file.
    #[error("unable to read {path}: {reason}")]
    Unreadable { path: PathBuf, reason: String },

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
