use std::path::PathBuf;

/// Workbook written when no output path is given.
pub const DEFAULT_OUTPUT: &str = "rvtools_export.xlsx";
/// File name prefix used by RVTools for its per-tab CSV exports.
pub const DEFAULT_PREFIX: &str = "RVTools_tab";

/// Settings for a single conversion run, independent of how they were
/// collected on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Directory scanned for CSV files.
    pub input: PathBuf,
    /// Destination workbook.
    pub output: PathBuf,
    /// Descend into subdirectories of `input`.
    pub recursive: bool,
    /// Only files whose name starts with this prefix are converted. `None`
    /// accepts every CSV file.
    pub prefix: Option<String>,
}

impl ConvertOptions {
    /// Creates options for `input` with the RVTools defaults for everything else.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            ..Self::default()
        }
    }

    /// Replaces the prefix filter. An empty prefix disables filtering.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        self.prefix = if prefix.is_empty() { None } else { Some(prefix) };
        self
    }

    /// Prefix stripped from file names when deriving sheet names.
    pub fn naming_prefix(&self) -> &str {
        self.prefix.as_deref().unwrap_or_default()
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from("."),
            output: PathBuf::from(DEFAULT_OUTPUT),
            recursive: false,
            prefix: Some(DEFAULT_PREFIX.to_string()),
        }
    }
}
