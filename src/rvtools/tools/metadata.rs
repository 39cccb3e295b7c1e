use chrono::{Local, NaiveDateTime};

/// Name RVTools gives its summary sheet.
pub const METADATA_SHEET: &str = "vMetaData";
/// Header row of the summary sheet.
pub const METADATA_HEADERS: [&str; 4] = [
    "RVTools major version",
    "RVTools version",
    "xlsx creation datetime",
    "Server",
];
/// RVTools release the generated layout corresponds to.
pub const RVTOOLS_MAJOR_VERSION: f64 = 4.4;
pub const RVTOOLS_VERSION: &str = "4.4.5.0";
/// Placed in the `Server` column, since no vCenter was queried.
pub const SERVER_NOTE: &str = "Converted by RVTools CSV2Excel Tool";

/// Contents of the summary sheet appended to every workbook.
#[derive(Debug, Clone, PartialEq)]
pub struct Metadata {
    pub sheet_name: String,
    pub major_version: f64,
    pub version: String,
    pub created: NaiveDateTime,
    pub server: String,
}

impl Metadata {
    /// Summary stamped with the current local time.
    pub fn new(sheet_name: impl Into<String>) -> Self {
        Self::at(sheet_name, Local::now().naive_local())
    }

    /// Summary stamped with an explicit creation time.
    pub fn at(sheet_name: impl Into<String>, created: NaiveDateTime) -> Self {
        Self {
            sheet_name: sheet_name.into(),
            major_version: RVTOOLS_MAJOR_VERSION,
            version: RVTOOLS_VERSION.to_string(),
            created,
            server: SERVER_NOTE.to_string(),
        }
    }
}
