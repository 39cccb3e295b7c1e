use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info, instrument};

use crate::rvtools::tools::error::Result;
use crate::rvtools::tools::io::csv_read::read_csv_table;
use crate::rvtools::tools::io::excel_write;
use crate::rvtools::tools::metadata::{METADATA_SHEET, Metadata};
use crate::rvtools::tools::model::{CsvTable, Sheet, WorkbookData};
use crate::rvtools::tools::naming::{SheetNameRegistry, sheet_name_from_filename};
use crate::rvtools::tools::order::order_sheets;

/// Outcome of a conversion run.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionReport {
    /// Workbook that was written.
    pub output: PathBuf,
    /// Worksheet names in workbook order, summary sheet included.
    pub sheets: Vec<String>,
    /// CSV files that could not be loaded, with the reason.
    pub skipped: Vec<(PathBuf, String)>,
}

/// Converts the given CSV files into one workbook at `output`.
///
/// Files that cannot be loaded are logged and skipped. Failing to write the
/// workbook is fatal.
#[instrument(level = "info", skip_all, fields(files = files.len(), output = %output.display()))]
pub fn convert_csv_to_excel(
    files: &[PathBuf],
    output: &Path,
    prefix: &str,
) -> Result<ConversionReport> {
    let mut names = SheetNameRegistry::default();
    let mut tables: Vec<CsvTable> = Vec::new();
    let mut skipped = Vec::new();

    for file in files {
        debug!(file = %file.display(), "processing CSV file");
        let derived = sheet_name_from_filename(file, prefix);
        let loaded = read_csv_table(file, &derived).and_then(|mut table| {
            excel_write::fit_to_sheet_limits(&mut table)?;
            Ok(table)
        });
        match loaded {
            Ok(mut table) => {
                table.sheet_name = names.assign(&derived);
                debug!(sheet = %table.sheet_name, "sheet assigned");
                tables.push(table);
            }
            Err(err) => {
                error!(file = %file.display(), error = %err, "skipping CSV file");
                skipped.push((file.clone(), err.to_string()));
            }
        }
    }

    let metadata = Metadata::new(names.assign(METADATA_SHEET));
    let workbook = assemble_workbook(tables, metadata);
    let sheets = workbook.sheet_names();
    debug!(?sheets, "sheet order resolved");

    excel_write::write_workbook(output, &workbook)?;
    info!(sheet_count = sheets.len(), skipped = skipped.len(), "workbook written");

    Ok(ConversionReport {
        output: output.to_path_buf(),
        sheets,
        skipped,
    })
}

/// Arranges loaded tables and the summary sheet in RVTools order.
pub fn assemble_workbook(tables: Vec<CsvTable>, metadata: Metadata) -> WorkbookData {
    let processed: Vec<String> = tables.iter().map(|table| table.sheet_name.clone()).collect();
    let order = order_sheets(&processed, &metadata.sheet_name);

    let mut by_name: HashMap<String, Sheet> = tables
        .into_iter()
        .map(|table| (table.sheet_name.clone(), Sheet::Data(table)))
        .collect();
    by_name.insert(metadata.sheet_name.clone(), Sheet::Metadata(metadata));

    WorkbookData {
        sheets: order
            .iter()
            .filter_map(|name| by_name.remove(name))
            .collect(),
    }
}
