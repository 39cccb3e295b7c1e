use std::path::Path;

use chrono::{Datelike, NaiveDateTime, Timelike};
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook, Worksheet};
use tracing::warn;

use crate::rvtools::tools::error::{Result, ToolError};
use crate::rvtools::tools::metadata::{METADATA_HEADERS, Metadata};
use crate::rvtools::tools::model::{CellValue, CsvTable, Sheet, WorkbookData};
use crate::rvtools::tools::style::{StyleSheet, column_widths};

/// Largest integer Excel can hold without losing precision (2^53).
const MAX_EXACT_INTEGER: u64 = 1 << 53;
/// Worksheet limits of the XLSX format.
pub const MAX_CELL_CHARS: usize = 32_767;
pub const MAX_SHEET_ROWS: usize = 1_048_576;
pub const MAX_SHEET_COLUMNS: usize = 16_384;

/// Makes `table` fit into a single worksheet.
///
/// Text longer than a cell can hold is truncated with a warning. Tables with
/// more rows (header included) or columns than a worksheet holds are rejected.
pub fn fit_to_sheet_limits(table: &mut CsvTable) -> Result<()> {
    let rows = table.rows.len() + 1;
    let columns = table.columns.len();
    if rows > MAX_SHEET_ROWS || columns > MAX_SHEET_COLUMNS {
        return Err(ToolError::SheetTooLarge { rows, columns });
    }

    for (col_idx, header) in table.columns.iter_mut().enumerate() {
        if truncate_chars(header, MAX_CELL_CHARS) {
            warn!(
                sheet = %table.sheet_name,
                column = col_idx,
                "truncated header to cell limit"
            );
        }
    }

    for (row_idx, row) in table.rows.iter_mut().enumerate() {
        for (col_idx, cell) in row.iter_mut().enumerate() {
            if let CellValue::Text(value) = cell {
                if truncate_chars(value, MAX_CELL_CHARS) {
                    warn!(
                        sheet = %table.sheet_name,
                        row = row_idx + 1,
                        column = col_idx,
                        "truncated field to cell limit"
                    );
                }
            }
        }
    }

    Ok(())
}

fn truncate_chars(value: &mut String, limit: usize) -> bool {
    match value.char_indices().nth(limit) {
        Some((byte_idx, _)) => {
            value.truncate(byte_idx);
            true
        }
        None => false,
    }
}

/// Writes the provided workbook data to the given path, one worksheet per
/// entry and in the order given.
pub fn write_workbook(path: &Path, workbook: &WorkbookData) -> Result<()> {
    let styles = StyleSheet::new();
    let mut workbook_writer = Workbook::new();

    for sheet in &workbook.sheets {
        let worksheet = workbook_writer.add_worksheet();
        worksheet.set_name(sheet.name())?;

        match sheet {
            Sheet::Data(table) => write_table(worksheet, table, &styles)?,
            Sheet::Metadata(metadata) => write_metadata(worksheet, metadata, &styles)?,
        }
    }

    workbook_writer.save(path)?;
    Ok(())
}

fn write_table(worksheet: &mut Worksheet, table: &CsvTable, styles: &StyleSheet) -> Result<()> {
    write_header(worksheet, table.columns.as_slice(), &styles.header)?;

    for (row_idx, row) in table.rows.iter().enumerate() {
        let excel_row = (row_idx + 1) as u32;
        for (col_idx, cell) in row.iter().enumerate() {
            let column = table.columns.get(col_idx).map(String::as_str).unwrap_or_default();
            let format = styles.for_cell(column, cell);
            write_cell(worksheet, excel_row, col_idx as u16, cell, format)?;
        }
    }

    for (col_idx, width) in column_widths(table).into_iter().enumerate() {
        worksheet.set_column_width(col_idx as u16, width)?;
    }
    worksheet.set_freeze_panes(1, 0)?;
    Ok(())
}

fn write_header<S: AsRef<str>>(
    worksheet: &mut Worksheet,
    headers: &[S],
    format: &Format,
) -> Result<()> {
    for (col_idx, header) in headers.iter().enumerate() {
        worksheet.write_string_with_format(0, col_idx as u16, header.as_ref(), format)?;
    }
    Ok(())
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &CellValue,
    format: &Format,
) -> Result<()> {
    match cell {
        CellValue::Empty => {
            worksheet.write_blank(row, col, format)?;
        }
        CellValue::Integer(value) if value.unsigned_abs() > MAX_EXACT_INTEGER => {
            worksheet.write_string_with_format(row, col, value.to_string(), format)?;
        }
        CellValue::Integer(value) => {
            worksheet.write_number_with_format(row, col, *value as f64, format)?;
        }
        CellValue::Float(value) => {
            worksheet.write_number_with_format(row, col, *value, format)?;
        }
        CellValue::Boolean(_) => {
            worksheet.write_string_with_format(row, col, cell.display(), format)?;
        }
        CellValue::Text(value) => {
            worksheet.write_string_with_format(row, col, value, format)?;
        }
    }
    Ok(())
}

fn write_metadata(
    worksheet: &mut Worksheet,
    metadata: &Metadata,
    styles: &StyleSheet,
) -> Result<()> {
    write_header(worksheet, METADATA_HEADERS.as_slice(), &styles.header)?;

    worksheet.write_number_with_format(1, 0, metadata.major_version, &styles.data)?;
    worksheet.write_string_with_format(1, 1, &metadata.version, &styles.data)?;
    let created = excel_datetime(&metadata.created)?;
    worksheet.write_datetime_with_format(1, 2, &created, &styles.datetime)?;
    worksheet.write_string_with_format(1, 3, &metadata.server, &styles.data)?;
    Ok(())
}

fn excel_datetime(value: &NaiveDateTime) -> Result<ExcelDateTime> {
    let datetime =
        ExcelDateTime::from_ymd(value.year() as u16, value.month() as u8, value.day() as u8)?
            .and_hms(value.hour() as u16, value.minute() as u8, value.second())?;
    Ok(datetime)
}
