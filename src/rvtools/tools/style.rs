//! Static formatting that reproduces the look of a native RVTools export.

use rust_xlsxwriter::{Color, Format, FormatAlign, FormatPattern};

use crate::rvtools::tools::model::{CellValue, CsvTable};

pub const FONT_NAME: &str = "Verdana";
pub const FONT_SIZE: f64 = 9.0;
pub const MIN_COLUMN_WIDTH: f64 = 8.0;
pub const MAX_COLUMN_WIDTH: f64 = 100.0;
const COLUMN_PADDING: usize = 2;

pub const POWERSTATE_COLUMN: &str = "Powerstate";
pub const CONFIG_STATUS_COLUMN: &str = "Config status";

/// Font colours applied to data cells by the conditional rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Red,
    Green,
    Orange,
}

impl Highlight {
    pub fn rgb(self) -> u32 {
        match self {
            Highlight::Red => 0xFF0000,
            Highlight::Green => 0x008000,
            Highlight::Orange => 0xFFA500,
        }
    }
}

/// Returns the highlight for a data cell under the given column header.
///
/// Powered off VMs are shown in red and the `Config status` traffic light is
/// mirrored in the font colour.
pub fn highlight_for(column: &str, value: &CellValue) -> Option<Highlight> {
    let text = value.as_text()?;
    match (column, text) {
        (POWERSTATE_COLUMN, "poweredOff") => Some(Highlight::Red),
        (CONFIG_STATUS_COLUMN, "green") => Some(Highlight::Green),
        (CONFIG_STATUS_COLUMN, "red") => Some(Highlight::Red),
        (CONFIG_STATUS_COLUMN, "yellow") => Some(Highlight::Orange),
        _ => None,
    }
}

/// Width for every column of `table`: the longest value plus padding,
/// clamped to a readable range. The header counts as a value.
pub fn column_widths(table: &CsvTable) -> Vec<f64> {
    (0..table.columns.len())
        .map(|col_idx| {
            let header_len = table.columns[col_idx].chars().count();
            let longest = table
                .rows
                .iter()
                .filter_map(|row| row.get(col_idx))
                .map(CellValue::display_len)
                .fold(header_len, usize::max);
            clamp_width(longest)
        })
        .collect()
}

/// Applies padding and the width bounds to a content length.
pub fn clamp_width(content_len: usize) -> f64 {
    ((content_len + COLUMN_PADDING) as f64).clamp(MIN_COLUMN_WIDTH, MAX_COLUMN_WIDTH)
}

/// Pre-built formats shared by every worksheet of a workbook.
#[derive(Debug, Clone)]
pub struct StyleSheet {
    pub header: Format,
    pub data: Format,
    pub datetime: Format,
    red: Format,
    green: Format,
    orange: Format,
}

impl StyleSheet {
    pub fn new() -> Self {
        let data = base_format();
        Self {
            header: base_format()
                .set_bold()
                .set_font_color(Color::RGB(0xFFFFFF))
                .set_background_color(Color::RGB(0x000000))
                .set_pattern(FormatPattern::Solid),
            datetime: data.clone().set_num_format("yyyy-mm-dd hh:mm:ss"),
            red: highlighted(Highlight::Red),
            green: highlighted(Highlight::Green),
            orange: highlighted(Highlight::Orange),
            data,
        }
    }

    /// Format for a data cell under `column`.
    pub fn for_cell(&self, column: &str, value: &CellValue) -> &Format {
        match highlight_for(column, value) {
            Some(Highlight::Red) => &self.red,
            Some(Highlight::Green) => &self.green,
            Some(Highlight::Orange) => &self.orange,
            None => &self.data,
        }
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self::new()
    }
}

fn base_format() -> Format {
    Format::new()
        .set_font_name(FONT_NAME)
        .set_font_size(FONT_SIZE)
        .set_align(FormatAlign::Left)
}

fn highlighted(highlight: Highlight) -> Format {
    base_format().set_font_color(Color::RGB(highlight.rgb()))
}
