use std::path::{Path, PathBuf};

use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use crate::rvtools::tools::error::Result;

/// Lists the CSV files below `dir` that match the optional file name prefix.
///
/// Only the immediate entries are inspected unless `recursive` is set. The
/// extension check ignores case while the prefix check does not. Paths are
/// returned sorted so repeated runs produce the same workbook.
#[instrument(level = "debug", skip(prefix), fields(dir = %dir.display()))]
pub fn find_csv_files(dir: &Path, recursive: bool, prefix: Option<&str>) -> Result<Vec<PathBuf>> {
    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(max_depth)
        .follow_links(false)
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) if error.depth() == 0 => return Err(error.into()),
            Err(error) => {
                warn!(%error, "skipping unreadable directory entry");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let Some(file_name) = entry.file_name().to_str() else {
            continue;
        };
        if is_candidate(file_name, prefix) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    debug!(file_count = files.len(), "CSV scan finished");
    Ok(files)
}

fn is_candidate(file_name: &str, prefix: Option<&str>) -> bool {
    let is_csv = file_name.to_ascii_lowercase().ends_with(".csv");
    is_csv && prefix.is_none_or(|prefix| file_name.starts_with(prefix))
}
