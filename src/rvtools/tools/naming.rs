use std::collections::HashSet;
use std::path::Path;

/// Longest sheet name Excel accepts.
pub const MAX_SHEET_NAME_LEN: usize = 31;
/// Name used when nothing usable is left after sanitising.
pub const FALLBACK_SHEET_NAME: &str = "Sheet";

/// Names Excel keeps for itself.
const RESERVED_SHEET_NAMES: [&str; 1] = ["History"];

const INVALID_SHEET_CHARS: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];

/// Derives a worksheet name from a CSV path.
///
/// `RVTools_tabvInfo.csv` with the prefix `RVTools_tab` becomes `vInfo`; files
/// outside the naming convention keep their stem. Characters Excel rejects are
/// dropped and the result is cut to [`MAX_SHEET_NAME_LEN`] characters.
pub fn sheet_name_from_filename(path: &Path, prefix: &str) -> String {
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    let name = if is_csv {
        path.file_stem()
    } else {
        path.file_name()
    };
    let stem = name
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let raw = stem.strip_prefix(prefix).unwrap_or(&stem);
    sanitize_sheet_name(raw)
}

/// Removes characters Excel forbids in sheet names and truncates the result.
///
/// Apostrophes are trimmed after truncation since Excel rejects names that
/// start or end with one.
pub fn sanitize_sheet_name(raw: &str) -> String {
    let truncated: String = raw
        .chars()
        .filter(|ch| !INVALID_SHEET_CHARS.contains(ch) && !ch.is_control())
        .take(MAX_SHEET_NAME_LEN)
        .collect();
    truncated.trim_matches('\'').to_string()
}

/// Hands out worksheet names that are unique within one workbook.
///
/// Excel compares sheet names without regard to case, so the registry does
/// too. Collisions are resolved by appending the smallest free counter.
#[derive(Debug)]
pub struct SheetNameRegistry {
    used: HashSet<String>,
}

impl Default for SheetNameRegistry {
    fn default() -> Self {
        Self {
            used: RESERVED_SHEET_NAMES
                .iter()
                .map(|name| name.to_lowercase())
                .collect(),
        }
    }
}

impl SheetNameRegistry {
    /// Returns `true` when `name` has already been handed out.
    pub fn contains(&self, name: &str) -> bool {
        self.used.contains(&name.to_lowercase())
    }

    /// Reserves `name` (or a numbered variant of it) and returns the name
    /// that was actually reserved.
    pub fn assign(&mut self, name: &str) -> String {
        let base = if name.is_empty() {
            FALLBACK_SHEET_NAME.to_string()
        } else {
            name.to_string()
        };

        if !self.contains(&base) {
            self.used.insert(base.to_lowercase());
            return base;
        }

        let mut counter = 1usize;
        loop {
            let suffix = counter.to_string();
            let max_len = MAX_SHEET_NAME_LEN - suffix.len();
            let prefix: String = base.chars().take(max_len).collect();
            let candidate = format!("{prefix}{suffix}");
            if !self.contains(&candidate) {
                self.used.insert(candidate.to_lowercase());
                return candidate;
            }
            counter += 1;
        }
    }
}
