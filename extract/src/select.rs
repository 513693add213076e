//! Report file selection.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::ReportFormat;
use crate::error::{ReportError, Result};

/// Lists the report files for `format` directly inside `directory`.
///
/// Only regular files whose name follows the format's prefix/suffix
/// convention are returned, sorted by path. Report names embed their
/// timestamp, so this is also oldest-first order.
pub fn select_report_files(directory: &Path, format: ReportFormat) -> Result<Vec<PathBuf>> {
    if !directory.is_dir() {
        return Err(ReportError::InvalidInput(format!(
            "Report directory '{}' does not exist or is not a directory",
            directory.display()
        )));
    }

    let mut paths = BTreeSet::new();
    let entries = fs::read_dir(directory).map_err(|err| ReportError::io(directory, err))?;
    for entry in entries {
        let entry = entry.map_err(|err| ReportError::io(directory, err))?;
        let path = entry.path();
        let accepted = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| format.accepts_file_name(name));
        if accepted && path.is_file() {
            paths.insert(path);
        }
    }

    Ok(paths.into_iter().collect())
}
