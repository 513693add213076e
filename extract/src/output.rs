//! CSV output for the consolidated record set.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use disk_report_core::{Field, Record};

use crate::error::{ReportError, Result};

/// Writes a header row of `columns` and one row per record.
///
/// Absent fields become empty cells. Returns the number of data rows.
pub fn write_records<'a, W, I>(writer: W, columns: &[Field], records: I) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a Record>,
{
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(columns.iter().map(|field| field.column_name()))?;

    let mut rows = 0usize;
    for record in records {
        csv.write_record(columns.iter().map(|field| record.get(*field).unwrap_or("")))?;
        rows += 1;
    }

    csv.flush().map_err(csv::Error::from)?;
    Ok(rows)
}

/// Creates (or truncates) `path` and writes the records to it.
pub fn write_csv_file<'a, I>(path: &Path, columns: &[Field], records: I) -> Result<usize>
where
    I: IntoIterator<Item = &'a Record>,
{
    let file = File::create(path).map_err(|err| ReportError::io(path, err))?;
    write_records(file, columns, records)
}
