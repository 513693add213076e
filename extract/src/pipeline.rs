//! End-to-end run: select, decode, parse, deduplicate, write.

use std::path::{Path, PathBuf};

use disk_report_core::ResultSet;
use serde::Serialize;
use tracing::{debug, info};

use crate::ReportFormat;
use crate::config::PipelineConfig;
use crate::decode::read_report;
use crate::error::Result;
use crate::output::write_csv_file;
use crate::parser::{ParsedReport, parse_text};
use crate::select::select_report_files;

/// Counts from one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub format: ReportFormat,
    pub files: usize,
    pub records_parsed: usize,
    pub duplicates_replaced: usize,
    pub rows_written: usize,
    pub output_path: PathBuf,
}

/// Parses one report file.
pub fn parse_file(path: &Path, format: ReportFormat) -> Result<ParsedReport> {
    let text = read_report(path, format)?;
    Ok(parse_text(format, &text))
}

/// Parses every report in the configured directory, oldest first, and
/// keeps the newest record per serial number.
///
/// Returns the accumulated records with the partially filled summary
/// (`rows_written` stays zero).
pub fn collect(format: ReportFormat, config: &PipelineConfig) -> Result<(ResultSet, RunSummary)> {
    let files = select_report_files(&config.source_directory, format)?;
    let mut results = ResultSet::new();
    let mut summary = RunSummary {
        format,
        files: files.len(),
        records_parsed: 0,
        duplicates_replaced: 0,
        rows_written: 0,
        output_path: config.output_path.clone(),
    };

    for path in &files {
        if config.trace {
            info!(path = %path.display(), "Read from report");
        }
        let report = parse_file(path, format)?;
        debug!(path = %path.display(), diagnostics = ?report.diagnostics, "Parsed report");

        for record in report.records {
            summary.records_parsed += 1;
            let serial = record.dedup_key().to_string();
            if results.submit(record).is_some() {
                summary.duplicates_replaced += 1;
                if config.trace {
                    info!(serial = %serial, "Removed duplicate record for disk");
                }
            }
            if config.trace {
                info!(serial = %serial, path = %path.display(), "Added record");
            }
        }
    }

    Ok((results, summary))
}

/// Runs the whole pipeline for `format` and writes the CSV.
///
/// Any I/O or decode failure aborts the run before the output file is
/// created.
///
/// # Examples
///
/// ```no_run
/// use disk_report_extract::{PipelineConfig, ReportFormat, pipeline};
///
/// let config = PipelineConfig::new("/srv/disk-reports").with_trace(true);
/// let summary = pipeline::run(ReportFormat::CrystalDiskInfo, &config).unwrap();
/// println!("{} rows", summary.rows_written);
/// ```
pub fn run(format: ReportFormat, config: &PipelineConfig) -> Result<RunSummary> {
    let (results, mut summary) = collect(format, config)?;
    summary.rows_written = write_csv_file(&config.output_path, format.columns(), &results)?;
    if config.trace {
        info!(
            path = %config.output_path.display(),
            rows = summary.rows_written,
            "Saved consolidated report"
        );
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const CDI_START: &str =
        "----------------------------------------------------------------------------";
    const CDI_END: &str =
        "-- S.M.A.R.T. --------------------------------------------------------------";

    fn cdi_report(date: &str, serial: &str, hours: u32) -> String {
        format!(
            "  Date : {date}\n{CDI_START}\n Serial Number : {serial}\n Power On Hours : {hours} hours\n{CDI_END}\n"
        )
    }

    #[test]
    fn test_newest_file_wins_for_same_serial() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("CrystalDiskInfo_20240101.txt"),
            cdi_report("2024/01/01", "SN1", 100),
        )
        .unwrap();
        fs::write(
            dir.path().join("CrystalDiskInfo_20240301.txt"),
            cdi_report("2024/03/01", "SN1", 200),
        )
        .unwrap();

        let config = PipelineConfig::new(dir.path());
        let summary = run(ReportFormat::CrystalDiskInfo, &config).unwrap();
        assert_eq!(summary.files, 2);
        assert_eq!(summary.records_parsed, 2);
        assert_eq!(summary.duplicates_replaced, 1);
        assert_eq!(summary.rows_written, 1);

        let csv = fs::read_to_string(dir.path().join("output_data.csv")).unwrap();
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], ",,,SN1,,,,200,,,,,,2024/03/01");
    }

    #[test]
    fn test_decode_failure_aborts_without_output() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("CrystalDiskInfo_1.txt"),
            cdi_report("d", "OK", 1),
        )
        .unwrap();
        fs::write(dir.path().join("CrystalDiskInfo_2.txt"), b"\xc3\x28").unwrap();

        let config = PipelineConfig::new(dir.path());
        assert!(run(ReportFormat::CrystalDiskInfo, &config).is_err());
        assert!(!config.output_path.exists());
    }

    #[test]
    fn test_empty_directory_writes_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let config = PipelineConfig::new(dir.path()).with_trace(true);
        let summary = run(ReportFormat::HdSentinel, &config).unwrap();
        assert_eq!(summary.rows_written, 0);
        let csv = fs::read_to_string(&config.output_path).unwrap();
        assert_eq!(
            csv,
            "make,model,firmware,serial_number,size_gb,rotation_rate,interface,\
             power_on_hours,power_on_count,health_status,info_date,owner,listed,sold,\
             sold_date,price\n"
        );
    }
}
