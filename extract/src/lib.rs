//! Disk diagnostic report extraction.
//!
//! This crate turns plain-text exports from two disk-health utilities into
//! one consolidated CSV dataset:
//!
//! - **CrystalDiskInfo** (`CrystalDiskInfo_*.txt`, UTF-8)
//! - **Hard Disk Sentinel** (`Disk report*.txt`, Windows-1252)
//!
//! Each report is scanned by a small state machine
//! ([`parser::ReportParser`]) driven by a static per-format rule table
//! ([`rules`]). Finished records are collected into a
//! [`ResultSet`](disk_report_core::ResultSet) that keeps only the newest
//! record per disk serial number, and the set is written as CSV.
//!
//! # Main entry points
//!
//! - [`parse_report`]: parse already-decoded report text.
//! - [`pipeline::parse_file`]: read, decode and parse one file.
//! - [`pipeline::run`]: process a whole directory and write the CSV.
//!
//! # Example
//!
//! ```
//! use disk_report_extract::{ReportFormat, parse_report};
//!
//! let report = "\
//!   Date : 2024/02/10 21:14:03
//! ----------------------------------------------------------------------------
//!            Model : ST4000DM004-2CV104
//!    Serial Number : ZFN0ABCD
//!        Disk Size : 4000.7 GB (8.4/137.4/4000.7/4000.7)
//!    Rotation Rate : 5425 RPM
//!   Health Status : Good (100 %)
//! -- S.M.A.R.T. --------------------------------------------------------------
//! ";
//!
//! let parsed = parse_report(ReportFormat::CrystalDiskInfo, report);
//! let disk = &parsed.records[0];
//! assert_eq!(disk.make.as_deref(), Some("Seagate"));
//! assert_eq!(disk.size_gb.as_deref(), Some("4000.7"));
//! assert_eq!(disk.rotation_rate.as_deref(), Some("5425"));
//! assert_eq!(disk.health_status.as_deref(), Some("Good"));
//! assert_eq!(disk.info_date.as_deref(), Some("2024/02/10 21:14:03"));
//! ```

pub mod config;
pub mod decode;
pub mod error;
pub mod format;
pub mod normalize;
pub mod output;
pub mod parser;
pub mod pipeline;
pub mod rules;
pub mod select;

pub use config::PipelineConfig;
pub use error::{ReportError, Result};
pub use format::ReportFormat;
pub use parser::{ParseDiagnostics, ParsedReport};
pub use pipeline::RunSummary;

/// Parses decoded report text into records without touching the
/// filesystem.
pub fn parse_report(format: ReportFormat, text: &str) -> ParsedReport {
    parser::parse_text(format, text)
}
