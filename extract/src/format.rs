//! Supported report formats and their fixed conventions.

use std::path::PathBuf;

use disk_report_core::Field;
use encoding_rs::Encoding;
use serde::{Deserialize, Serialize};

use crate::rules::{DateTrigger, FieldRule, Sentinel, crystal_disk_info, hd_sentinel};

/// Disk-health utility that produced a report.
///
/// # Examples
///
/// ```
/// use disk_report_extract::ReportFormat;
///
/// let format = ReportFormat::HdSentinel;
/// assert!(format.accepts_file_name("Disk report 2024-05-01.txt"));
/// assert!(!format.accepts_file_name("CrystalDiskInfo_20240501.txt"));
/// assert_eq!(format.encoding().name(), "windows-1252");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum ReportFormat {
    CrystalDiskInfo,
    HdSentinel,
}

impl ReportFormat {
    pub fn label(self) -> &'static str {
        match self {
            Self::CrystalDiskInfo => "CrystalDiskInfo",
            Self::HdSentinel => "HD Sentinel",
        }
    }

    /// Required file-name prefix for report files in a directory.
    pub fn file_prefix(self) -> &'static str {
        match self {
            Self::CrystalDiskInfo => "CrystalDiskInfo_",
            Self::HdSentinel => "Disk report",
        }
    }

    pub fn file_suffix(self) -> &'static str {
        ".txt"
    }

    pub fn accepts_file_name(self, name: &str) -> bool {
        name.starts_with(self.file_prefix()) && name.ends_with(self.file_suffix())
    }

    /// Character encoding the utility writes its exports in.
    pub fn encoding(self) -> &'static Encoding {
        match self {
            Self::CrystalDiskInfo => encoding_rs::UTF_8,
            Self::HdSentinel => encoding_rs::WINDOWS_1252,
        }
    }

    pub fn date_trigger(self) -> DateTrigger {
        match self {
            Self::CrystalDiskInfo => crystal_disk_info::DATE,
            Self::HdSentinel => hd_sentinel::DATE,
        }
    }

    pub fn start_sentinel(self) -> Sentinel {
        match self {
            Self::CrystalDiskInfo => crystal_disk_info::START,
            Self::HdSentinel => hd_sentinel::START,
        }
    }

    pub fn end_sentinel(self) -> Sentinel {
        match self {
            Self::CrystalDiskInfo => crystal_disk_info::END,
            Self::HdSentinel => hd_sentinel::END,
        }
    }

    pub fn rules(self) -> &'static [FieldRule] {
        match self {
            Self::CrystalDiskInfo => crystal_disk_info::RULES,
            Self::HdSentinel => hd_sentinel::RULES,
        }
    }

    /// Output columns, in order.
    pub fn columns(self) -> &'static [Field] {
        match self {
            Self::CrystalDiskInfo => crystal_disk_info::COLUMNS,
            Self::HdSentinel => hd_sentinel::COLUMNS,
        }
    }

    /// Directory the reports are collected in when none is configured.
    pub fn default_directory(self) -> PathBuf {
        match self {
            Self::CrystalDiskInfo => PathBuf::from(r"Z:\Benchmarks\HDD Info\Crystal Disk Info"),
            Self::HdSentinel if cfg!(target_os = "macos") => {
                PathBuf::from("/Users/haoyuanxia/Downloads/Storage Media/HDS Logs")
            }
            Self::HdSentinel => PathBuf::from(r"Z:\Benchmarks\HDD Info\HD Sentinel"),
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
