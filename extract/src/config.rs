//! Pipeline configuration.
//!
//! A [`PipelineConfig`] is built once at the boundary (CLI flags, a YAML
//! file or the per-format defaults) and passed into
//! [`pipeline::run`](crate::pipeline::run).
//!
//! # Example YAML
//!
//! ```yaml
//! source_directory: /srv/disk-reports/crystal
//! output_path: /srv/disk-reports/crystal.csv
//! trace: true
//! ```

use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ReportFormat;
use crate::error::{ReportError, Result};

/// File name of the consolidated CSV when no output path is configured.
pub const DEFAULT_OUTPUT_FILE: &str = "output_data.csv";

/// Where to read reports from, where to write the CSV, and whether to trace.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use disk_report_extract::PipelineConfig;
///
/// let config = PipelineConfig::new("/data/reports");
/// assert_eq!(config.output_path, Path::new("/data/reports/output_data.csv"));
/// assert!(!config.trace);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub source_directory: PathBuf,
    pub output_path: PathBuf,
    /// Emit per-file and per-record trace events.
    pub trace: bool,
}

/// On-disk form: only the source directory is required.
#[derive(Debug, Deserialize)]
struct ConfigFile {
    source_directory: PathBuf,
    #[serde(default)]
    output_path: Option<PathBuf>,
    #[serde(default)]
    trace: bool,
}

impl PipelineConfig {
    /// Reads from `source_directory` and writes `output_data.csv` inside it.
    pub fn new(source_directory: impl Into<PathBuf>) -> Self {
        let source_directory = source_directory.into();
        let output_path = source_directory.join(DEFAULT_OUTPUT_FILE);
        Self {
            source_directory,
            output_path,
            trace: false,
        }
    }

    /// The built-in location for `format`.
    pub fn for_format(format: ReportFormat) -> Self {
        Self::new(format.default_directory())
    }

    pub fn with_output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }

    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Io`] if the file cannot be read, or
    /// [`ReportError::Yaml`] if parsing fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|err| ReportError::io(path, err))?;
        let raw: ConfigFile = serde_yaml::from_reader(BufReader::new(file))?;

        let mut config = Self::new(raw.source_directory).with_trace(raw.trace);
        if let Some(output_path) = raw.output_path {
            config.output_path = output_path;
        }
        Ok(config)
    }

    /// Saves the configuration as YAML.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path).map_err(|err| ReportError::io(path, err))?;
        serde_yaml::to_writer(BufWriter::new(file), self)?;
        Ok(())
    }
}
