//! Line-oriented report state machine.
//!
//! [`ReportParser`] scans a report one line at a time. Outside a disk block
//! it is idle; a start sentinel opens a [`PartialRecord`] seeded with the
//! most recent report date, matching rule triggers fill it in, and the end
//! sentinel turns it into a finished [`Record`].
//!
//! A start sentinel inside an open block restarts it, dropping what was
//! collected. A block still open at end of input is dropped as well.

use std::mem;

use disk_report_core::{PartialRecord, Record};
use tracing::{debug, warn};

use crate::ReportFormat;
use crate::rules::Outcome;

/// Counters for a single parse run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseDiagnostics {
    pub lines: usize,
    pub records_finished: usize,
    /// Open blocks replaced by a new start sentinel.
    pub partials_discarded: usize,
    /// Open block left at end of input.
    pub unterminated: usize,
    /// Triggered lines that yielded no value.
    pub extraction_misses: usize,
}

#[derive(Debug, Default)]
enum State {
    #[default]
    Idle,
    InRecord(PartialRecord),
}

/// Incremental parser for one report.
///
/// # Examples
///
/// ```
/// use disk_report_extract::{ReportFormat, parser::ReportParser};
///
/// let mut parser = ReportParser::new(ReportFormat::HdSentinel);
/// let lines = [
///     "Current Date And Time . . . : 2024-03-01 09:15:00",
///     "-- Physical Disk Information - Disk: #0: WDC WD40EFRX --",
///     "Hard Disk Serial Number . . : WD-WCC7K1234567",
///     "Transfer Rate Information",
/// ];
///
/// let records: Vec<_> = lines.iter().filter_map(|line| parser.feed(line)).collect();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].serial_number.as_deref(), Some("WD-WCC7K1234567"));
/// assert_eq!(records[0].info_date.as_deref(), Some("2024-03-01 09:15:00"));
/// ```
#[derive(Debug)]
pub struct ReportParser {
    format: ReportFormat,
    state: State,
    date: String,
    diagnostics: ParseDiagnostics,
}

impl ReportParser {
    pub fn new(format: ReportFormat) -> Self {
        Self {
            format,
            state: State::Idle,
            date: String::new(),
            diagnostics: ParseDiagnostics::default(),
        }
    }

    /// Feeds one line; returns a record when the line closes a block.
    ///
    /// Surrounding whitespace is ignored. Within a line the date trigger,
    /// the start sentinel, the field rules and the end sentinel are checked
    /// in that order.
    pub fn feed(&mut self, line: &str) -> Option<Record> {
        let line = line.trim();
        self.diagnostics.lines += 1;

        if let Some(date) = self.format.date_trigger().capture(line) {
            self.date = date.to_string();
        }

        if self.format.start_sentinel().matches(line) {
            if let State::InRecord(partial) = &self.state {
                debug!(
                    format = %self.format,
                    serial = ?partial.get(disk_report_core::Field::SerialNumber),
                    line = self.diagnostics.lines,
                    "Discarding open record at repeated start sentinel"
                );
                self.diagnostics.partials_discarded += 1;
            }
            self.state = State::InRecord(PartialRecord::dated(&self.date));
        }

        if let State::InRecord(partial) = &mut self.state {
            for rule in self.format.rules().iter().filter(|rule| rule.fires(line)) {
                if rule.apply(line, partial) == Outcome::Missed {
                    self.diagnostics.extraction_misses += 1;
                    debug!(
                        format = %self.format,
                        field = %rule.action.field(),
                        line = self.diagnostics.lines,
                        text = line,
                        "No value extracted from triggered line"
                    );
                }
            }
        }

        if self.format.end_sentinel().matches(line) {
            if let State::InRecord(partial) = mem::take(&mut self.state) {
                self.diagnostics.records_finished += 1;
                return Some(partial.finish());
            }
        }

        None
    }

    /// Returns `true` while a block is open.
    pub fn in_record(&self) -> bool {
        matches!(self.state, State::InRecord(_))
    }

    /// Ends the input, dropping any open block.
    pub fn finish(mut self) -> ParseDiagnostics {
        if self.in_record() {
            self.diagnostics.unterminated += 1;
            warn!(
                format = %self.format,
                lines = self.diagnostics.lines,
                "Report ended inside a disk block; block dropped"
            );
        }
        self.diagnostics
    }
}

/// Records and diagnostics from one parsed report.
#[derive(Debug, Clone, Default)]
pub struct ParsedReport {
    pub records: Vec<Record>,
    pub diagnostics: ParseDiagnostics,
}

/// Parses a whole decoded report.
pub fn parse_text(format: ReportFormat, text: &str) -> ParsedReport {
    let mut parser = ReportParser::new(format);
    let records = text.lines().filter_map(|line| parser.feed(line)).collect();
    ParsedReport {
        records,
        diagnostics: parser.finish(),
    }
}
