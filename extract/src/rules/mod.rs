//! Static field-extraction rule tables.
//!
//! Each report format owns one table of [`FieldRule`]s. A rule fires when a
//! line starts with its trigger literal; its [`Action`] then decides how the
//! value is pulled out of the line and normalized. Every rule whose trigger
//! matches a line is applied, in table order.

pub mod crystal_disk_info;
pub mod hd_sentinel;

use disk_report_core::{Field, PartialRecord};

use crate::normalize::{self, Unit};

/// A line that opens or closes one disk's block of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentinel {
    /// The whole line must equal the text.
    Exact(&'static str),
    /// The line must start with the text.
    Prefix(&'static str),
}

impl Sentinel {
    pub fn matches(self, line: &str) -> bool {
        match self {
            Self::Exact(text) => line == text,
            Self::Prefix(text) => line.starts_with(text),
        }
    }
}

/// Which part of a triggered line a rule reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSource {
    /// Text after the trigger literal itself (`Model : <value>`).
    AfterLabel,
    /// Text after the first `": "` (`Total Size . . . : <value>`).
    AfterColon,
    /// The full line, for patterns searched anywhere in it.
    WholeLine,
}

impl ValueSource {
    pub fn capture<'a>(self, trigger: &str, line: &'a str) -> Option<&'a str> {
        match self {
            Self::AfterLabel => line.strip_prefix(trigger),
            Self::AfterColon => line.find(": ").map(|index| &line[index + 2..]),
            Self::WholeLine => Some(line),
        }
    }
}

/// Line that carries the report timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTrigger {
    pub trigger: &'static str,
    pub source: ValueSource,
}

impl DateTrigger {
    /// Returns the date text if `line` is the date line.
    pub fn capture(self, line: &str) -> Option<&str> {
        if line.starts_with(self.trigger) {
            self.source.capture(self.trigger, line)
        } else {
            None
        }
    }
}

/// Whether a rule may overwrite a value set earlier in the same record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assign {
    Always,
    /// Fallback source, used only while the field is still unset.
    IfAbsent,
}

/// Extraction and normalization applied to a triggered value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Split into make and model using a manufacturer prefix table.
    MakeModel(&'static [(&'static str, &'static str)]),
    /// Copy the value as-is.
    Verbatim(Field),
    /// First number tagged with a unit.
    Number(Field, Unit),
    /// `N MB` converted to decimal gigabytes.
    Mebibytes(Field),
    RotationRate,
    /// `N days, N hours, N minutes` summed into hours.
    PowerOnTime,
    /// Health text with a ` (100 %)` suffix removed.
    StripFullHealth,
    /// Health word plus percentage, `Good (92%)`.
    HealthWithPercentage,
}

impl Action {
    /// The field this action writes (the model for make/model splits).
    pub fn field(self) -> Field {
        match self {
            Self::MakeModel(_) => Field::Model,
            Self::Verbatim(field) | Self::Number(field, _) | Self::Mebibytes(field) => field,
            Self::RotationRate => Field::RotationRate,
            Self::PowerOnTime => Field::PowerOnHours,
            Self::StripFullHealth | Self::HealthWithPercentage => Field::HealthStatus,
        }
    }
}

/// Result of applying one rule to one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Assigned,
    /// An [`Assign::IfAbsent`] rule found its field already set.
    Skipped,
    /// The trigger matched but no value could be extracted.
    Missed,
}

/// One row of a format's rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub trigger: &'static str,
    pub source: ValueSource,
    pub action: Action,
    pub assign: Assign,
}

impl FieldRule {
    pub const fn new(trigger: &'static str, source: ValueSource, action: Action) -> Self {
        Self {
            trigger,
            source,
            action,
            assign: Assign::Always,
        }
    }

    pub const fn if_absent(mut self) -> Self {
        self.assign = Assign::IfAbsent;
        self
    }

    pub fn fires(&self, line: &str) -> bool {
        line.starts_with(self.trigger)
    }

    /// Extracts this rule's value from `line` into `record`.
    ///
    /// A miss leaves `record` untouched.
    pub fn apply(&self, line: &str, record: &mut PartialRecord) -> Outcome {
        if self.assign == Assign::IfAbsent && record.contains(self.action.field()) {
            return Outcome::Skipped;
        }
        let Some(text) = self.source.capture(self.trigger, line) else {
            return Outcome::Missed;
        };

        match self.action {
            Action::MakeModel(makers) => {
                let (make, model) = normalize::split_make_model(text, makers);
                record.set(Field::Make, make);
                record.set(Field::Model, model);
            }
            Action::Verbatim(field) => record.set(field, text),
            Action::Number(field, unit) => match normalize::number_before(text, unit) {
                Some(number) => record.set(field, number),
                None => return Outcome::Missed,
            },
            Action::Mebibytes(field) => {
                let megabytes = normalize::number_before(text, Unit::Megabytes)
                    .and_then(|digits| digits.parse::<u64>().ok());
                match megabytes {
                    Some(megabytes) => record.set(field, normalize::mebibytes_to_gigabytes(megabytes)),
                    None => return Outcome::Missed,
                }
            }
            Action::RotationRate => record.set(Field::RotationRate, normalize::rotation_rate(text)),
            Action::PowerOnTime => match normalize::power_on_hours(text) {
                Some(hours) => record.set(Field::PowerOnHours, hours),
                None => return Outcome::Missed,
            },
            Action::StripFullHealth => {
                record.set(Field::HealthStatus, normalize::strip_full_health(text))
            }
            Action::HealthWithPercentage => {
                record.set(Field::HealthStatus, normalize::health_with_percentage(text))
            }
        }
        Outcome::Assigned
    }
}
