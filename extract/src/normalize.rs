//! Value extraction and normalization for report fields.
//!
//! Every function here is pure and never fails loudly: a value that cannot
//! be recognized comes back as `None` and the caller leaves the field unset.

use regex::Regex;
use std::sync::LazyLock;

/// Regex patterns shared by the rule tables.
static PATTERNS: LazyLock<ReportPatterns> = LazyLock::new(ReportPatterns::new);

struct ReportPatterns {
    decimal_gigabytes: Regex,
    gigabytes: Regex,
    megabytes: Regex,
    hours: Regex,
    count: Regex,
    trailing_number: Regex,
    days: Regex,
    minutes: Regex,
    rpm: Regex,
    health_word: Regex,
    health_percent: Regex,
}

impl ReportPatterns {
    fn new() -> Self {
        Self {
            decimal_gigabytes: Regex::new(r"(\d+\.\d+) GB").expect("static regex must compile"),
            gigabytes: Regex::new(r"(\d+) GB").expect("static regex must compile"),
            megabytes: Regex::new(r"(\d+) MB").expect("static regex must compile"),
            hours: Regex::new(r"(\d+) hours").expect("static regex must compile"),
            count: Regex::new(r"(\d+) count").expect("static regex must compile"),
            trailing_number: Regex::new(r"(\d+)$").expect("static regex must compile"),
            days: Regex::new(r"(\d+) days").expect("static regex must compile"),
            minutes: Regex::new(r"(\d+) minutes").expect("static regex must compile"),
            rpm: Regex::new(r"(\d+) RPM").expect("static regex must compile"),
            health_word: Regex::new(r"\(([\w\s]+)\)").expect("static regex must compile"),
            health_percent: Regex::new(r"(\d+) %").expect("static regex must compile"),
        }
    }
}

/// A number followed by a unit marker, searched anywhere in a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// `1000.2 GB`
    DecimalGigabytes,
    /// `1234 GB`
    Gigabytes,
    /// `953869 MB`
    Megabytes,
    /// `5120 hours`
    Hours,
    /// `731 count`
    Count,
    /// A bare number ending the line.
    EndOfLine,
}

impl Unit {
    fn pattern(self) -> &'static Regex {
        let patterns = &*PATTERNS;
        match self {
            Self::DecimalGigabytes => &patterns.decimal_gigabytes,
            Self::Gigabytes => &patterns.gigabytes,
            Self::Megabytes => &patterns.megabytes,
            Self::Hours => &patterns.hours,
            Self::Count => &patterns.count,
            Self::EndOfLine => &patterns.trailing_number,
        }
    }
}

/// Returns the first number tagged with `unit` in `line`, without the unit.
///
/// # Examples
///
/// ```
/// use disk_report_extract::normalize::{number_before, Unit};
///
/// let line = "Disk Size : 1000.2 GB (8.4/137.4/1000.2/1000.2)";
/// assert_eq!(number_before(line, Unit::DecimalGigabytes), Some("1000.2"));
/// assert_eq!(number_before("Power On Count : n/a", Unit::Count), None);
/// ```
pub fn number_before(line: &str, unit: Unit) -> Option<&str> {
    first_capture(unit.pattern(), line)
}

/// Splits a raw model string into `(make, model)`.
///
/// A string with a space splits at the first one. Otherwise the first
/// matching prefix in `makers` names the manufacturer and the model keeps the
/// full text. With no match the make is empty.
///
/// # Examples
///
/// ```
/// use disk_report_extract::normalize::split_make_model;
///
/// let makers = [("ST", "Seagate"), ("WD", "WDC")];
/// assert_eq!(
///     split_make_model("Samsung SSD 870", &makers),
///     ("Samsung".to_string(), "SSD 870".to_string())
/// );
/// assert_eq!(
///     split_make_model("ST4000DM004", &makers),
///     ("Seagate".to_string(), "ST4000DM004".to_string())
/// );
/// assert_eq!(
///     split_make_model("XYZ123", &makers),
///     (String::new(), "XYZ123".to_string())
/// );
/// ```
pub fn split_make_model(text: &str, makers: &[(&str, &str)]) -> (String, String) {
    if let Some((make, model)) = text.split_once(' ') {
        return (make.to_string(), model.to_string());
    }
    let make = makers
        .iter()
        .find(|(prefix, _)| text.starts_with(prefix))
        .map(|(_, make)| make.to_string())
        .unwrap_or_default();
    (make, text.to_string())
}

/// Converts a mebibyte count to decimal gigabytes with one fractional digit.
///
/// The input is read as binary megabytes (`× 1024 × 1024` bytes) and the
/// output is decimal gigabytes (`/ 1000³`).
///
/// ```
/// use disk_report_extract::normalize::mebibytes_to_gigabytes;
///
/// assert_eq!(mebibytes_to_gigabytes(1_000_000), "1048.6");
/// assert_eq!(mebibytes_to_gigabytes(953_869), "1000.2");
/// ```
pub fn mebibytes_to_gigabytes(megabytes: u64) -> String {
    let bytes = u128::from(megabytes) * 1024 * 1024;
    let tenths = round_half_even(bytes, 100_000_000);
    format!("{}.{}", tenths / 10, tenths % 10)
}

/// Normalizes a rotation-rate description.
///
/// `7200 RPM` becomes `7200`, anything mentioning ` (SSD)` becomes `SSD`,
/// and other text passes through unchanged.
pub fn rotation_rate(text: &str) -> String {
    if text.contains(" RPM") {
        match first_capture(&PATTERNS.rpm, text) {
            Some(rpm) => rpm.to_string(),
            None => text.replace(" RPM", ""),
        }
    } else if text.contains(" (SSD)") {
        "SSD".to_string()
    } else {
        text.to_string()
    }
}

/// Sums `N days`, `N hours` and `N minutes` found in `line` into whole hours.
///
/// Each part is optional and contributes zero when absent. The total is
/// rounded half-to-even, so exactly half an hour rounds to the even
/// neighbour. Returns `None` only when a present part does not fit in a
/// `u64`.
///
/// ```
/// use disk_report_extract::normalize::power_on_hours;
///
/// let line = "Power On Time : 2 days, 3 hours, 30 minutes";
/// assert_eq!(power_on_hours(line).as_deref(), Some("52"));
/// ```
pub fn power_on_hours(line: &str) -> Option<String> {
    let part = |pattern: &Regex| -> Option<u128> {
        match first_capture(pattern, line) {
            Some(digits) => digits.parse::<u64>().ok().map(u128::from),
            None => Some(0),
        }
    };
    let days = part(&PATTERNS.days)?;
    let hours = part(&PATTERNS.hours)?;
    let minutes = part(&PATTERNS.minutes)?;

    let total_minutes = days * 24 * 60 + hours * 60 + minutes;
    Some(round_half_even(total_minutes, 60).to_string())
}

/// Drops the ` (100 %)` suffix a fully healthy disk reports.
pub fn strip_full_health(text: &str) -> String {
    if text.contains(" (100 %)") {
        text.replace(" (100 %)", "")
    } else {
        text.to_string()
    }
}

/// Builds `"<word> (<pct>%)"` from a health line such as
/// `#### 92 % (Good)`.
///
/// The word defaults to `Unknown` when no parenthesized word is present; the
/// percentage is appended only when found.
///
/// ```
/// use disk_report_extract::normalize::health_with_percentage;
///
/// assert_eq!(health_with_percentage("#### 92 % (Good)"), "Good (92%)");
/// assert_eq!(health_with_percentage("#### 40 %"), "Unknown (40%)");
/// assert_eq!(health_with_percentage("?"), "Unknown");
/// ```
pub fn health_with_percentage(text: &str) -> String {
    let mut status = first_capture(&PATTERNS.health_word, text)
        .unwrap_or("Unknown")
        .to_string();
    if let Some(percent) = first_capture(&PATTERNS.health_percent, text) {
        status.push_str(&format!(" ({percent}%)"));
    }
    status
}

fn first_capture<'a>(pattern: &Regex, text: &'a str) -> Option<&'a str> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn round_half_even(numerator: u128, divisor: u128) -> u128 {
    let quotient = numerator / divisor;
    let twice_remainder = (numerator % divisor) * 2;
    if twice_remainder > divisor || (twice_remainder == divisor && quotient % 2 == 1) {
        quotient + 1
    } else {
        quotient
    }
}
