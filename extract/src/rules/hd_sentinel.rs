//! Rules for Hard Disk Sentinel "Disk report" exports.
//!
//! Labels are padded with dot leaders, so values are read after the first
//! `": "` of the line:
//!
//! ```text
//! -- Physical Disk Information - Disk: #0: ST4000DM004-2CV104 --
//! Hard Disk Model ID . . . . . . . . . . . . . . . : ST4000DM004-2CV104
//! Total Size . . . . . . . . . . . . . . . . . . . : 3815447 MB
//! Power On Time  . . . . . . . . . . . . . . . . . : 402 days, 7 hours
//! ```

use disk_report_core::Field;

use super::{Action, DateTrigger, FieldRule, Sentinel, ValueSource};
use crate::normalize::Unit;

pub const DATE: DateTrigger = DateTrigger {
    trigger: "Current Date And Time",
    source: ValueSource::AfterColon,
};

/// The real line continues with the disk number and model.
pub const START: Sentinel = Sentinel::Prefix("-- Physical Disk Information");

pub const END: Sentinel = Sentinel::Exact("Transfer Rate Information");

/// Manufacturer prefixes for model strings without a space, in priority order.
pub const MAKERS: &[(&str, &str)] = &[
    ("ST", "Seagate"),
    ("CT", "Crucial"),
    ("HDS", "Hitachi"),
    ("HFM", "SK Hynix"),
    ("WD", "WDC"),
    ("Micron", "Micron"),
    ("STM", "Seagate Maxtor"),
];

pub const RULES: &[FieldRule] = &[
    FieldRule::new("Hard Disk Model ID", ValueSource::AfterColon, Action::MakeModel(MAKERS)),
    FieldRule::new(
        "Firmware Revision",
        ValueSource::AfterColon,
        Action::Verbatim(Field::Firmware),
    ),
    FieldRule::new(
        "Hard Disk Serial Number",
        ValueSource::AfterColon,
        Action::Verbatim(Field::SerialNumber),
    ),
    FieldRule::new("Total Size", ValueSource::WholeLine, Action::Mebibytes(Field::SizeGb)),
    FieldRule::new("Rotational Speed", ValueSource::AfterColon, Action::RotationRate),
    FieldRule::new(
        "Nominal Media Rotation Rate",
        ValueSource::AfterColon,
        Action::RotationRate,
    )
    .if_absent(),
    FieldRule::new("Disk Interface", ValueSource::AfterColon, Action::Verbatim(Field::Interface)),
    FieldRule::new("Power On Time", ValueSource::WholeLine, Action::PowerOnTime),
    FieldRule::new(
        "Accumulated start-stop cycles",
        ValueSource::WholeLine,
        Action::Number(Field::PowerOnCount, Unit::EndOfLine),
    ),
    FieldRule::new("Health", ValueSource::AfterColon, Action::HealthWithPercentage),
];

/// The trailing columns are kept for hand-maintained inventory data.
pub const COLUMNS: &[Field] = &[
    Field::Make,
    Field::Model,
    Field::Firmware,
    Field::SerialNumber,
    Field::SizeGb,
    Field::RotationRate,
    Field::Interface,
    Field::PowerOnHours,
    Field::PowerOnCount,
    Field::HealthStatus,
    Field::InfoDate,
    Field::Owner,
    Field::Listed,
    Field::Sold,
    Field::SoldDate,
    Field::Price,
];
