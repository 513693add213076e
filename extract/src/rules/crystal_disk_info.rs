//! Rules for CrystalDiskInfo text exports.
//!
//! A disk block looks like:
//!
//! ```text
//! ----------------------------------------------------------------------------
//!  (1) Samsung SSD 870 EVO 1TB
//! ----------------------------------------------------------------------------
//!            Model : Samsung SSD 870 EVO 1TB
//!         Firmware : SVT01B6Q
//!    Serial Number : S6PTNZ0R612345A
//!        Disk Size : 1000.2 GB (8.4/137.4/1000.2/1000.2)
//!    ...
//! -- S.M.A.R.T. --------------------------------------------------------------
//! ```

use disk_report_core::Field;

use super::{Action, DateTrigger, FieldRule, Sentinel, ValueSource};
use crate::normalize::Unit;

pub const DATE: DateTrigger = DateTrigger {
    trigger: "Date : ",
    source: ValueSource::AfterLabel,
};

pub const START: Sentinel =
    Sentinel::Exact("----------------------------------------------------------------------------");

pub const END: Sentinel =
    Sentinel::Exact("-- S.M.A.R.T. --------------------------------------------------------------");

/// Manufacturer prefixes for model strings without a space, in priority order.
pub const MAKERS: &[(&str, &str)] = &[
    ("ST", "Seagate"),
    ("CT", "Crucial"),
    ("HDS", "Hitachi"),
    ("HFM", "SK Hynix"),
    ("WD", "WDC"),
    ("Micron", "Micron"),
    ("STM", "Seagate Maxtor"),
    ("F2C", "Fortinet OCZ"),
];

pub const RULES: &[FieldRule] = &[
    FieldRule::new("Model : ", ValueSource::AfterLabel, Action::MakeModel(MAKERS)),
    FieldRule::new("Firmware : ", ValueSource::AfterLabel, Action::Verbatim(Field::Firmware)),
    FieldRule::new(
        "Serial Number : ",
        ValueSource::AfterLabel,
        Action::Verbatim(Field::SerialNumber),
    ),
    FieldRule::new(
        "Disk Size : ",
        ValueSource::WholeLine,
        Action::Number(Field::SizeGb, Unit::DecimalGigabytes),
    ),
    FieldRule::new("Rotation Rate : ", ValueSource::AfterLabel, Action::RotationRate),
    FieldRule::new("Interface : ", ValueSource::AfterLabel, Action::Verbatim(Field::Interface)),
    FieldRule::new(
        "Power On Hours : ",
        ValueSource::WholeLine,
        Action::Number(Field::PowerOnHours, Unit::Hours),
    ),
    FieldRule::new(
        "Power On Count : ",
        ValueSource::WholeLine,
        Action::Number(Field::PowerOnCount, Unit::Count),
    ),
    FieldRule::new("Health Status : ", ValueSource::AfterLabel, Action::StripFullHealth),
    FieldRule::new(
        "Host Reads : ",
        ValueSource::WholeLine,
        Action::Number(Field::HostReadsGb, Unit::Gigabytes),
    ),
    FieldRule::new(
        "Host Writes : ",
        ValueSource::WholeLine,
        Action::Number(Field::HostWritesGb, Unit::Gigabytes),
    ),
    FieldRule::new(
        "NAND Writes : ",
        ValueSource::WholeLine,
        Action::Number(Field::NandWritesGb, Unit::Gigabytes),
    ),
];

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
    Field::HostReadsGb,
    Field::HostWritesGb,
    Field::NandWritesGb,
    Field::InfoDate,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels_are_full_width() {
        let (Sentinel::Exact(start), Sentinel::Exact(end)) = (START, END) else {
            panic!("CrystalDiskInfo sentinels are exact lines");
        };
        assert_eq!(start.len(), 76);
        assert_eq!(end.len(), 76);
        assert!(start.chars().all(|c| c == '-'));
        assert!(end.starts_with("-- S.M.A.R.T. -"));
    }

    #[test]
    fn test_triggers_do_not_shadow_each_other() {
        for (i, a) in RULES.iter().enumerate() {
            for b in RULES.iter().skip(i + 1) {
                assert!(
                    !a.trigger.starts_with(b.trigger) && !b.trigger.starts_with(a.trigger),
                    "{:?} overlaps {:?}",
                    a.trigger,
                    b.trigger
                );
            }
        }
    }

    #[test]
    fn test_columns_cover_every_rule_field() {
        for rule in RULES {
            assert!(COLUMNS.contains(&rule.action.field()));
        }
        assert!(COLUMNS.contains(&Field::Make));
    }
}
