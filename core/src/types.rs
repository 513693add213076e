//! Record type definitions for disk report rows.
//!
//! This module defines the data model shared by every report format: the
//! closed set of output columns ([`Field`]), the finalized row ([`Record`])
//! and the row being assembled while a report is scanned
//! ([`PartialRecord`]).

use serde::{Deserialize, Serialize};

/// One output column.
///
/// The set is closed: each report format declares which of these columns
/// it writes, and in which order.
///
/// # Examples
///
/// ```
/// use disk_report_core::Field;
///
/// assert_eq!(Field::SerialNumber.column_name(), "serial_number");
/// assert_eq!(Field::NandWritesGb.column_name(), "NAND_writes_GB");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    #[serde(rename = "make")]
    Make,
    #[serde(rename = "model")]
    Model,
    #[serde(rename = "firmware")]
    Firmware,
    #[serde(rename = "serial_number")]
    SerialNumber,
    #[serde(rename = "size_gb")]
    SizeGb,
    #[serde(rename = "rotation_rate")]
    RotationRate,
    #[serde(rename = "interface")]
    Interface,
    #[serde(rename = "power_on_hours")]
    PowerOnHours,
    #[serde(rename = "power_on_count")]
    PowerOnCount,
    #[serde(rename = "health_status")]
    HealthStatus,
    #[serde(rename = "host_reads_GB")]
    HostReadsGb,
    #[serde(rename = "host_writes_GB")]
    HostWritesGb,
    #[serde(rename = "NAND_writes_GB")]
    NandWritesGb,
    #[serde(rename = "info_date")]
    InfoDate,
    #[serde(rename = "owner")]
    Owner,
    #[serde(rename = "listed")]
    Listed,
    #[serde(rename = "sold")]
    Sold,
    #[serde(rename = "sold_date")]
    SoldDate,
    #[serde(rename = "price")]
    Price,
}

impl Field {
    /// Column header written for this field.
    pub fn column_name(self) -> &'static str {
        match self {
            Self::Make => "make",
            Self::Model => "model",
            Self::Firmware => "firmware",
            Self::SerialNumber => "serial_number",
            Self::SizeGb => "size_gb",
            Self::RotationRate => "rotation_rate",
            Self::Interface => "interface",
            Self::PowerOnHours => "power_on_hours",
            Self::PowerOnCount => "power_on_count",
            Self::HealthStatus => "health_status",
            Self::HostReadsGb => "host_reads_GB",
            Self::HostWritesGb => "host_writes_GB",
            Self::NandWritesGb => "NAND_writes_GB",
            Self::InfoDate => "info_date",
            Self::Owner => "owner",
            Self::Listed => "listed",
            Self::Sold => "sold",
            Self::SoldDate => "sold_date",
            Self::Price => "price",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column_name())
    }
}

/// A finalized report row.
///
/// Every field is optional: a report that never mentions a value (or
/// mentions it in a form no rule understands) leaves it absent rather than
/// zero-filled. Identity is [`serial_number`](Record::serial_number),
/// compared exactly as reported.
///
/// Records are only produced by [`PartialRecord::finish`] and are not
/// modified afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub make: Option<String>,
    pub model: Option<String>,
    pub firmware: Option<String>,
    pub serial_number: Option<String>,
    pub size_gb: Option<String>,
    pub rotation_rate: Option<String>,
    pub interface: Option<String>,
    pub power_on_hours: Option<String>,
    pub power_on_count: Option<String>,
    pub health_status: Option<String>,
    #[serde(rename = "host_reads_GB")]
    pub host_reads_gb: Option<String>,
    #[serde(rename = "host_writes_GB")]
    pub host_writes_gb: Option<String>,
    #[serde(rename = "NAND_writes_GB")]
    pub nand_writes_gb: Option<String>,
    pub info_date: Option<String>,
    pub owner: Option<String>,
    pub listed: Option<String>,
    pub sold: Option<String>,
    pub sold_date: Option<String>,
    pub price: Option<String>,
}

impl Record {
    /// Returns the value stored for `field`, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use disk_report_core::{Field, PartialRecord};
    ///
    /// let mut partial = PartialRecord::dated("2024/01/02 10:00:00");
    /// partial.set(Field::SerialNumber, "WD-123");
    /// let record = partial.finish();
    ///
    /// assert_eq!(record.get(Field::SerialNumber), Some("WD-123"));
    /// assert_eq!(record.get(Field::Firmware), None);
    /// ```
    pub fn get(&self, field: Field) -> Option<&str> {
        self.slot(field).as_deref()
    }

    /// Key used for serial-number deduplication.
    ///
    /// A record without a serial number is keyed by the empty string, so
    /// two such records collide with each other.
    pub fn dedup_key(&self) -> &str {
        self.serial_number.as_deref().unwrap_or("")
    }

    fn slot(&self, field: Field) -> &Option<String> {
        match field {
            Field::Make => &self.make,
            Field::Model => &self.model,
            Field::Firmware => &self.firmware,
            Field::SerialNumber => &self.serial_number,
            Field::SizeGb => &self.size_gb,
            Field::RotationRate => &self.rotation_rate,
            Field::Interface => &self.interface,
            Field::PowerOnHours => &self.power_on_hours,
            Field::PowerOnCount => &self.power_on_count,
            Field::HealthStatus => &self.health_status,
            Field::HostReadsGb => &self.host_reads_gb,
            Field::HostWritesGb => &self.host_writes_gb,
            Field::NandWritesGb => &self.nand_writes_gb,
            Field::InfoDate => &self.info_date,
            Field::Owner => &self.owner,
            Field::Listed => &self.listed,
            Field::Sold => &self.sold,
            Field::SoldDate => &self.sold_date,
            Field::Price => &self.price,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Make => &mut self.make,
            Field::Model => &mut self.model,
            Field::Firmware => &mut self.firmware,
            Field::SerialNumber => &mut self.serial_number,
            Field::SizeGb => &mut self.size_gb,
            Field::RotationRate => &mut self.rotation_rate,
            Field::Interface => &mut self.interface,
            Field::PowerOnHours => &mut self.power_on_hours,
            Field::PowerOnCount => &mut self.power_on_count,
            Field::HealthStatus => &mut self.health_status,
            Field::HostReadsGb => &mut self.host_reads_gb,
            Field::HostWritesGb => &mut self.host_writes_gb,
            Field::NandWritesGb => &mut self.nand_writes_gb,
            Field::InfoDate => &mut self.info_date,
            Field::Owner => &mut self.owner,
            Field::Listed => &mut self.listed,
            Field::Sold => &mut self.sold,
            Field::SoldDate => &mut self.sold_date,
            Field::Price => &mut self.price,
        }
    }
}

/// A row under construction between a start and an end sentinel.
///
/// Values are set (and overwritten) one field at a time. Nothing is
/// validated: [`finish`](PartialRecord::finish) accepts whatever subset of
/// fields was collected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialRecord {
    record: Record,
}

impl PartialRecord {
    /// Opens a new row seeded with the report date seen so far.
    pub fn dated(info_date: &str) -> Self {
        let mut partial = Self::default();
        partial.set(Field::InfoDate, info_date);
        partial
    }

    /// Sets `field`, replacing any earlier value.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.record.slot_mut(field) = Some(value.into());
    }

    /// Returns `true` if `field` already holds a value.
    pub fn contains(&self, field: Field) -> bool {
        self.record.slot(field).is_some()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.record.get(field)
    }

    /// Closes the row.
    pub fn finish(self) -> Record {
        self.record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dated_partial_only_sets_info_date() {
        let record = PartialRecord::dated("").finish();
        assert_eq!(record.info_date.as_deref(), Some(""));
        assert_eq!(
            record,
            Record {
                info_date: Some(String::new()),
                ..Record::default()
            }
        );
    }

    #[test]
    fn test_set_overwrites_previous_value() {
        let mut partial = PartialRecord::default();
        partial.set(Field::RotationRate, "5400");
        partial.set(Field::RotationRate, "7200");
        assert!(partial.contains(Field::RotationRate));
        assert_eq!(partial.get(Field::RotationRate), Some("7200"));
    }

    #[test]
    fn test_get_maps_every_field_to_its_slot() {
        let all = [
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
            Field::Owner,
            Field::Listed,
            Field::Sold,
            Field::SoldDate,
            Field::Price,
        ];
        let mut partial = PartialRecord::default();
        for field in all {
            partial.set(field, field.column_name());
        }
        let record = partial.finish();
        for field in all {
            assert_eq!(record.get(field), Some(field.column_name()));
        }
    }

    #[test]
    fn test_dedup_key_defaults_to_empty() {
        let record = PartialRecord::default().finish();
        assert_eq!(record.dedup_key(), "");
    }

    #[test]
    fn test_serialized_names_match_column_names() {
        let mut partial = PartialRecord::default();
        partial.set(Field::HostReadsGb, "12");
        let json = serde_json::to_value(partial.finish()).unwrap();
        assert_eq!(json["host_reads_GB"], "12");
        assert!(json["serial_number"].is_null());

        let field = serde_json::to_value(Field::NandWritesGb).unwrap();
        assert_eq!(field, Field::NandWritesGb.column_name());
    }
}
