//! Core record types for consolidated disk diagnostic reports.
//!
//! This crate defines the data model shared by every report format:
//!
//! - [`Field`]: the closed set of output columns.
//! - [`PartialRecord`]: a row being assembled while a report is scanned.
//! - [`Record`]: a finalized row; every field is optional.
//! - [`ResultSet`]: the accumulator that keeps the newest record per disk
//!   serial number.
//!
//! # Example
//!
//! ```
//! use disk_report_core::*;
//!
//! let mut partial = PartialRecord::dated("2024/03/01 08:00:00");
//! partial.set(Field::SerialNumber, "S5GXNF0R123456");
//! partial.set(Field::Make, "Samsung");
//!
//! let mut results = ResultSet::new();
//! assert!(results.submit(partial.finish()).is_none());
//! assert_eq!(results.len(), 1);
//! ```

mod result_set;
mod types;

pub use result_set::ResultSet;
pub use types::*;
