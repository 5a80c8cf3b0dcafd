//! Provides the file-level readers for the CoCoMaps output tree.
//!
//! Frame directories are discovered by [`layout`], CSV reports are read through the tolerant
//! [`table`] reader and converted into typed reports by implementors of
//! [`traits::ReportFile`]. A report file that does not exist is never an error here; it
//! surfaces as `None` so callers can count it as missing coverage.

pub mod area_report;
pub mod interaction_report;
pub mod layout;
pub mod numeric;
pub mod summary_report;
pub mod table;
pub mod traits;
