use super::table::{Table, TableError, read_table, read_table_from};
use std::io::Read;
use std::path::Path;

/// Defines how a per-frame CSV report is turned into a typed value.
///
/// Implementors only describe their required columns and how to interpret the surviving
/// rows; reading, row filtering and missing-file handling are shared.
pub trait ReportFile: Sized {
    /// Columns a row must carry (non-empty) to be handed to [`ReportFile::from_table`].
    const REQUIRED_COLUMNS: &'static [&'static str];

    /// Builds the report from rows that passed the required-column check.
    fn from_table(table: Table) -> Self;

    /// Number of rows that were dropped while reading or interpreting the file.
    fn skipped_rows(&self) -> usize;

    /// Reads a report from any CSV source.
    ///
    /// # Errors
    ///
    /// Returns an error if the CSV header or a record cannot be read.
    fn read_from(reader: impl Read) -> Result<Self, csv::Error> {
        read_table_from(reader, Self::REQUIRED_COLUMNS).map(Self::from_table)
    }

    /// Reads a report from a file path. A missing file yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be opened or parsed.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Option<Self>, TableError> {
        Ok(read_table(path.as_ref(), Self::REQUIRED_COLUMNS)?.map(Self::from_table))
    }
}
