use super::numeric::{leading_number, parse_int};
use super::table::Table;
use super::traits::ReportFile;
use tracing::trace;

pub const VALUE_COLUMN: &str = "Value";

pub const TOTAL_BSA_ROW: i64 = 0;
pub const POLAR_BSA_ROW: i64 = 2;
pub const NON_POLAR_BSA_ROW: i64 = 4;

/// A frame's surface statistics report, reduced to its three buried-area rows.
///
/// Rows are addressed by the unlabeled index column; each value cell holds
/// `"<buried> / <other>"` and only the leading number is kept.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AreaReport {
    pub total_bsa: f64,
    pub polar_bsa: f64,
    pub non_polar_bsa: f64,
    skipped_rows: usize,
}

impl ReportFile for AreaReport {
    const REQUIRED_COLUMNS: &'static [&'static str] = &[];

    fn from_table(table: Table) -> Self {
        let mut report = Self {
            skipped_rows: table.skipped_rows,
            ..Self::default()
        };
        for row in &table.rows {
            let Some(index) = row.first().and_then(parse_int) else {
                trace!("Skipping area row on line {} without a row index", row.line);
                report.skipped_rows += 1;
                continue;
            };
            let slot = match index {
                TOTAL_BSA_ROW => &mut report.total_bsa,
                POLAR_BSA_ROW => &mut report.polar_bsa,
                NON_POLAR_BSA_ROW => &mut report.non_polar_bsa,
                _ => continue,
            };
            if let Some(value) = row.get(VALUE_COLUMN).and_then(leading_number) {
                *slot = value;
            }
        }
        report
    }

    fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }
}
