use super::table::Table;
use super::traits::ReportFile;

pub const PROPERTY_COLUMN: &str = "Property";
pub const VALUE_COLUMN: &str = "Value";

/// One `Property`/`Value` pair of a summary table. The value is kept raw so that the
/// caller decides how strictly to interpret it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryEntry {
    pub line: u64,
    pub property: String,
    pub value: Option<String>,
}

/// A frame's summary-table report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryReport {
    pub entries: Vec<SummaryEntry>,
    skipped_rows: usize,
}

impl ReportFile for SummaryReport {
    const REQUIRED_COLUMNS: &'static [&'static str] = &[PROPERTY_COLUMN];

    fn from_table(table: Table) -> Self {
        let entries = table
            .rows
            .iter()
            .filter_map(|row| {
                Some(SummaryEntry {
                    line: row.line,
                    property: row.get_non_empty(PROPERTY_COLUMN)?.to_string(),
                    value: row.get_non_empty(VALUE_COLUMN).map(str::to_string),
                })
            })
            .collect();
        Self {
            entries,
            skipped_rows: table.skipped_rows,
        }
    }

    fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }
}
