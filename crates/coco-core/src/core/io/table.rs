use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::trace;

const UTF8_BOM: char = '\u{feff}';

#[derive(Debug, Error)]
pub enum TableError {
    #[error("File I/O error for '{path}': {source}", path = path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("CSV parsing error for '{path}': {source}", path = path.display())]
    Csv { path: PathBuf, source: csv::Error },
}

/// A CSV data row: cells in file order, keyed by their column header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub line: u64,
    cells: Vec<(String, String)>,
}

impl Row {
    /// Value of `column`, or `None` if the row is too short to reach it.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(header, _)| header == column)
            .map(|(_, value)| value.as_str())
    }

    /// Like [`Row::get`], but also treats an empty cell as absent.
    pub fn get_non_empty(&self, column: &str) -> Option<&str> {
        self.get(column).filter(|v| !v.is_empty())
    }

    /// The first cell of the row, whatever its header (often unlabeled index columns).
    pub fn first(&self) -> Option<&str> {
        self.cells.first().map(|(_, value)| value.as_str())
    }

    fn has_all(&self, required: &[&str]) -> bool {
        required.iter().all(|c| self.get_non_empty(c).is_some())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub rows: Vec<Row>,
    pub skipped_rows: usize, // Rows dropped for missing a required column or invalid UTF-8
}

/// Reads the CSV file at `path`, keeping only rows that carry every `required` column.
///
/// A file that does not exist yields `Ok(None)`.
///
/// # Errors
///
/// Returns [`TableError::Io`] if an existing file cannot be opened and [`TableError::Csv`]
/// if its header or a record cannot be read.
pub fn read_table(path: &Path, required: &[&str]) -> Result<Option<Table>, TableError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(TableError::Io {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };
    read_table_from(file, required)
        .map(Some)
        .map_err(|e| TableError::Csv {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Reader-based core of [`read_table`].
pub fn read_table_from(reader: impl Read, required: &[&str]) -> Result<Table, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .enumerate()
        .map(|(i, h)| {
            if i == 0 {
                h.trim_start_matches(UTF8_BOM).to_string()
            } else {
                h.to_string()
            }
        })
        .collect();

    let mut table = Table::default();
    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) if matches!(e.kind(), csv::ErrorKind::Utf8 { .. }) => {
                trace!("Skipping row with invalid UTF-8: {}", e);
                table.skipped_rows += 1;
                continue;
            }
            Err(e) => return Err(e),
        };

        let line = record.position().map_or(0, |p| p.line());
        let cells = headers
            .iter()
            .zip(record.iter())
            .map(|(h, v)| (h.clone(), v.to_string()))
            .collect();
        let row = Row { line, cells };

        if row.has_all(required) {
            table.rows.push(row);
        } else {
            trace!("Skipping row on line {} lacking a required column", line);
            table.skipped_rows += 1;
        }
    }
    Ok(table)
}
