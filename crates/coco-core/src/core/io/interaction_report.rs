use super::numeric::parse_int;
use super::table::{Row, Table};
use super::traits::ReportFile;
use crate::core::models::interaction::{InteractionRecord, split_interaction_types};
use crate::core::models::residue::{ResiduePairKey, ResidueRef};
use tracing::trace;

pub const RES_NAME_1: &str = "Res. Name 1";
pub const RES_NUMBER_1: &str = "Res. Number 1";
pub const CHAIN_1: &str = "Chain 1";
pub const RES_NAME_2: &str = "Res. Name 2";
pub const RES_NUMBER_2: &str = "Res. Number 2";
pub const CHAIN_2: &str = "Chain 2";
pub const INTERACTION_TYPES: &str = "Type of Interactions";

/// A frame's residue-pair interaction detail report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionReport {
    pub records: Vec<InteractionRecord>,
    skipped_rows: usize,
}

impl ReportFile for InteractionReport {
    const REQUIRED_COLUMNS: &'static [&'static str] = &[
        RES_NAME_1,
        RES_NUMBER_1,
        CHAIN_1,
        RES_NAME_2,
        RES_NUMBER_2,
        CHAIN_2,
    ];

    fn from_table(table: Table) -> Self {
        let mut report = Self {
            records: Vec::with_capacity(table.rows.len()),
            skipped_rows: table.skipped_rows,
        };
        for row in &table.rows {
            match parse_record(row) {
                Some(record) => report.records.push(record),
                None => {
                    trace!("Skipping interaction row on line {} with a non-integer residue number", row.line);
                    report.skipped_rows += 1;
                }
            }
        }
        report
    }

    fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }
}

fn parse_record(row: &Row) -> Option<InteractionRecord> {
    let first = parse_residue(row, RES_NAME_1, RES_NUMBER_1, CHAIN_1)?;
    let second = parse_residue(row, RES_NAME_2, RES_NUMBER_2, CHAIN_2)?;
    let types = row
        .get_non_empty(INTERACTION_TYPES)
        .map(split_interaction_types)
        .unwrap_or_default();
    Some(InteractionRecord::new(
        ResiduePairKey::new(first, second),
        types,
    ))
}

fn parse_residue(row: &Row, name: &str, number: &str, chain: &str) -> Option<ResidueRef> {
    Some(ResidueRef::new(
        row.get_non_empty(name)?,
        parse_int(row.get_non_empty(number)?)?,
        row.get_non_empty(chain)?,
    ))
}
