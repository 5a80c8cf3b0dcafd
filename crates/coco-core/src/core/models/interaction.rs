use super::frame::FrameIndex;
use super::residue::ResiduePairKey;
use std::collections::BTreeSet;

pub const TYPE_SEPARATOR: char = ';';

/// One row of a frame's interaction report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionRecord {
    pub pair: ResiduePairKey,
    pub types: BTreeSet<String>,
}

impl InteractionRecord {
    pub fn new(pair: ResiduePairKey, types: BTreeSet<String>) -> Self {
        Self { pair, types }
    }
}

/// Splits a `;`-delimited type cell into trimmed, non-empty labels.
pub fn split_interaction_types(cell: &str) -> BTreeSet<String> {
    cell.split(TYPE_SEPARATOR)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// A residue pair reconciled across every frame in which it was observed.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedInteraction {
    pub pair: ResiduePairKey,
    pub frames: BTreeSet<FrameIndex>,
    pub types: BTreeSet<String>,
    pub consistency: f64,
}

impl AggregatedInteraction {
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn id1(&self) -> String {
        self.pair.first.label()
    }

    pub fn id2(&self) -> String {
        self.pair.second.label()
    }
}
