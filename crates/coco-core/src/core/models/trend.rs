use super::frame::FrameIndex;
use serde::ser::{Serialize, SerializeMap, Serializer};

pub const TREND_CATEGORY_COUNT: usize = 12;

/// The fixed set of interaction categories tallied per frame from a summary table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TrendCategory {
    HBonds,
    SaltBridges,
    PiPi,
    CationPi,
    AnionPi,
    ChOn,
    ChPi,
    Halogen,
    ApolarVdw,
    PolarVdw,
    ProximalContacts,
    Clashes,
}

impl TrendCategory {
    pub const ALL: [TrendCategory; TREND_CATEGORY_COUNT] = [
        TrendCategory::HBonds,
        TrendCategory::SaltBridges,
        TrendCategory::PiPi,
        TrendCategory::CationPi,
        TrendCategory::AnionPi,
        TrendCategory::ChOn,
        TrendCategory::ChPi,
        TrendCategory::Halogen,
        TrendCategory::ApolarVdw,
        TrendCategory::PolarVdw,
        TrendCategory::ProximalContacts,
        TrendCategory::Clashes,
    ];

    /// Key used for this category in serialized trend listings.
    pub fn label(self) -> &'static str {
        match self {
            TrendCategory::HBonds => "H-bonds",
            TrendCategory::SaltBridges => "Salt-bridges",
            TrendCategory::PiPi => "π-π interactions",
            TrendCategory::CationPi => "Cation-π interactions",
            TrendCategory::AnionPi => "Anion-π interactions",
            TrendCategory::ChOn => "CH-O/N bonds",
            TrendCategory::ChPi => "CH-π interactions",
            TrendCategory::Halogen => "Halogen bonds",
            TrendCategory::ApolarVdw => "Apolar vdW contacts",
            TrendCategory::PolarVdw => "Polar vdW contacts",
            TrendCategory::ProximalContacts => "Proximal contacts",
            TrendCategory::Clashes => "Clashes",
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

/// Per-frame counts for every [`TrendCategory`]. All twelve series always have the
/// same length: one entry per frame pushed with [`TrendSeries::push_frame`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrendSeries {
    frames: Vec<FrameIndex>,
    counts: [Vec<i64>; TREND_CATEGORY_COUNT],
}

impl TrendSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a slot for `frame`, defaulting every category to 0.
    pub fn push_frame(&mut self, frame: FrameIndex) {
        self.frames.push(frame);
        for series in self.counts.iter_mut() {
            series.push(0);
        }
    }

    /// Overwrites the count of `category` for the most recently pushed frame.
    /// Returns `false` when no frame has been pushed yet.
    pub fn set_latest(&mut self, category: TrendCategory, value: i64) -> bool {
        match self.counts[category.slot()].last_mut() {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, category: TrendCategory) -> &[i64] {
        &self.counts[category.slot()]
    }

    pub fn frames(&self) -> &[FrameIndex] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl Serialize for TrendSeries {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(TREND_CATEGORY_COUNT))?;
        for category in TrendCategory::ALL {
            map.serialize_entry(category.label(), self.get(category))?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_each_category_once_in_slot_order() {
        for (i, category) in TrendCategory::ALL.iter().enumerate() {
            assert_eq!(category.slot(), i);
        }
    }

    #[test]
    fn push_frame_extends_every_category_with_zero() {
        let mut series = TrendSeries::new();
        series.push_frame(1);
        series.push_frame(2);
        for category in TrendCategory::ALL {
            assert_eq!(series.get(category), &[0, 0]);
        }
        assert_eq!(series.frames(), &[1, 2]);
    }

    #[test]
    fn set_latest_only_touches_last_frame_of_one_category() {
        let mut series = TrendSeries::new();
        series.push_frame(1);
        series.push_frame(2);
        assert!(series.set_latest(TrendCategory::Clashes, 4));
        assert_eq!(series.get(TrendCategory::Clashes), &[0, 4]);
        assert_eq!(series.get(TrendCategory::HBonds), &[0, 0]);
    }

    #[test]
    fn set_latest_without_frames_is_rejected() {
        let mut series = TrendSeries::new();
        assert!(!series.set_latest(TrendCategory::HBonds, 1));
        assert!(series.is_empty());
    }
}
