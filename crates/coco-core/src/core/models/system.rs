use super::frame::{Frame, FrameIndex};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// A trajectory split into frames. Frames are always held in ascending index order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct System {
    name: String,
    root: PathBuf,
    frames: Vec<Frame>,
}

impl System {
    pub fn new(name: &str, root: impl Into<PathBuf>, mut frames: Vec<Frame>) -> Self {
        frames.sort_by_key(|f| f.index);
        frames.dedup_by_key(|f| f.index);
        Self {
            name: name.to_string(),
            root: root.into(),
            frames,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Number of located frames; the denominator of every consistency score.
    pub fn total_frames(&self) -> usize {
        self.frames.len()
    }

    pub fn frame_indices(&self) -> impl Iterator<Item = FrameIndex> + '_ {
        self.frames.iter().map(|f| f.index)
    }
}

/// Catalog view of a system as exposed to presentation layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SystemEntry {
    pub id: String,
    pub name: String,
    pub path: String,
    pub frames: usize,
}

impl SystemEntry {
    pub fn new(id: &str, frames: usize) -> Self {
        Self {
            id: id.to_string(),
            name: id.to_string(),
            path: id.to_string(),
            frames,
        }
    }
}

impl From<&System> for SystemEntry {
    fn from(system: &System) -> Self {
        Self::new(system.name(), system.total_frames())
    }
}
