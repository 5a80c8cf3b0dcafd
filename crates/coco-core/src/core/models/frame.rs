use std::path::{Path, PathBuf};

pub type FrameIndex = u32;

pub const FRAME_DIR_PREFIX: &str = "frame_";

/// One numbered snapshot of a system, backed by a `frame_<n>` directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub index: FrameIndex, // 1-based index parsed from the directory name
    dir: PathBuf,          // Absolute or data-root-relative directory of the frame
}

impl Frame {
    pub fn new(index: FrameIndex, dir: impl Into<PathBuf>) -> Self {
        Self {
            index,
            dir: dir.into(),
        }
    }

    pub fn name(&self) -> String {
        format!("{}{}", FRAME_DIR_PREFIX, self.index)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the report file `frame_<n><suffix>` inside this frame's directory.
    pub fn report_path(&self, suffix: &str) -> PathBuf {
        self.dir.join(format!("{}{}", self.name(), suffix))
    }
}
