use super::config::ConfigError;
use crate::core::io::layout::LayoutError;
use crate::core::models::frame::FrameIndex;
use std::path::PathBuf;
use thiserror::Error;

pub const STATUS_NOT_FOUND: u16 = 404;
pub const STATUS_INTERNAL: u16 = 500;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Data root not found: '{path}'", path = path.display())]
    DataRootNotFound { path: PathBuf },

    #[error("System not found: '{system}'")]
    SystemNotFound { system: String },

    #[error("No frames found for system '{system}'")]
    NoFramesFound { system: String },

    #[error(
        "Malformed numeric value '{value}' for property '{property}' in frame {frame} ('{path}', line {line})",
        path = path.display()
    )]
    MalformedNumeric {
        frame: FrameIndex,
        path: PathBuf,
        line: u64,
        property: String,
        value: String,
    },

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Layout(#[from] LayoutError),
}

impl EngineError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            EngineError::DataRootNotFound { .. }
                | EngineError::SystemNotFound { .. }
                | EngineError::NoFramesFound { .. }
        )
    }

    /// HTTP-equivalent status for this failure: 404 for not-found conditions, 500 otherwise.
    pub fn status_code(&self) -> u16 {
        if self.is_not_found() {
            STATUS_NOT_FOUND
        } else {
            STATUS_INTERNAL
        }
    }
}
