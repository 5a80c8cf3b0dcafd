use cocoagg::engine::error::{EngineError, STATUS_INTERNAL};
use cocoagg::workflows::listing::ErrorPayload;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_NOT_FOUND: i32 = 2;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CliError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, CliError::Engine(e) if e.is_not_found())
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_not_found() {
            EXIT_NOT_FOUND
        } else {
            EXIT_FAILURE
        }
    }

    /// The structured `{"error": ...}` body reported for this failure.
    pub fn payload(&self) -> ErrorPayload {
        match self {
            CliError::Engine(e) => ErrorPayload::from(e),
            other => ErrorPayload {
                error: other.to_string(),
                status: STATUS_INTERNAL,
            },
        }
    }
}
