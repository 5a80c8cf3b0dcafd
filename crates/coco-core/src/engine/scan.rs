use super::config::{AggregationConfig, ReportKind};
use super::coverage::{Coverage, ReportIssue};
use super::error::EngineError;
use crate::core::io::traits::ReportFile;
use crate::core::models::frame::Frame;
use crate::core::models::system::System;
use tracing::{debug, warn};

pub(crate) fn ensure_frames(system: &System) -> Result<(), EngineError> {
    if system.total_frames() == 0 {
        return Err(EngineError::NoFramesFound {
            system: system.name().to_string(),
        });
    }
    Ok(())
}

/// Reads one frame's report of the given kind, folding every non-fatal outcome (missing
/// file, unreadable file, skipped rows) into `coverage`.
pub(crate) fn read_report<R: ReportFile>(
    frame: &Frame,
    kind: ReportKind,
    config: &AggregationConfig,
    coverage: &mut Coverage,
) -> Option<R> {
    let path = config.naming.path_for(frame, kind);
    match R::read_from_path(&path) {
        Ok(Some(report)) => {
            coverage.frames_with_report += 1;
            coverage.record_skipped_rows(frame.index, kind, report.skipped_rows());
            Some(report)
        }
        Ok(None) => {
            debug!("Frame {} has no {} at {:?}", frame.index, kind, path);
            coverage.record(ReportIssue::MissingReport {
                frame: frame.index,
                kind,
                path,
            });
            None
        }
        Err(e) => {
            warn!("Ignoring unreadable {} of frame {}: {}", kind, frame.index, e);
            coverage.record(ReportIssue::UnreadableReport {
                frame: frame.index,
                kind,
                path,
                reason: e.to_string(),
            });
            None
        }
    }
}
