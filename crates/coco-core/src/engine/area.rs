use super::config::{AggregationConfig, ReportKind};
use super::coverage::Coverage;
use super::error::EngineError;
use super::progress::{Progress, ProgressReporter};
use super::scan::{ensure_frames, read_report};
use crate::core::io::area_report::AreaReport;
use crate::core::models::area::AreaSample;
use crate::core::models::system::System;
use tracing::{info, instrument};

#[derive(Debug, Clone, PartialEq)]
pub struct AreaSummary {
    pub samples: Vec<AreaSample>,
    pub coverage: Coverage,
}

/// Collects one buried-surface-area sample per frame that has an area report.
///
/// Frames without the report are left out rather than zero-filled.
#[instrument(skip_all, fields(system = system.name()))]
pub fn aggregate(
    system: &System,
    config: &AggregationConfig,
    reporter: &ProgressReporter,
) -> Result<AreaSummary, EngineError> {
    ensure_frames(system)?;
    reporter.report(Progress::ScanStart {
        aggregation: "area",
        total_frames: system.total_frames() as u64,
    });

    let mut coverage = Coverage::default();
    let mut samples = Vec::new();
    for frame in system.frames() {
        if let Some(report) = read_report::<AreaReport>(frame, ReportKind::Area, config, &mut coverage)
        {
            samples.push(AreaSample {
                frame: frame.index,
                total_bsa: report.total_bsa,
                polar_bsa: report.polar_bsa,
                non_polar_bsa: report.non_polar_bsa,
            });
        }
        reporter.report(Progress::FrameScanned { frame: frame.index });
    }
    reporter.report(Progress::ScanFinish);

    info!(
        "Collected {} area sample(s) from {} frame(s).",
        samples.len(),
        system.total_frames()
    );
    Ok(AreaSummary { samples, coverage })
}
