use super::config::{AggregationConfig, ReportKind};
use super::coverage::Coverage;
use super::error::EngineError;
use super::progress::{Progress, ProgressReporter};
use super::scan::{ensure_frames, read_report};
use crate::core::io::interaction_report::InteractionReport;
use crate::core::models::frame::FrameIndex;
use crate::core::models::interaction::AggregatedInteraction;
use crate::core::models::residue::ResiduePairKey;
use crate::core::models::system::System;
use std::collections::{BTreeSet, HashMap};
use tracing::{info, instrument};

#[derive(Debug, Clone, PartialEq)]
pub struct InteractionSummary {
    pub total_frames: usize,
    pub interactions: Vec<AggregatedInteraction>,
    pub coverage: Coverage,
}

#[derive(Default)]
struct PairAccumulator {
    frames: BTreeSet<FrameIndex>,
    types: BTreeSet<String>,
}

/// Reconciles the interaction reports of every frame into one entry per residue pair.
///
/// The result is sorted by descending consistency; equal scores are ordered by ascending
/// residue-pair key.
///
/// # Errors
///
/// Returns [`EngineError::NoFramesFound`] if the system has no frames. Missing or unreadable
/// reports only reduce coverage.
#[instrument(skip_all, fields(system = system.name()))]
pub fn aggregate(
    system: &System,
    config: &AggregationConfig,
    reporter: &ProgressReporter,
) -> Result<InteractionSummary, EngineError> {
    ensure_frames(system)?;
    reporter.report(Progress::ScanStart {
        aggregation: "interactions",
        total_frames: system.total_frames() as u64,
    });

    let mut coverage = Coverage::default();
    let mut pairs: HashMap<ResiduePairKey, PairAccumulator> = HashMap::new();

    for frame in system.frames() {
        if let Some(report) =
            read_report::<InteractionReport>(frame, ReportKind::Interaction, config, &mut coverage)
        {
            for record in report.records {
                let entry = pairs.entry(record.pair).or_default();
                entry.frames.insert(frame.index);
                entry.types.extend(record.types);
            }
        }
        reporter.report(Progress::FrameScanned { frame: frame.index });
    }
    reporter.report(Progress::ScanFinish);

    let total_frames = system.total_frames();
    let mut interactions: Vec<AggregatedInteraction> = pairs
        .into_iter()
        .map(|(pair, acc)| {
            let consistency = acc.frames.len() as f64 / total_frames as f64;
            AggregatedInteraction {
                pair,
                frames: acc.frames,
                types: acc.types,
                consistency,
            }
        })
        .collect();
    sort_by_consistency(&mut interactions);

    info!(
        "Aggregated {} residue pair(s) over {} frame(s) ({} with an interaction report).",
        interactions.len(),
        total_frames,
        coverage.frames_with_report
    );

    Ok(InteractionSummary {
        total_frames,
        interactions,
        coverage,
    })
}

fn sort_by_consistency(interactions: &mut [AggregatedInteraction]) {
    interactions.sort_by(|a, b| {
        b.consistency
            .total_cmp(&a.consistency)
            .then_with(|| a.pair.cmp(&b.pair))
    });
}
