use super::catalog::open_system;
use crate::core::models::area::AreaSample;
use crate::core::models::frame::FrameIndex;
use crate::core::models::interaction::AggregatedInteraction;
use crate::core::models::trend::TrendSeries;
use crate::engine::config::AggregationConfig;
use crate::engine::coverage::Coverage;
use crate::engine::error::EngineError;
use crate::engine::progress::ProgressReporter;
use crate::engine::{area, interactions, trends};
use serde::Serialize;
use std::path::Path;
use tracing::{info, instrument};

/// Flattened, presentation-ready view of an [`AggregatedInteraction`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionEntry {
    pub res_name1: String,
    pub res_num1: i64,
    pub chain1: String,
    pub res_name2: String,
    pub res_num2: i64,
    pub chain2: String,
    pub frame_count: usize,
    pub consistency: f64,
    pub id1: String,
    pub id2: String,
    pub frames: Vec<FrameIndex>,
    pub types_array: Vec<String>,
}

impl From<&AggregatedInteraction> for InteractionEntry {
    fn from(i: &AggregatedInteraction) -> Self {
        Self {
            res_name1: i.pair.first.name.clone(),
            res_num1: i.pair.first.number,
            chain1: i.pair.first.chain.clone(),
            res_name2: i.pair.second.name.clone(),
            res_num2: i.pair.second.number,
            chain2: i.pair.second.chain.clone(),
            frame_count: i.frame_count(),
            consistency: i.consistency,
            id1: i.id1(),
            id2: i.id2(),
            frames: i.frames.iter().copied().collect(),
            types_array: i.types.iter().cloned().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionListing {
    pub system: String,
    pub total_frames: usize,
    pub interactions: Vec<InteractionEntry>,
    #[serde(skip)]
    pub coverage: Coverage,
}

impl InteractionListing {
    /// Drops entries below `min`; the listing stays sorted.
    pub fn retain_min_consistency(&mut self, min: f64) {
        self.interactions.retain(|i| i.consistency >= min);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaListing {
    pub system: String,
    pub frames: Vec<AreaSample>,
    #[serde(skip)]
    pub coverage: Coverage,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendListing {
    pub system: String,
    pub trends: TrendSeries,
    #[serde(skip)]
    pub coverage: Coverage,
}

/// Structured failure body; `status` is the HTTP-equivalent code and is not serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorPayload {
    pub error: String,
    #[serde(skip)]
    pub status: u16,
}

impl From<&EngineError> for ErrorPayload {
    fn from(e: &EngineError) -> Self {
        Self {
            error: e.to_string(),
            status: e.status_code(),
        }
    }
}

#[instrument(skip(data_root, config, reporter))]
pub fn interaction_listing(
    data_root: &Path,
    system_id: &str,
    config: &AggregationConfig,
    reporter: &ProgressReporter,
) -> Result<InteractionListing, EngineError> {
    let system = open_system(data_root, system_id)?;
    let summary = interactions::aggregate(&system, config, reporter)?;
    log_coverage("interactions", &summary.coverage, reporter);
    Ok(InteractionListing {
        system: system_id.to_string(),
        total_frames: summary.total_frames,
        interactions: summary.interactions.iter().map(Into::into).collect(),
        coverage: summary.coverage,
    })
}

#[instrument(skip(data_root, config, reporter))]
pub fn area_listing(
    data_root: &Path,
    system_id: &str,
    config: &AggregationConfig,
    reporter: &ProgressReporter,
) -> Result<AreaListing, EngineError> {
    let system = open_system(data_root, system_id)?;
    let summary = area::aggregate(&system, config, reporter)?;
    log_coverage("area", &summary.coverage, reporter);
    Ok(AreaListing {
        system: system_id.to_string(),
        frames: summary.samples,
        coverage: summary.coverage,
    })
}

#[instrument(skip(data_root, config, reporter))]
pub fn trend_listing(
    data_root: &Path,
    system_id: &str,
    config: &AggregationConfig,
    reporter: &ProgressReporter,
) -> Result<TrendListing, EngineError> {
    let system = open_system(data_root, system_id)?;
    let summary = trends::aggregate(&system, config, reporter)?;
    log_coverage("trends", &summary.coverage, reporter);
    Ok(TrendListing {
        system: system_id.to_string(),
        trends: summary.series,
        coverage: summary.coverage,
    })
}

fn log_coverage(aggregation: &str, coverage: &Coverage, reporter: &ProgressReporter) {
    if coverage.is_complete() {
        return;
    }
    let text = format!(
        "{}: {} report(s) missing, {} unreadable, {} row(s) skipped, {} malformed value(s).",
        aggregation,
        coverage.missing_reports(),
        coverage.unreadable_reports(),
        coverage.skipped_rows(),
        coverage.malformed_values()
    );
    info!("{}", text);
    reporter.message(text);
}
