use super::config::{AggregationConfig, ReportKind, ValuePolicy};
use super::coverage::{Coverage, ReportIssue};
use super::error::EngineError;
use super::progress::{Progress, ProgressReporter};
use super::scan::{ensure_frames, read_report};
use crate::core::io::numeric::parse_int;
use crate::core::io::summary_report::{SummaryEntry, SummaryReport};
use crate::core::models::frame::Frame;
use crate::core::models::system::System;
use crate::core::models::trend::{TrendCategory, TrendSeries};
use tracing::{info, instrument, warn};

#[derive(Debug, Clone, Copy)]
enum Predicate {
    Contains(&'static str),
    ContainsNoneOf {
        needle: &'static str,
        excluded: &'static [&'static str],
    },
}

impl Predicate {
    fn matches(self, property: &str) -> bool {
        match self {
            Predicate::Contains(needle) => property.contains(needle),
            Predicate::ContainsNoneOf { needle, excluded } => {
                property.contains(needle) && !excluded.iter().any(|e| property.contains(e))
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct TrendRule {
    predicate: Predicate,
    category: TrendCategory,
}

const fn rule(predicate: Predicate, category: TrendCategory) -> TrendRule {
    TrendRule {
        predicate,
        category,
    }
}

// Evaluated top to bottom, first match wins. Cation/Anion properties also contain
// "π-π interactions", so the generic π-π rule must exclude them.
const TREND_RULES: [TrendRule; 12] = [
    rule(Predicate::Contains("H-bonds"), TrendCategory::HBonds),
    rule(Predicate::Contains("Salt-bridges"), TrendCategory::SaltBridges),
    rule(
        Predicate::ContainsNoneOf {
            needle: "π-π interactions",
            excluded: &["Cation", "Anion"],
        },
        TrendCategory::PiPi,
    ),
    rule(Predicate::Contains("Cation-π"), TrendCategory::CationPi),
    rule(Predicate::Contains("Anion-π"), TrendCategory::AnionPi),
    rule(Predicate::Contains("CH-O/N bonds"), TrendCategory::ChOn),
    rule(Predicate::Contains("CH-π interactions"), TrendCategory::ChPi),
    rule(Predicate::Contains("Halogen bonds"), TrendCategory::Halogen),
    rule(Predicate::Contains("Apolar vdW"), TrendCategory::ApolarVdw),
    rule(Predicate::Contains("Polar vdW"), TrendCategory::PolarVdw),
    rule(Predicate::Contains("Proximal contacts"), TrendCategory::ProximalContacts),
    rule(Predicate::Contains("Clashes"), TrendCategory::Clashes),
];

/// Maps a summary-table property name to its trend category (case-sensitive).
pub fn classify(property: &str) -> Option<TrendCategory> {
    TREND_RULES
        .iter()
        .find(|r| r.predicate.matches(property))
        .map(|r| r.category)
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrendSummary {
    pub series: TrendSeries,
    pub coverage: Coverage,
}

/// Tallies the twelve interaction categories for every located frame.
///
/// Every frame gets a slot in every category, defaulting to 0 when its summary table is
/// missing or lacks the property.
///
/// # Errors
///
/// Returns [`EngineError::NoFramesFound`] for a system without frames, and
/// [`EngineError::MalformedNumeric`] when a matched property has a non-integer value and the
/// configured policy is [`ValuePolicy::Strict`].
#[instrument(skip_all, fields(system = system.name()))]
pub fn aggregate(
    system: &System,
    config: &AggregationConfig,
    reporter: &ProgressReporter,
) -> Result<TrendSummary, EngineError> {
    ensure_frames(system)?;
    reporter.report(Progress::ScanStart {
        aggregation: "trends",
        total_frames: system.total_frames() as u64,
    });

    let mut coverage = Coverage::default();
    let mut series = TrendSeries::new();
    for frame in system.frames() {
        series.push_frame(frame.index);
        if let Some(report) =
            read_report::<SummaryReport>(frame, ReportKind::Summary, config, &mut coverage)
        {
            for entry in &report.entries {
                apply_entry(&mut series, entry, frame, config, &mut coverage)?;
            }
        }
        reporter.report(Progress::FrameScanned { frame: frame.index });
    }
    reporter.report(Progress::ScanFinish);

    info!(
        "Built trend series over {} frame(s) ({} with a summary table).",
        series.len(),
        coverage.frames_with_report
    );
    Ok(TrendSummary { series, coverage })
}

fn apply_entry(
    series: &mut TrendSeries,
    entry: &SummaryEntry,
    frame: &Frame,
    config: &AggregationConfig,
    coverage: &mut Coverage,
) -> Result<(), EngineError> {
    let Some(category) = classify(&entry.property) else {
        return Ok(());
    };
    let Some(raw) = entry.value.as_deref() else {
        return Ok(());
    };

    match parse_int(raw) {
        Some(value) => {
            series.set_latest(category, value);
        }
        None => match config.trend_values {
            ValuePolicy::Strict => {
                return Err(EngineError::MalformedNumeric {
                    frame: frame.index,
                    path: config.naming.path_for(frame, ReportKind::Summary),
                    line: entry.line,
                    property: entry.property.clone(),
                    value: raw.to_string(),
                });
            }
            ValuePolicy::Lenient => {
                warn!(
                    "Frame {}: non-integer value '{}' for '{}', keeping 0.",
                    frame.index, raw, entry.property
                );
                coverage.record(ReportIssue::MalformedNumeric {
                    frame: frame.index,
                    line: entry.line,
                    property: entry.property.clone(),
                    value: raw.to_string(),
                });
            }
        },
    }
    Ok(())
}
