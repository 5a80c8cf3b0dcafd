use crate::core::models::frame::Frame;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_INTERACTION_SUFFIX: &str = ".pd_h.pdb_A_B_final_file.csv";
pub const DEFAULT_AREA_SUFFIX: &str = ".pd_h.pdb_A_B_complex.pdb_Rsa_stats.csv";
pub const DEFAULT_SUMMARY_SUFFIX: &str = ".pd_h.pdb_A_B_summary_table.csv";

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Report suffix for {kind} must not be empty")]
    EmptySuffix { kind: ReportKind },
    #[error("Report suffix for {kind} must not contain a path separator: '{suffix}'")]
    SuffixWithSeparator { kind: ReportKind, suffix: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    Interaction,
    Area,
    Summary,
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReportKind::Interaction => "interaction report",
            ReportKind::Area => "area report",
            ReportKind::Summary => "summary table",
        };
        f.write_str(name)
    }
}

/// File-name suffixes of the three per-frame reports. A frame `frame_<n>` stores its
/// reports as `frame_<n><suffix>` inside its own directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportNaming {
    pub interaction_suffix: String,
    pub area_suffix: String,
    pub summary_suffix: String,
}

impl Default for ReportNaming {
    fn default() -> Self {
        Self {
            interaction_suffix: DEFAULT_INTERACTION_SUFFIX.to_string(),
            area_suffix: DEFAULT_AREA_SUFFIX.to_string(),
            summary_suffix: DEFAULT_SUMMARY_SUFFIX.to_string(),
        }
    }
}

impl ReportNaming {
    pub fn suffix(&self, kind: ReportKind) -> &str {
        match kind {
            ReportKind::Interaction => &self.interaction_suffix,
            ReportKind::Area => &self.area_suffix,
            ReportKind::Summary => &self.summary_suffix,
        }
    }

    pub fn path_for(&self, frame: &Frame, kind: ReportKind) -> PathBuf {
        frame.report_path(self.suffix(kind))
    }
}

/// How a summary-table count that is not an integer is handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValuePolicy {
    /// Abort the aggregation with [`EngineError::MalformedNumeric`].
    ///
    /// [`EngineError::MalformedNumeric`]: super::error::EngineError::MalformedNumeric
    #[default]
    Strict,
    /// Keep the frame's default of 0 and record the cell in the coverage report.
    Lenient,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregationConfig {
    pub naming: ReportNaming,
    pub trend_values: ValuePolicy,
}

#[derive(Default)]
pub struct AggregationConfigBuilder {
    interaction_suffix: Option<String>,
    area_suffix: Option<String>,
    summary_suffix: Option<String>,
    trend_values: Option<ValuePolicy>,
}

impl AggregationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn interaction_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.interaction_suffix = Some(suffix.into());
        self
    }
    pub fn area_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.area_suffix = Some(suffix.into());
        self
    }
    pub fn summary_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.summary_suffix = Some(suffix.into());
        self
    }
    pub fn trend_values(mut self, policy: ValuePolicy) -> Self {
        self.trend_values = Some(policy);
        self
    }

    /// Fills unset fields with defaults and validates the suffixes.
    pub fn build(self) -> Result<AggregationConfig, ConfigError> {
        let defaults = ReportNaming::default();
        let naming = ReportNaming {
            interaction_suffix: validate_suffix(
                ReportKind::Interaction,
                self.interaction_suffix
                    .unwrap_or(defaults.interaction_suffix),
            )?,
            area_suffix: validate_suffix(
                ReportKind::Area,
                self.area_suffix.unwrap_or(defaults.area_suffix),
            )?,
            summary_suffix: validate_suffix(
                ReportKind::Summary,
                self.summary_suffix.unwrap_or(defaults.summary_suffix),
            )?,
        };
        Ok(AggregationConfig {
            naming,
            trend_values: self.trend_values.unwrap_or_default(),
        })
    }
}

fn validate_suffix(kind: ReportKind, suffix: String) -> Result<String, ConfigError> {
    if suffix.is_empty() {
        return Err(ConfigError::EmptySuffix { kind });
    }
    if suffix.contains('/') || suffix.contains('\\') {
        return Err(ConfigError::SuffixWithSeparator { kind, suffix });
    }
    Ok(suffix)
}
