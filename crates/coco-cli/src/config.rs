use crate::cli::Cli;
use crate::error::{CliError, Result};
use cocoagg::engine::config::{AggregationConfig, AggregationConfigBuilder, ValuePolicy};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_DATA_ROOT: &str = ".";

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct PartialReportsConfig {
    interaction_suffix: Option<String>,
    area_suffix: Option<String>,
    summary_suffix: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
enum PartialValuePolicy {
    Strict,
    Lenient,
}

impl From<PartialValuePolicy> for ValuePolicy {
    fn from(p: PartialValuePolicy) -> Self {
        match p {
            PartialValuePolicy::Strict => ValuePolicy::Strict,
            PartialValuePolicy::Lenient => ValuePolicy::Lenient,
        }
    }
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct PartialTrendsConfig {
    value_policy: Option<PartialValuePolicy>,
}

/// The configuration file as written by the user; every key is optional.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct PartialAppConfig {
    data_root: Option<PathBuf>,
    #[serde(default)]
    reports: PartialReportsConfig,
    #[serde(default)]
    trends: PartialTrendsConfig,
}

/// Fully resolved settings shared by every command.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub data_root: PathBuf,
    pub aggregation: AggregationConfig,
}

impl PartialAppConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Resolves the final settings. CLI flags win over the file, which wins over defaults.
    pub fn merge_with_cli(self, data_root: Option<&Path>, lenient_trends: bool) -> Result<AppConfig> {
        let data_root = data_root
            .map(Path::to_path_buf)
            .or(self.data_root)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_ROOT));

        let mut builder = AggregationConfigBuilder::new();
        if let Some(suffix) = self.reports.interaction_suffix {
            builder = builder.interaction_suffix(suffix);
        }
        if let Some(suffix) = self.reports.area_suffix {
            builder = builder.area_suffix(suffix);
        }
        if let Some(suffix) = self.reports.summary_suffix {
            builder = builder.summary_suffix(suffix);
        }

        let policy = if lenient_trends {
            Some(ValuePolicy::Lenient)
        } else {
            self.trends.value_policy.map(Into::into)
        };
        if let Some(policy) = policy {
            builder = builder.trend_values(policy);
        }

        let aggregation = builder
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;
        Ok(AppConfig {
            data_root,
            aggregation,
        })
    }
}

/// Loads the optional config file named on the command line and applies the CLI overrides.
pub fn load(cli: &Cli) -> Result<AppConfig> {
    let partial = match &cli.config {
        Some(path) => {
            debug!("Reading configuration from {:?}", path);
            PartialAppConfig::from_file(path)?
        }
        None => PartialAppConfig::default(),
    };
    let config = partial.merge_with_cli(cli.data_root.as_deref(), cli.lenient_trends)?;
    debug!("Resolved configuration: {:?}", config);
    Ok(config)
}
