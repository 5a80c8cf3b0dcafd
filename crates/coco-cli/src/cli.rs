use crate::utils::parser::parse_consistency;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "CoCoAgg - aggregates per-frame contact-map reports of a simulated complex into interaction, buried-area and trend summaries.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads used by `summarize`.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding one subdirectory per system. Overrides `data-root` from the config file.
    #[arg(short = 'd', long, global = true, value_name = "PATH")]
    pub data_root: Option<PathBuf>,

    /// Treat non-integer summary counts as 0 instead of failing.
    #[arg(long, global = true)]
    pub lenient_trends: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every system under the data root that has at least one frame.
    Systems(OutputArgs),
    /// Show the catalog entry of a single system.
    Show(SystemArgs),
    /// Aggregate residue-pair interactions across all frames of a system.
    Interactions(InteractionsArgs),
    /// Extract total, polar and non-polar buried surface area per frame.
    Area(SystemArgs),
    /// Build per-frame count series for every interaction category.
    Trends(SystemArgs),
    /// Run all aggregations for every system and write one JSON file per listing.
    Summarize(SummarizeArgs),
}

#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Write the JSON result to a file instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct SystemArgs {
    /// Identifier of the system (its directory name under the data root).
    #[arg(required = true, value_name = "SYSTEM")]
    pub system: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug, Clone)]
pub struct InteractionsArgs {
    #[command(flatten)]
    pub target: SystemArgs,

    /// Only keep interactions whose consistency is at least this value (0.0 to 1.0).
    #[arg(long, value_name = "FLOAT", value_parser = parse_consistency)]
    pub min_consistency: Option<f64>,
}

#[derive(Args, Debug, Clone)]
pub struct SummarizeArgs {
    /// Directory receiving `<system>.interactions.json`, `<system>.area.json` and `<system>.trends.json`.
    #[arg(long, required = true, value_name = "DIR")]
    pub output_dir: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_are_accepted_after_the_subcommand() {
        let cli = Cli::try_parse_from([
            "cocoagg",
            "interactions",
            "1ULL",
            "--min-consistency",
            "0.5",
            "-d",
            "/data",
            "-vv",
            "--lenient-trends",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.lenient_trends);
        assert_eq!(cli.data_root, Some(PathBuf::from("/data")));
        match cli.command {
            Commands::Interactions(args) => {
                assert_eq!(args.target.system, "1ULL");
                assert_eq!(args.min_consistency, Some(0.5));
                assert!(args.target.output.output.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn out_of_range_consistency_is_rejected() {
        let result =
            Cli::try_parse_from(["cocoagg", "interactions", "1ULL", "--min-consistency", "1.5"]);
        assert!(result.is_err());
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["cocoagg", "-q", "-v", "systems"]).is_err());
    }

    #[test]
    fn summarize_requires_an_output_directory() {
        assert!(Cli::try_parse_from(["cocoagg", "summarize"]).is_err());
        let cli = Cli::try_parse_from(["cocoagg", "-j", "4", "summarize", "--output-dir", "out"])
            .unwrap();
        assert_eq!(cli.threads, Some(4));
        assert!(matches!(cli.command, Commands::Summarize(_)));
    }
}
