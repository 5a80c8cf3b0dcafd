use crate::cli::{InteractionsArgs, SystemArgs};
use crate::config::AppConfig;
use crate::error::Result;
use crate::output::emit_json;
use crate::utils::progress::CliProgressHandler;
use cocoagg::engine::progress::ProgressReporter;
use cocoagg::workflows::listing;
use tracing::info;

pub fn run_interactions(
    args: InteractionsArgs,
    config: &AppConfig,
    progress: &CliProgressHandler,
) -> Result<()> {
    let reporter = ProgressReporter::with_callback(progress.get_callback());
    let mut result = listing::interaction_listing(
        &config.data_root,
        &args.target.system,
        &config.aggregation,
        &reporter,
    )?;

    if let Some(min) = args.min_consistency {
        let before = result.interactions.len();
        result.retain_min_consistency(min);
        info!(
            "Kept {} of {} interaction(s) with consistency >= {}.",
            result.interactions.len(),
            before,
            min
        );
    }

    emit_json(&result, args.target.output.output.as_deref())
}

pub fn run_area(args: SystemArgs, config: &AppConfig, progress: &CliProgressHandler) -> Result<()> {
    let reporter = ProgressReporter::with_callback(progress.get_callback());
    let result =
        listing::area_listing(&config.data_root, &args.system, &config.aggregation, &reporter)?;
    emit_json(&result, args.output.output.as_deref())
}

pub fn run_trends(
    args: SystemArgs,
    config: &AppConfig,
    progress: &CliProgressHandler,
) -> Result<()> {
    let reporter = ProgressReporter::with_callback(progress.get_callback());
    let result =
        listing::trend_listing(&config.data_root, &args.system, &config.aggregation, &reporter)?;
    emit_json(&result, args.output.output.as_deref())
}
