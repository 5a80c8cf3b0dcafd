use crate::cli::SummarizeArgs;
use crate::config::AppConfig;
use crate::error::{CliError, Result};
use crate::output::{emit_json, write_json_file};
use crate::utils::progress::bar_style;
use cocoagg::engine::progress::ProgressReporter;
use cocoagg::workflows::{catalog, listing};
use indicatif::{ProgressBar, ProgressDrawTarget};
use rayon::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

#[derive(Debug, Serialize)]
struct SystemFailure {
    system: String,
    error: String,
}

/// Outcome of a `summarize` run, printed to stdout.
#[derive(Debug, Default, Serialize)]
struct SummarizeReport {
    written: Vec<PathBuf>,
    failed: Vec<SystemFailure>,
}

pub fn run(args: SummarizeArgs, config: &AppConfig, quiet: bool) -> Result<()> {
    let systems = catalog::list_systems(&config.data_root)?;
    if systems.is_empty() {
        warn!("No systems found under {:?}; nothing to summarize.", config.data_root);
        return emit_json(&SummarizeReport::default(), None);
    }
    std::fs::create_dir_all(&args.output_dir)?;

    let target = if quiet {
        ProgressDrawTarget::hidden()
    } else {
        ProgressDrawTarget::stderr()
    };
    let pb = ProgressBar::with_draw_target(Some(systems.len() as u64), target)
        .with_style(bar_style())
        .with_message("summarize");

    info!(
        "Summarizing {} system(s) into {:?}",
        systems.len(),
        args.output_dir
    );
    let outcomes: Vec<(String, Result<Vec<PathBuf>>)> = systems
        .par_iter()
        .map(|entry| {
            let outcome = summarize_system(&entry.id, config, &args.output_dir);
            pb.inc(1);
            (entry.id.clone(), outcome)
        })
        .collect();
    pb.finish_and_clear();

    let total = outcomes.len();
    let mut report = SummarizeReport::default();
    for (system, outcome) in outcomes {
        match outcome {
            Ok(paths) => report.written.extend(paths),
            Err(e) => {
                error!("System '{}' failed: {}", system, e);
                report.failed.push(SystemFailure {
                    system,
                    error: e.to_string(),
                });
            }
        }
    }
    info!(
        "Summarized {} of {} system(s).",
        total - report.failed.len(),
        total
    );

    emit_json(&report, None)?;
    if report.failed.len() == total {
        return Err(CliError::Other(anyhow::anyhow!(
            "All {} system(s) failed to summarize",
            total
        )));
    }
    Ok(())
}

fn summarize_system(system_id: &str, config: &AppConfig, output_dir: &Path) -> Result<Vec<PathBuf>> {
    let reporter = ProgressReporter::new();
    let data_root = &config.data_root;

    // Aggregate everything before writing so a failing system leaves no partial output.
    let interactions =
        listing::interaction_listing(data_root, system_id, &config.aggregation, &reporter)?;
    let area = listing::area_listing(data_root, system_id, &config.aggregation, &reporter)?;
    let trends = listing::trend_listing(data_root, system_id, &config.aggregation, &reporter)?;

    let paths = [
        output_dir.join(format!("{system_id}.interactions.json")),
        output_dir.join(format!("{system_id}.area.json")),
        output_dir.join(format!("{system_id}.trends.json")),
    ];
    write_json_file(&interactions, &paths[0])?;
    write_json_file(&area, &paths[1])?;
    write_json_file(&trends, &paths[2])?;
    Ok(paths.to_vec())
}
