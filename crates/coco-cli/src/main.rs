mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;
mod utils;

use crate::cli::{Cli, Commands};
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        error!("Command failed: {}", e);
        match serde_json::to_string(&e.payload()) {
            Ok(payload) => eprintln!("{}", payload),
            Err(_) => eprintln!("Error: {}", e),
        }
        std::process::exit(e.exit_code());
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();
    eyre_hook.install().map_err(|e| CliError::Other(e.into()))?;
    std::panic::set_hook(Box::new(move |pi| {
        error!("{}", panic_hook.panic_report(pi));
    }));

    info!("CoCoAgg CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    if let Some(num_threads) = cli.threads {
        info!(
            "Setting Rayon global thread pool to {} threads.",
            num_threads
        );
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .map_err(|e| {
                CliError::Other(anyhow::anyhow!("Failed to build global thread pool: {}", e))
            })?;
    }

    let app_config = config::load(&cli)?;
    let progress = if cli.quiet {
        CliProgressHandler::hidden()
    } else {
        CliProgressHandler::new()
    };

    let result = match cli.command {
        Commands::Systems(args) => {
            info!("Dispatching to 'systems' command.");
            commands::catalog::run_systems(args, &app_config)
        }
        Commands::Show(args) => {
            info!("Dispatching to 'show' command.");
            commands::catalog::run_show(args, &app_config)
        }
        Commands::Interactions(args) => {
            info!("Dispatching to 'interactions' command.");
            commands::listing::run_interactions(args, &app_config, &progress)
        }
        Commands::Area(args) => {
            info!("Dispatching to 'area' command.");
            commands::listing::run_area(args, &app_config, &progress)
        }
        Commands::Trends(args) => {
            info!("Dispatching to 'trends' command.");
            commands::listing::run_trends(args, &app_config, &progress)
        }
        Commands::Summarize(args) => {
            info!("Dispatching to 'summarize' command.");
            commands::summarize::run(args, &app_config, cli.quiet)
        }
    };

    if result.is_ok() {
        info!("Command completed successfully.");
    }
    result
}
