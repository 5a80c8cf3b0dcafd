use crate::cli::{OutputArgs, SystemArgs};
use crate::config::AppConfig;
use crate::error::Result;
use crate::output::emit_json;
use cocoagg::workflows::catalog;
use tracing::info;

pub fn run_systems(args: OutputArgs, config: &AppConfig) -> Result<()> {
    info!("Listing systems under {:?}", config.data_root);
    let systems = catalog::list_systems(&config.data_root)?;
    emit_json(&systems, args.output.as_deref())
}

pub fn run_show(args: SystemArgs, config: &AppConfig) -> Result<()> {
    let entry = catalog::describe_system(&config.data_root, &args.system)?;
    info!("System '{}' has {} frame(s).", entry.id, entry.frames);
    emit_json(&entry, args.output.output.as_deref())
}
