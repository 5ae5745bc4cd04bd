//! Select command implementation

use stagehand::backend::{CurrentHost, HostInfo, select_backend};
use stagehand::config::Config;
use stagehand::error::Result;

use crate::cli::SelectArgs;

/// Run select command
pub fn run(config: &Config, args: SelectArgs) -> Result<()> {
    println!("{}", resolve(config, args, &CurrentHost)?);
    Ok(())
}

/// Command-line values win over configured ones
fn resolve(config: &Config, args: SelectArgs, host: &dyn HostInfo) -> Result<&'static str> {
    let requested = args.backend.or_else(|| config.backend.clone());
    let jobs = args.jobs.or(config.jobs).unwrap_or(1);
    Ok(select_backend(requested.as_deref(), jobs, host)?.name)
}
