//! Example command implementation

use console::Style;

use stagehand::assets::AssetStore;
use stagehand::error::Result;
use stagehand::provision::{ProvisionOutcome, provision_bundle};

use crate::cli::ExampleArgs;

use super::destination_dir;

/// Run example command
pub fn run(store: &AssetStore, args: ExampleArgs) -> Result<()> {
    let dir = destination_dir(args.to)?;
    let outcome = provision_bundle(store, &args.bundle, &dir, args.overwrite)?;

    let verb = if outcome == ProvisionOutcome::Replaced {
        "Replaced"
    } else {
        "Copied"
    };
    println!(
        "{} example '{}' to {}",
        Style::new().green().bold().apply_to(verb),
        args.bundle,
        dir.join(&args.bundle).display()
    );

    Ok(())
}
