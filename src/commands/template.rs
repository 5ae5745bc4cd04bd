//! Template command implementation

use console::Style;

use stagehand::assets::AssetStore;
use stagehand::error::Result;
use stagehand::provision::{ProvisionOutcome, write_default_template};

use crate::cli::TemplateArgs;

use super::destination_dir;

/// Run template command
pub fn run(store: &AssetStore, args: TemplateArgs) -> Result<()> {
    let dir = destination_dir(args.to)?;
    let (candidate, outcome) = write_default_template(store, &args.bundle, &dir, args.overwrite)?;

    println!(
        "{} {}",
        Style::new().green().bold().apply_to(verb(outcome)),
        dir.join(candidate.file_name()).display()
    );

    Ok(())
}

fn verb(outcome: ProvisionOutcome) -> &'static str {
    if outcome == ProvisionOutcome::Replaced {
        "Replaced"
    } else {
        "Wrote"
    }
}
