//! Shell command implementation

use console::Style;

use stagehand::assets::AssetStore;
use stagehand::error::Result;
use stagehand::provision::{ProvisionOutcome, provision_shell_wrapper};

use crate::cli::ShellArgs;

/// Run shell command
pub fn run(store: &AssetStore, args: &ShellArgs) -> Result<()> {
    let outcome = provision_shell_wrapper(store, &args.path, args.overwrite)?;

    match outcome {
        ProvisionOutcome::Written => println!(
            "{} {}",
            Style::new().green().bold().apply_to("Wrote"),
            args.path.display()
        ),
        ProvisionOutcome::Replaced => println!(
            "{} {}",
            Style::new().green().bold().apply_to("Replaced"),
            args.path.display()
        ),
        ProvisionOutcome::Skipped => println!(
            "{} {} already exists (use --overwrite to replace it)",
            Style::new().yellow().bold().apply_to("Kept"),
            args.path.display()
        ),
    }

    Ok(())
}
