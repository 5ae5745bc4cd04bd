//! Bundles command implementation
//!
//! Lists the example bundles present in the asset store and, in detailed
//! mode, the templates each one ships.

use console::Style;

use stagehand::assets::AssetStore;
use stagehand::error::Result;
use stagehand::template::list_templates;

use crate::cli::BundlesArgs;

/// Run bundles command
pub fn run(store: &AssetStore, args: &BundlesArgs) -> Result<()> {
    let bundles = store.available_bundles();

    if bundles.is_empty() {
        println!("No example bundles found in {store}");
        return Ok(());
    }

    if !args.detailed {
        for bundle in &bundles {
            println!("{}", bundle.name());
        }
        return Ok(());
    }

    println!("Example bundles ({}):", bundles.len());
    println!();
    for bundle in &bundles {
        println!("  {}", Style::new().bold().yellow().apply_to(bundle.name()));
        let templates = list_templates(store, bundle.name())?;
        display_templates(&templates);
    }

    Ok(())
}

fn display_templates(templates: &[String]) {
    match templates.split_first() {
        None => println!("    {}", Style::new().dim().apply_to("no templates")),
        Some((default, rest)) => {
            println!(
                "    {} {}",
                Style::new().bold().apply_to("Template:"),
                Style::new().green().apply_to(default)
            );
            for other in rest {
                println!(
                    "    {} {}",
                    Style::new().bold().apply_to("Ignored:"),
                    Style::new().dim().apply_to(other)
                );
            }
        }
    }
}
