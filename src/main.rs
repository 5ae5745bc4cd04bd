//! Stagehand command line
//!
//! Lists parallel backends, resolves the one to use on this host and stages
//! scheduler templates, shell wrappers and example bundles on disk.

use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::Context;
use stagehand::error::Result;

fn run(cli: Cli) -> Result<()> {
    // These work even with a broken configuration
    match cli.command {
        Commands::Version => return commands::version::run(),
        Commands::Completions(ref args) => return commands::completions::run(args),
        Commands::Backends(ref args) => return commands::backends::run(args),
        _ => {}
    }

    let ctx = Context::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Select(args) => commands::select::run(&ctx.config, args),
        Commands::Bundles(args) => commands::bundles::run(&ctx.store, &args),
        Commands::Template(args) => commands::template::run(&ctx.store, args),
        Commands::Shell(args) => commands::shell::run(&ctx.store, &args),
        Commands::Example(args) => commands::example::run(&ctx.store, args),
        Commands::Version | Commands::Completions(_) | Commands::Backends(_) => Ok(()),
    }
}

fn main() {
    let cli = Cli::parse();
    stagehand::logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
