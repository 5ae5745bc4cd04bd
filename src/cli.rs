//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Stagehand - backend selection and scheduler-artifact provisioning
///
/// Pick a parallel backend for a workflow run and stage the files it needs.
#[derive(Parser, Debug)]
#[command(
    name = "stagehand",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Backend selection and scheduler-artifact provisioning for workflow engines",
    long_about = "Stagehand lists the parallel backends a workflow engine can run under, picks a \
                  sensible default for this host, and writes the scheduler templates, shell \
                  wrappers and example bundles distributed backends need.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  stagehand backends --distributed\n    \
                  stagehand select\n    \
                  stagehand template sge --to ./hpc\n    \
                  stagehand shell\n    \
                  stagehand example mtcars"
)]
pub struct Cli {
    /// Configuration file (defaults to STAGEHAND_CONFIG, then the user config directory)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List recognized parallel backends
    Backends(BackendsArgs),

    /// Resolve the backend to run under on this host
    Select(SelectArgs),

    /// List example bundles
    Bundles(BundlesArgs),

    /// Write the default scheduler template of an example bundle
    Template(TemplateArgs),

    /// Write the executable shell wrapper
    Shell(ShellArgs),

    /// Copy a whole example bundle
    Example(ExampleArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the backends command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List all backends:\n    stagehand backends\n\n\
                  List distributed backends only:\n    stagehand backends --distributed\n\n\
                  Machine-readable output:\n    stagehand backends --json")]
pub struct BackendsArgs {
    /// Only list backends that can span several hosts
    #[arg(long, short = 'd')]
    pub distributed: bool,

    /// Show locality and a description for each backend
    #[arg(long, conflicts_with = "json")]
    pub detailed: bool,

    /// Print the catalog as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the select command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Default backend for this host:\n    stagehand select\n\n\
                  Validate a requested backend:\n    stagehand select future_lapply\n\n\
                  Account for the worker count:\n    stagehand select mclapply --jobs 4")]
pub struct SelectArgs {
    /// Requested backend (defaults to the configured one, then the host default)
    pub backend: Option<String>,

    /// Number of workers the run will use
    #[arg(long, short = 'j')]
    pub jobs: Option<usize>,
}

/// Arguments for the bundles command
#[derive(Parser, Debug)]
pub struct BundlesArgs {
    /// Show the templates each bundle ships
    #[arg(long)]
    pub detailed: bool,
}

/// Arguments for the template command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Write the SGE template here:\n    stagehand template sge\n\n\
                  Write into another directory:\n    stagehand template slurm --to ./cluster\n\n\
                  Replace an existing template:\n    stagehand template torque --overwrite")]
pub struct TemplateArgs {
    /// Example bundle to take the template from
    pub bundle: String,

    /// Destination directory (defaults to current directory)
    #[arg(long)]
    pub to: Option<PathBuf>,

    /// Replace an existing file of the same name
    #[arg(long)]
    pub overwrite: bool,
}

/// Arguments for the shell command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Write ./shell.sh:\n    stagehand shell\n\n\
                  Write elsewhere, replacing any existing file:\n    stagehand shell bin/qsub.sh --overwrite")]
pub struct ShellArgs {
    /// Destination path
    #[arg(default_value = "shell.sh")]
    pub path: PathBuf,

    /// Replace an existing file (with a warning)
    #[arg(long)]
    pub overwrite: bool,
}

/// Arguments for the example command
#[derive(Parser, Debug)]
pub struct ExampleArgs {
    /// Example bundle to copy
    pub bundle: String,

    /// Destination directory (defaults to current directory)
    #[arg(long)]
    pub to: Option<PathBuf>,

    /// Replace an existing copy
    #[arg(long)]
    pub overwrite: bool,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    stagehand completions --shell bash > ~/.bash_completion.d/stagehand\n\n\
                  Generate zsh completions:\n    stagehand completions --shell zsh > ~/.zfunc/_stagehand")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long, value_enum, ignore_case = true)]
    pub shell: clap_complete::Shell,
}
