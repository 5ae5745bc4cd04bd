//! Version command implementation

use stagehand::assets::KNOWN_BUNDLES;
use stagehand::backend::{CurrentHost, default_backend};
use stagehand::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    println!("stagehand {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", rustc_version());
    println!("  Profile: {}", build_profile());
    println!("  Host default backend: {}", default_backend(&CurrentHost));
    println!("  Example bundles: {}", KNOWN_BUNDLES.len());

    Ok(())
}

fn rustc_version() -> &'static str {
    env!("CARGO_PKG_RUST_VERSION")
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
