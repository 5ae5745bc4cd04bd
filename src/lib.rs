//! Stagehand - backend selection and scheduler-artifact provisioning
//!
//! A workflow engine asks this crate two kinds of questions:
//! - which parallel backend to run under ([`backend`]), and
//! - which files a distributed backend needs on disk, and where to put them
//!   ([`template`], [`provision`]).
//!
//! Nothing here executes targets or inspects a dependency graph.
//!
//! ```no_run
//! use std::path::Path;
//!
//! use stagehand::assets::AssetStore;
//! use stagehand::backend::{CurrentHost, default_backend, list_backends};
//! use stagehand::provision::{provision_shell_wrapper, write_default_template};
//!
//! # fn main() -> stagehand::error::Result<()> {
//! println!("{:?}", list_backends(true));
//! println!("{}", default_backend(&CurrentHost));
//!
//! let store = AssetStore::packaged();
//! write_default_template(&store, "slurm", Path::new("."), false)?;
//! provision_shell_wrapper(&store, Path::new("shell.sh"), false)?;
//! # Ok(())
//! # }
//! ```

pub mod assets;
pub mod backend;
pub mod config;
pub mod error;
pub mod logging;
pub mod provision;
pub mod template;

#[cfg(test)]
mod test_fixtures;
