//! Parallel backend catalog and selection
//!
//! This module handles:
//! - Backend definitions (BackendDescriptor, Locality)
//! - The compiled-in catalog and name lookup (via registry module)
//! - Host-aware default selection (via selector module)
//!
//! Nothing here dispatches work. The catalog is advisory metadata the
//! orchestrator reads to decide how to run its targets.

use serde::Serialize;

pub mod registry;
pub mod selector;

pub use registry::{BACKENDS, descriptors, list_backends, lookup};
pub use selector::{CurrentHost, HostInfo, default_backend, select_backend};

/// Whether a backend stays on one host or can span many
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locality {
    Local,
    Distributed,
}

impl std::fmt::Display for Locality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Locality::Local => write!(f, "local"),
            Locality::Distributed => write!(f, "distributed"),
        }
    }
}

/// A supported parallel backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BackendDescriptor {
    /// Backend identifier (e.g., "mclapply", "future", "Makefile")
    pub name: &'static str,

    /// Local or distributed
    pub locality: Locality,

    /// One-line description shown by `stagehand backends --detailed`
    pub summary: &'static str,
}

impl BackendDescriptor {
    pub const fn new(name: &'static str, locality: Locality, summary: &'static str) -> Self {
        Self {
            name,
            locality,
            summary,
        }
    }

    pub fn is_distributed(&self) -> bool {
        self.locality == Locality::Distributed
    }
}
