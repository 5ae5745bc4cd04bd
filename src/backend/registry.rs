//! Compiled-in backend catalog
//!
//! The catalog is a `const` slice: local backends first, then distributed
//! ones, each group in a fixed order. Listing order is part of the contract.

use super::{BackendDescriptor, Locality};

/// Every recognized backend, in listing order
pub const BACKENDS: &[BackendDescriptor] = &[
    BackendDescriptor::new(
        "mclapply",
        Locality::Local,
        "Forked worker processes on this host (single worker where fork is unavailable)",
    ),
    BackendDescriptor::new(
        "parLapply",
        Locality::Local,
        "Socket cluster of worker processes on this host",
    ),
    BackendDescriptor::new(
        "future",
        Locality::Distributed,
        "Asynchronous futures with work stealing: each target starts once its inputs are ready and a worker is free",
    ),
    BackendDescriptor::new(
        "future_lapply",
        Locality::Distributed,
        "Asynchronous futures run in synchronous batches, one dependency level at a time",
    ),
    BackendDescriptor::new(
        "Makefile",
        Locality::Distributed,
        "Targets dispatched by a generated Makefile run as a subprocess; imports use a local backend",
    ),
];

/// Iterate catalog entries, optionally restricted to distributed backends
pub fn descriptors(distributed_only: bool) -> impl Iterator<Item = &'static BackendDescriptor> {
    BACKENDS
        .iter()
        .filter(move |b| !distributed_only || b.is_distributed())
}

/// Backend names in catalog order
pub fn list_backends(distributed_only: bool) -> Vec<&'static str> {
    descriptors(distributed_only).map(|b| b.name).collect()
}

/// Find a backend by exact (case-sensitive) name
pub fn lookup(name: &str) -> Option<&'static BackendDescriptor> {
    BACKENDS.iter().find(|b| b.name == name)
}
