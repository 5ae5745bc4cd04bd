//! Default backend selection for the current host

use tracing::warn;

use crate::error::{Result, StagehandError};

use super::{BackendDescriptor, registry};

const FORK_BACKEND: &str = "mclapply";
const SOCKET_BACKEND: &str = "parLapply";

/// Host identification capability
///
/// Production code uses [`CurrentHost`]; tests pass their own implementation
/// to simulate either kind of platform.
pub trait HostInfo {
    /// True when the host cannot fork worker processes natively
    fn is_fork_incapable(&self) -> bool;
}

/// The host this binary was compiled for
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrentHost;

impl HostInfo for CurrentHost {
    fn is_fork_incapable(&self) -> bool {
        cfg!(windows)
    }
}

/// Best local backend for the host: `parLapply` without fork, `mclapply` otherwise
pub fn default_backend(host: &dyn HostInfo) -> &'static str {
    if host.is_fork_incapable() {
        SOCKET_BACKEND
    } else {
        FORK_BACKEND
    }
}

/// Resolve the backend a workload should run under
///
/// `None` falls back to [`default_backend`]. Asking for `mclapply` with more
/// than one job on a host that cannot fork is downgraded to `parLapply`.
pub fn select_backend(
    requested: Option<&str>,
    jobs: usize,
    host: &dyn HostInfo,
) -> Result<&'static BackendDescriptor> {
    let name = requested.unwrap_or_else(|| default_backend(host));

    let backend = registry::lookup(name).ok_or_else(|| StagehandError::BackendNotRecognized {
        name: name.to_string(),
    })?;

    if backend.name == FORK_BACKEND && jobs > 1 && host.is_fork_incapable() {
        warn!(
            jobs,
            "{FORK_BACKEND} cannot use more than one worker on this platform, using {SOCKET_BACKEND}"
        );
        return registry::lookup(SOCKET_BACKEND).ok_or_else(|| {
            StagehandError::BackendNotRecognized {
                name: SOCKET_BACKEND.to_string(),
            }
        });
    }

    Ok(backend)
}
