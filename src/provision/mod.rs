//! Provisioning of packaged assets into caller-chosen destinations
//!
//! Three operations, each a synchronous copy out of the read-only
//! [`AssetStore`]:
//! - [`provision_template`]: a located scheduler template into a directory
//! - [`provision_shell_wrapper`]: the fixed `shell.sh` asset to a path
//! - [`provision_bundle`]: a whole example bundle into a directory
//!
//! The overwrite policies differ. Templates and bundles refuse to replace an
//! existing destination unless asked (`AlreadyExists`). The shell wrapper
//! quietly leaves an existing file alone unless asked, and warns before
//! replacing it.
//!
//! A destination is present if anything sits at the path, including a
//! dangling symlink. No operation writes into the asset store it reads from:
//! a destination resolving to the source fails with `SameFile`, and a bundle
//! copy overlapping its source directory fails with `OverlapsSource`.

use std::fmt;
use std::path::Path;

use tracing::{debug, warn};

use crate::assets::{AssetStore, BundleSource, embedded};
use crate::error::{Result, fs};
use crate::template::{TemplateCandidate, locate_template};

pub mod file_ops;

pub use file_ops::ProvisionRequest;

/// Observable result of a successful provisioning call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisionOutcome {
    /// Destination did not exist and was written
    Written,
    /// Destination existed and was replaced
    Replaced,
    /// Destination existed and was left untouched
    Skipped,
}

impl fmt::Display for ProvisionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProvisionOutcome::Written => write!(f, "written"),
            ProvisionOutcome::Replaced => write!(f, "replaced"),
            ProvisionOutcome::Skipped => write!(f, "skipped"),
        }
    }
}

/// Copy a located template into `destination_dir`, keeping its file name
///
/// The directory must already exist. An existing file of the same name is
/// only replaced when `overwrite` is set; otherwise this fails with
/// `AlreadyExists` and the file is left as it was.
pub fn provision_template(
    candidate: &TemplateCandidate,
    destination_dir: &Path,
    overwrite: bool,
) -> Result<ProvisionOutcome> {
    file_ops::ensure_directory(destination_dir)?;

    let destination = destination_dir.join(candidate.file_name());
    let existed = file_ops::entry_exists(&destination);
    if existed && !overwrite {
        return Err(fs::already_exists(destination.display().to_string()));
    }

    file_ops::copy_file(&ProvisionRequest {
        source: candidate.asset().clone(),
        destination,
        overwrite,
        executable: false,
    })?;

    Ok(if existed {
        ProvisionOutcome::Replaced
    } else {
        ProvisionOutcome::Written
    })
}

/// Locate the default template of `bundle_name` and copy it into `destination_dir`
pub fn write_default_template(
    store: &AssetStore,
    bundle_name: &str,
    destination_dir: &Path,
    overwrite: bool,
) -> Result<(TemplateCandidate, ProvisionOutcome)> {
    let candidate = locate_template(store, bundle_name)?;
    let outcome = provision_template(&candidate, destination_dir, overwrite)?;
    Ok((candidate, outcome))
}

/// Copy the shell-wrapper asset to `destination` and mark it executable
///
/// An existing file is replaced after a warning when `overwrite` is set and
/// left untouched otherwise. Neither case is an error.
pub fn provision_shell_wrapper(
    store: &AssetStore,
    destination: &Path,
    overwrite: bool,
) -> Result<ProvisionOutcome> {
    let source = store.shell_wrapper()?;

    if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
        file_ops::ensure_directory(parent)?;
    }

    let existed = file_ops::entry_exists(destination);
    if existed {
        if !overwrite {
            debug!(path = %destination.display(), "shell wrapper exists, leaving it");
            return Ok(ProvisionOutcome::Skipped);
        }
        file_ops::ensure_not_source(&source, destination)?;
        warn!(path = %destination.display(), "Overwriting file {}", destination.display());
    }

    file_ops::copy_file(&ProvisionRequest {
        source,
        destination: destination.to_path_buf(),
        overwrite,
        executable: true,
    })?;

    Ok(if existed {
        ProvisionOutcome::Replaced
    } else {
        ProvisionOutcome::Written
    })
}

/// Copy the whole of `bundle_name` into `destination_dir/<bundle_name>`
///
/// With `overwrite` an existing copy is removed first, so the result never
/// mixes old and new files.
pub fn provision_bundle(
    store: &AssetStore,
    bundle_name: &str,
    destination_dir: &Path,
    overwrite: bool,
) -> Result<ProvisionOutcome> {
    let bundle = store.bundle(bundle_name)?;
    file_ops::ensure_directory(destination_dir)?;

    let target = destination_dir.join(bundle.name());
    if let BundleSource::Directory(dir) = bundle.source() {
        file_ops::ensure_outside(dir, &target)?;
    }

    let existed = file_ops::entry_exists(&target);
    if existed {
        if !overwrite {
            return Err(fs::already_exists(target.display().to_string()));
        }
        debug!(path = %target.display(), "removing previous copy of bundle");
        file_ops::remove_existing(&target)?;
    }

    match bundle.source() {
        BundleSource::Embedded => {
            let files = embedded::bundle_files(bundle.name())
                .map(|(relative, file)| (relative, file.contents));
            file_ops::write_files(files, &target)?;
        }
        BundleSource::Directory(dir) => {
            file_ops::copy_dir(dir, &target)?;
        }
    }

    Ok(if existed {
        ProvisionOutcome::Replaced
    } else {
        ProvisionOutcome::Written
    })
}
