//! Low-level copy operations for provisioning
//!
//! This module handles:
//! - Single file copies described by a [`ProvisionRequest`]
//! - Recursive directory copies for whole bundles
//! - The executable bit on unix hosts
//!
//! Overwrite policy is decided by the callers in the parent module; by the
//! time a request reaches [`copy_file`] the copy is known to be wanted.
//! Existence is always judged on the destination entry itself, so a
//! symlink (dangling or not) counts as present and is never written through.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::assets::AssetFile;
use crate::error::{Result, StagehandError, fs};

/// One file-copy side effect, discarded once performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionRequest {
    pub source: AssetFile,
    pub destination: PathBuf,
    pub overwrite: bool,
    pub executable: bool,
}

/// Fail with `DirectoryNotFound` unless `dir` is an existing directory
pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        Ok(())
    } else {
        Err(fs::directory_not_found(dir.display().to_string()))
    }
}

/// Whether anything, including a dangling symlink, sits at `path`
pub fn entry_exists(path: &Path) -> bool {
    std::fs::symlink_metadata(path).is_ok()
}

fn is_symlink(path: &Path) -> bool {
    std::fs::symlink_metadata(path).is_ok_and(|m| m.file_type().is_symlink())
}

/// Fail with `SameFile` when `destination` resolves to the on-disk `source`
pub fn ensure_not_source(source: &AssetFile, destination: &Path) -> Result<()> {
    let Some(source) = source.disk_path() else {
        return Ok(());
    };

    let same = match (source.canonicalize(), destination.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    };

    if same {
        Err(fs::same_file(destination.display().to_string()))
    } else {
        Ok(())
    }
}

/// Fail with `OverlapsSource` when `target` is `bundle_dir`, lies inside
/// it, or contains it
///
/// `target` need not exist yet, but its parent must.
pub fn ensure_outside(bundle_dir: &Path, target: &Path) -> Result<()> {
    let bundle = bundle_dir
        .canonicalize()
        .map_err(|e| StagehandError::io(bundle_dir, e))?;
    let resolved = resolve(target)?;

    if resolved.starts_with(&bundle) || bundle.starts_with(&resolved) {
        return Err(fs::overlaps_source(
            target.display().to_string(),
            bundle_dir.display().to_string(),
        ));
    }
    Ok(())
}

fn resolve(path: &Path) -> Result<PathBuf> {
    if let Ok(resolved) = path.canonicalize() {
        return Ok(resolved);
    }
    match (path.parent(), path.file_name()) {
        (Some(parent), Some(name)) => {
            let parent = if parent.as_os_str().is_empty() {
                Path::new(".")
            } else {
                parent
            };
            let parent = parent
                .canonicalize()
                .map_err(|e| StagehandError::io(parent, e))?;
            Ok(parent.join(name))
        }
        _ => Ok(path.to_path_buf()),
    }
}

/// Perform a single file copy
///
/// Content and, for on-disk sources, mode bits are carried over. When the
/// request is executable the execute bits are added afterwards. A symlink
/// at the destination is replaced by a regular file.
pub fn copy_file(request: &ProvisionRequest) -> Result<()> {
    if let Some(path) = request.source.disk_path().filter(|p| !p.is_file()) {
        return Err(fs::asset_not_found(path.display().to_string()));
    }

    let destination = &request.destination;
    if entry_exists(destination) {
        if !request.overwrite {
            return Err(fs::already_exists(destination.display().to_string()));
        }
        ensure_not_source(&request.source, destination)?;
        if is_symlink(destination) {
            std::fs::remove_file(destination).map_err(|e| StagehandError::io(destination, e))?;
        }
    }

    let bytes = match &request.source {
        AssetFile::Disk(path) => std::fs::copy(path, destination),
        AssetFile::Embedded(file) => {
            std::fs::write(destination, file.contents).map(|()| file.contents.len() as u64)
        }
    }
    .map_err(|e| StagehandError::io(destination, e))?;

    if request.executable {
        make_executable(destination)?;
    }

    debug!(
        source = %request.source,
        destination = %destination.display(),
        bytes,
        executable = request.executable,
        "copied asset"
    );

    Ok(())
}

/// Write `files` (paths relative to `target`) under `target`, creating it
pub fn write_files<'a, I>(files: I, target: &Path) -> Result<usize>
where
    I: IntoIterator<Item = (&'a str, &'a [u8])>,
{
    std::fs::create_dir_all(target).map_err(|e| StagehandError::io(target, e))?;

    let mut written = 0;
    for (relative, contents) in files {
        let destination = target.join(relative);
        if let Some(parent) = destination.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StagehandError::io(parent, e))?;
        }
        std::fs::write(&destination, contents).map_err(|e| StagehandError::io(&destination, e))?;
        written += 1;
    }

    debug!(target = %target.display(), files = written, "wrote packaged files");

    Ok(written)
}

/// Copy the tree under `source` to `target`, creating `target`
pub fn copy_dir(source: &Path, target: &Path) -> Result<usize> {
    let mut copied = 0;

    for entry in WalkDir::new(source).follow_links(true) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(source).to_path_buf();
            let err = e
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("file system loop detected"));
            StagehandError::io(&path, err)
        })?;

        let relative = entry.path().strip_prefix(source).unwrap_or(entry.path());
        let destination = target.join(relative);

        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&destination)
                .map_err(|e| StagehandError::io(&destination, e))?;
        } else {
            std::fs::copy(entry.path(), &destination)
                .map_err(|e| StagehandError::io(&destination, e))?;
            copied += 1;
        }
    }

    debug!(
        source = %source.display(),
        target = %target.display(),
        files = copied,
        "copied directory"
    );

    Ok(copied)
}

/// Remove whatever sits at `path`; a symlink is removed, not followed
pub fn remove_existing(path: &Path) -> Result<()> {
    let is_dir = std::fs::symlink_metadata(path)
        .map_err(|e| StagehandError::io(path, e))?
        .is_dir();
    let result = if is_dir {
        std::fs::remove_dir_all(path)
    } else {
        std::fs::remove_file(path)
    };
    result.map_err(|e| StagehandError::io(path, e))
}

/// Add execute permission for owner, group and other, like `chmod +x`
#[cfg(unix)]
pub fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = std::fs::metadata(path)
        .map_err(|e| StagehandError::io(path, e))?
        .permissions();
    perms.set_mode(perms.mode() | 0o111);
    std::fs::set_permissions(path, perms).map_err(|e| StagehandError::io(path, e))
}

/// Windows has no execute bit; scripts run through their interpreter
#[cfg(not(unix))]
pub fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}
