//! Read-only store of packaged assets
//!
//! By default the assets are compiled into the binary (see [`embedded`]).
//! A store can instead be rooted at a directory laid out as:
//!
//! ```text
//! <root>/
//!   shell.sh              fixed shell-wrapper asset
//!   examples/<bundle>/    one directory per example bundle
//! ```
//!
//! Bundle names are known at compile time. A name outside that set is
//! rejected even if a directory of that name happens to exist.

pub mod embedded;

use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{Result, StagehandError, bundle, fs};

use embedded::EmbeddedFile;

/// Example bundles shipped with the crate
pub const KNOWN_BUNDLES: &[&str] = &["basic", "gsp", "lsf", "mtcars", "sge", "slurm", "torque"];

/// Subdirectory of the store holding the example bundles
pub const EXAMPLES_DIR: &str = "examples";

/// File name of the shell-wrapper asset at the store root
pub const SHELL_WRAPPER: &str = "shell.sh";

/// A single asset a provisioning call copies from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetFile {
    Embedded(EmbeddedFile),
    Disk(PathBuf),
}

impl AssetFile {
    /// Location on disk, `None` for embedded assets
    pub fn disk_path(&self) -> Option<&Path> {
        match self {
            Self::Embedded(_) => None,
            Self::Disk(path) => Some(path),
        }
    }

    pub fn read(&self) -> Result<Cow<'static, [u8]>> {
        match self {
            Self::Embedded(file) => Ok(Cow::Borrowed(file.contents)),
            Self::Disk(path) => std::fs::read(path)
                .map(Cow::Owned)
                .map_err(|e| StagehandError::io(path, e)),
        }
    }
}

impl fmt::Display for AssetFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded(file) => write!(f, "<packaged>/{}", file.path),
            Self::Disk(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Where a bundle's files live
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BundleSource {
    Embedded,
    Directory(PathBuf),
}

/// A named example bundle that exists in the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleBundle {
    name: String,
    source: BundleSource,
}

impl ExampleBundle {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> &BundleSource {
        &self.source
    }

    /// Directory holding the bundle's files, `None` for embedded bundles
    pub fn path(&self) -> Option<&Path> {
        match &self.source {
            BundleSource::Embedded => None,
            BundleSource::Directory(path) => Some(path),
        }
    }

    /// A file directly inside the bundle
    pub fn file(&self, file_name: &str) -> Result<AssetFile> {
        match &self.source {
            BundleSource::Embedded => embedded::bundle_files(&self.name)
                .find(|(relative, _)| *relative == file_name)
                .map(|(_, file)| AssetFile::Embedded(file))
                .ok_or_else(|| {
                    fs::asset_not_found(format!(
                        "<packaged>/{EXAMPLES_DIR}/{}/{file_name}",
                        self.name
                    ))
                }),
            BundleSource::Directory(dir) => Ok(AssetFile::Disk(dir.join(file_name))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Backing {
    Embedded,
    Directory(PathBuf),
}

/// Read-only view over the packaged assets or an asset directory
#[derive(Debug, Clone)]
pub struct AssetStore {
    backing: Backing,
    bundles: Vec<String>,
}

impl AssetStore {
    /// Store rooted at `root` recognizing the compiled-in bundle names
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_bundles(root, KNOWN_BUNDLES.iter().copied())
    }

    /// Store rooted at `root` recognizing only the given bundle names
    pub fn with_bundles<I, S>(root: impl Into<PathBuf>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            backing: Backing::Directory(root.into()),
            bundles: sorted_names(names),
        }
    }

    /// Store over the assets compiled into the binary
    pub fn packaged() -> Self {
        Self {
            backing: Backing::Embedded,
            bundles: sorted_names(KNOWN_BUNDLES.iter().copied()),
        }
    }

    /// Directory the store reads from, `None` for the packaged assets
    pub fn root(&self) -> Option<&Path> {
        match &self.backing {
            Backing::Embedded => None,
            Backing::Directory(root) => Some(root),
        }
    }

    /// Bundle names this store recognizes, sorted
    pub fn known_bundles(&self) -> &[String] {
        &self.bundles
    }

    /// Resolve a bundle by name
    ///
    /// Fails with `BundleNotFound` when the name is not recognized or the
    /// bundle is absent from the store.
    pub fn bundle(&self, name: &str) -> Result<ExampleBundle> {
        if !self.bundles.iter().any(|b| b == name) {
            return Err(bundle::not_found(name));
        }

        let source = match &self.backing {
            Backing::Embedded => {
                if embedded::bundle_files(name).next().is_none() {
                    return Err(bundle::not_found(name));
                }
                BundleSource::Embedded
            }
            Backing::Directory(root) => {
                let path = root.join(EXAMPLES_DIR).join(name);
                if !path.is_dir() {
                    return Err(bundle::not_found(name));
                }
                BundleSource::Directory(path)
            }
        };

        Ok(ExampleBundle {
            name: name.to_string(),
            source,
        })
    }

    /// Recognized bundles that are present, sorted by name
    pub fn available_bundles(&self) -> Vec<ExampleBundle> {
        self.bundles
            .iter()
            .filter_map(|name| self.bundle(name).ok())
            .collect()
    }

    /// The shell-wrapper asset
    pub fn shell_wrapper(&self) -> Result<AssetFile> {
        match &self.backing {
            Backing::Embedded => Ok(AssetFile::Embedded(embedded::SHELL_WRAPPER)),
            Backing::Directory(root) => {
                let path = root.join(SHELL_WRAPPER);
                if path.is_file() {
                    Ok(AssetFile::Disk(path))
                } else {
                    Err(fs::asset_not_found(path.display().to_string()))
                }
            }
        }
    }
}

impl Default for AssetStore {
    fn default() -> Self {
        Self::packaged()
    }
}

impl fmt::Display for AssetStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.backing {
            Backing::Embedded => write!(f, "packaged assets"),
            Backing::Directory(root) => write!(f, "{}", root.display()),
        }
    }
}

fn sorted_names<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut bundles: Vec<String> = names.into_iter().map(Into::into).collect();
    bundles.sort();
    bundles.dedup();
    bundles
}
