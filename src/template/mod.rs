//! Scheduler template discovery inside example bundles
//!
//! A template is any regular file directly inside a bundle directory whose
//! name ends in `.tmpl`. Subdirectories are not searched.
//!
//! When a bundle ships several templates only the first in ascending
//! lexicographic (byte) order of file name is ever surfaced by
//! [`locate_template`]. The others are ignored, silently. Use
//! [`list_templates`] to see all of them.

use std::path::Path;

use walkdir::WalkDir;

use crate::assets::{AssetFile, AssetStore, BundleSource, ExampleBundle, embedded};
use crate::error::bundle::no_template;
use crate::error::{Result, StagehandError};

/// Suffix identifying scheduler templates
pub const TEMPLATE_SUFFIX: &str = ".tmpl";

/// A template file resolved from a bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateCandidate {
    file_name: String,
    bundle: ExampleBundle,
    asset: AssetFile,
}

impl TemplateCandidate {
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn bundle(&self) -> &ExampleBundle {
        &self.bundle
    }

    /// The template asset inside the store
    pub fn asset(&self) -> &AssetFile {
        &self.asset
    }

    /// Location of the template on disk, `None` when packaged
    pub fn path(&self) -> Option<&Path> {
        self.asset.disk_path()
    }
}

/// Resolve the default template of a bundle
///
/// Fails with `BundleNotFound` for an unknown or absent bundle and with
/// `NoTemplateFound` when the bundle holds no `.tmpl` file.
pub fn locate_template(store: &AssetStore, bundle_name: &str) -> Result<TemplateCandidate> {
    let bundle = store.bundle(bundle_name)?;

    let file_name = template_names(&bundle)?
        .into_iter()
        .next()
        .ok_or_else(|| no_template(bundle_name))?;
    let asset = bundle.file(&file_name)?;

    Ok(TemplateCandidate {
        file_name,
        bundle,
        asset,
    })
}

/// All template file names in a bundle, sorted ascending
pub fn list_templates(store: &AssetStore, bundle_name: &str) -> Result<Vec<String>> {
    let bundle = store.bundle(bundle_name)?;
    template_names(&bundle)
}

fn template_names(bundle: &ExampleBundle) -> Result<Vec<String>> {
    let mut names: Vec<String> = match bundle.source() {
        BundleSource::Embedded => embedded::bundle_files(bundle.name())
            .map(|(relative, _)| relative)
            .filter(|relative| !relative.contains('/') && relative.ends_with(TEMPLATE_SUFFIX))
            .map(str::to_string)
            .collect(),
        BundleSource::Directory(dir) => directory_template_names(dir)?,
    };

    names.sort();
    Ok(names)
}

fn directory_template_names(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true) {
        let entry = entry.map_err(|e| walk_error(dir, e))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if name.ends_with(TEMPLATE_SUFFIX) {
            names.push(name.into_owned());
        }
    }

    Ok(names)
}

fn walk_error(dir: &Path, err: walkdir::Error) -> StagehandError {
    let path = err.path().unwrap_or(dir).to_path_buf();
    let source = err
        .into_io_error()
        .unwrap_or_else(|| std::io::Error::other("file system loop detected"));
    StagehandError::io(&path, source)
}
