//! Test fixtures for building throwaway asset stores.
//!
//! ```ignore
//! use crate::test_fixtures::asset_fixture;
//!
//! let (temp, store) = asset_fixture()
//!     .bundle("sge", &["a.tmpl", "z.tmpl", "notes.txt"])
//!     .shell_wrapper("#!/bin/sh\n")
//!     .build();
//! ```
//!
//! Every bundle file gets the content `contents of <bundle>/<file>\n`, so
//! tests can compare copies without keeping the bytes around.

#![allow(clippy::expect_used)]

use std::path::Path;

use tempfile::TempDir;

use crate::assets::{AssetStore, EXAMPLES_DIR, SHELL_WRAPPER};

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Content written for `file` inside `bundle`
pub fn fixture_content(bundle: &str, file: &str) -> String {
    format!("contents of {bundle}/{file}\n")
}

/// Builder for an asset store living in a temp directory
pub struct AssetFixture {
    temp: TempDir,
    bundles: Vec<String>,
}

/// Start an empty asset store fixture
#[must_use]
pub fn asset_fixture() -> AssetFixture {
    AssetFixture {
        temp: create_temp_dir(),
        bundles: Vec::new(),
    }
}

impl AssetFixture {
    /// Add a recognized bundle holding `files` (paths relative to the bundle)
    #[must_use]
    pub fn bundle(mut self, name: &str, files: &[&str]) -> Self {
        let dir = self.temp.path().join(EXAMPLES_DIR).join(name);
        std::fs::create_dir_all(&dir).expect("Failed to create bundle directory");
        for file in files {
            write_file(&dir.join(file), &fixture_content(name, file));
        }
        self.bundles.push(name.to_string());
        self
    }

    /// Add the shell-wrapper asset
    #[must_use]
    pub fn shell_wrapper(self, content: &str) -> Self {
        write_file(&self.temp.path().join(SHELL_WRAPPER), content);
        self
    }

    /// Finish, returning the temp directory guard and the store over it
    #[must_use]
    pub fn build(self) -> (TempDir, AssetStore) {
        let store = AssetStore::with_bundles(self.temp.path(), self.bundles);
        (self.temp, store)
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::write(path, content).expect("Failed to write fixture file");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_layout() {
        let (temp, store) = asset_fixture()
            .bundle("sge", &["sge.tmpl", "nested/run.sh"])
            .shell_wrapper("#!/bin/sh\n")
            .build();

        assert_eq!(store.root(), Some(temp.path()));
        assert!(temp.path().join("examples/sge/sge.tmpl").is_file());
        assert!(temp.path().join("examples/sge/nested/run.sh").is_file());
        assert!(temp.path().join("shell.sh").is_file());
        assert_eq!(store.known_bundles(), ["sge".to_string()]);
    }
}
