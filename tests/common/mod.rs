//! Common test utilities for Stagehand integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A scratch directory for integration tests
pub struct TestWorkspace {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Create a directory in workspace
    pub fn create_dir(&self, path: &str) -> PathBuf {
        let dir = self.path.join(path);
        std::fs::create_dir_all(&dir).expect("Failed to create directory");
        dir
    }

    /// Lay out an asset store under `assets/` with one bundle per entry
    pub fn create_assets(&self, bundles: &[(&str, &[&str])]) -> PathBuf {
        let root = self.create_dir("assets");
        for (bundle, files) in bundles {
            for file in *files {
                self.write_file(
                    &format!("assets/examples/{bundle}/{file}"),
                    &format!("{bundle}/{file}\n"),
                );
            }
            self.create_dir(&format!("assets/examples/{bundle}"));
        }
        self.write_file("assets/shell.sh", "#!/bin/sh\nshift\nexec sh -c \"$*\"\n");
        root
    }

    /// `stagehand` command running inside this workspace with a clean environment
    pub fn stagehand(&self) -> Command {
        let mut cmd = stagehand_cmd();
        cmd.current_dir(&self.path)
            .env_remove("STAGEHAND_CONFIG")
            .env_remove("STAGEHAND_ASSETS_DIR")
            .env_remove("RUST_LOG")
            .env("XDG_CONFIG_HOME", self.path.join(".config"))
            .env("NO_COLOR", "1");
        cmd
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Command for the real `stagehand` binary
#[allow(deprecated)]
pub fn stagehand_cmd() -> Command {
    Command::cargo_bin("stagehand").expect("stagehand binary not built")
}

/// Packaged asset root of this crate
pub fn packaged_assets() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("assets")
}

#[cfg(unix)]
pub fn mode(path: &Path) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path)
        .expect("Failed to stat file")
        .permissions()
        .mode()
        & 0o777
}
