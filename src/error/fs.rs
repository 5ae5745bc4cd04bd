//! File system errors

use super::StagehandError;

/// Creates a destination directory not found error
pub fn directory_not_found(path: impl Into<String>) -> StagehandError {
    StagehandError::DirectoryNotFound { path: path.into() }
}

/// Creates a packaged asset not found error
pub fn asset_not_found(path: impl Into<String>) -> StagehandError {
    StagehandError::AssetNotFound { path: path.into() }
}

/// Creates an already exists error
pub fn already_exists(path: impl Into<String>) -> StagehandError {
    StagehandError::AlreadyExists { path: path.into() }
}

/// Creates an error for a destination that resolves to its own source
pub fn same_file(path: impl Into<String>) -> StagehandError {
    StagehandError::SameFile { path: path.into() }
}

/// Creates an error for a bundle copy landing inside or over its own source
pub fn overlaps_source(path: impl Into<String>, bundle_dir: impl Into<String>) -> StagehandError {
    StagehandError::OverlapsSource {
        path: path.into(),
        bundle_dir: bundle_dir.into(),
    }
}
