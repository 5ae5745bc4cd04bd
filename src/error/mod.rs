//! Error types and handling for Stagehand
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Constructors are grouped by domain:
//! - [`bundle`]: Bundle and template lookup errors
//! - [`fs`]: File system errors

pub mod bundle;
pub mod fs;

use std::path::Path;

use miette::Diagnostic;
use thiserror::Error;

/// Coarse classification callers can match on without caring about the variant details
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unknown bundle, missing destination directory or missing packaged asset
    NotFound,
    /// Bundle holds no `.tmpl` files
    NoTemplateFound,
    /// Destination present and overwrite disabled
    AlreadyExists,
    /// Unknown backend, or a destination that would overwrite the source
    InvalidInput,
    /// Configuration file could not be read or parsed
    Config,
    /// Output could not be serialized
    Serialization,
    /// Any other failure reported by the file system
    Io(std::io::ErrorKind),
}

/// Main error type for Stagehand operations
#[derive(Error, Diagnostic, Debug)]
pub enum StagehandError {
    // Bundle errors
    #[error("Example bundle '{name}' not found")]
    #[diagnostic(
        code(stagehand::bundle::not_found),
        help("Run 'stagehand bundles' to see the available example bundles")
    )]
    BundleNotFound { name: String },

    #[error("No template files found for bundle '{bundle}'")]
    #[diagnostic(
        code(stagehand::bundle::no_template),
        help("Only files ending in '.tmpl' directly inside the bundle are considered")
    )]
    NoTemplateFound { bundle: String },

    // Backend errors
    #[error("Backend not recognized: {name}")]
    #[diagnostic(
        code(stagehand::backend::not_recognized),
        help("Supported backends: mclapply, parLapply, future, future_lapply, Makefile")
    )]
    BackendNotRecognized { name: String },

    // File system errors
    #[error("Destination directory not found: {path}")]
    #[diagnostic(
        code(stagehand::fs::directory_not_found),
        help("Create the directory first; provisioning never creates it")
    )]
    DirectoryNotFound { path: String },

    #[error("Packaged asset not found: {path}")]
    #[diagnostic(
        code(stagehand::fs::asset_not_found),
        help("Check 'assets_dir' in the configuration or STAGEHAND_ASSETS_DIR")
    )]
    AssetNotFound { path: String },

    #[error("File already exists: {path}")]
    #[diagnostic(
        code(stagehand::fs::already_exists),
        help("Pass --overwrite to replace it")
    )]
    AlreadyExists { path: String },

    #[error("Destination is the source asset itself: {path}")]
    #[diagnostic(
        code(stagehand::fs::same_file),
        help("Choose a destination outside the asset store")
    )]
    SameFile { path: String },

    #[error("Destination {path} overlaps the bundle directory {bundle_dir}")]
    #[diagnostic(
        code(stagehand::fs::overlaps_source),
        help("Copy the bundle to a directory outside the asset store")
    )]
    OverlapsSource { path: String, bundle_dir: String },

    #[error("IO error at {path}: {source}")]
    #[diagnostic(code(stagehand::fs::io_error))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // Configuration errors
    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(stagehand::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(code(stagehand::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    // Output errors
    #[error("Failed to serialize output: {reason}")]
    #[diagnostic(code(stagehand::output::serialization_failed))]
    SerializationFailed { reason: String },
}

impl StagehandError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::BundleNotFound { .. }
            | Self::DirectoryNotFound { .. }
            | Self::AssetNotFound { .. } => ErrorKind::NotFound,
            Self::NoTemplateFound { .. } => ErrorKind::NoTemplateFound,
            Self::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            Self::BackendNotRecognized { .. }
            | Self::SameFile { .. }
            | Self::OverlapsSource { .. } => ErrorKind::InvalidInput,
            Self::ConfigReadFailed { .. } | Self::ConfigParseFailed { .. } => ErrorKind::Config,
            Self::SerializationFailed { .. } => ErrorKind::Serialization,
            Self::Io { source, .. } => ErrorKind::Io(source.kind()),
        }
    }

    /// Wrap an IO error with the path it occurred at
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

impl From<serde_json::Error> for StagehandError {
    fn from(err: serde_json::Error) -> Self {
        StagehandError::SerializationFailed {
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, StagehandError>;
