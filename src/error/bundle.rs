//! Bundle-related errors

use super::StagehandError;

/// Creates a bundle not found error
pub fn not_found(name: impl Into<String>) -> StagehandError {
    StagehandError::BundleNotFound { name: name.into() }
}

/// Creates a no template found error
pub fn no_template(bundle: impl Into<String>) -> StagehandError {
    StagehandError::NoTemplateFound {
        bundle: bundle.into(),
    }
}
