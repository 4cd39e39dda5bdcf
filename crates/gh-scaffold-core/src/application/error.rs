//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not business
//! logic. Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A named template is not available.
    #[error("Template not found: {name}")]
    TemplateMissing { name: String, path: Option<PathBuf> },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The configuration file exists but could not be parsed.
    #[error("Invalid configuration in {path}: {reason}")]
    ConfigParse { path: PathBuf, reason: String },

    /// An explicitly requested configuration file does not exist.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Writing to the print/preview sink failed.
    #[error("Failed to write preview output: {reason}")]
    OutputFailed { reason: String },

    /// Store access failed (lock poisoned).
    #[error("Template store error")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateMissing { name, path } => {
                let mut s = vec![format!("No template named '{name}'")];
                if let Some(path) = path {
                    s.push(format!("Add it to {}", path.display()));
                }
                s.push("Remove templatesDir to fall back to the built-in templates".into());
                s
            }
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have read and write permissions".into(),
            ],
            Self::ConfigParse { path, .. } => vec![
                format!("Fix the YAML syntax in {}", path.display()),
                "Run: gh-scaffold init --force to start from a fresh config".into(),
            ],
            Self::ConfigNotFound { path } => vec![
                format!("No file at {}", path.display()),
                "Paths given with --config are relative to the repository root".into(),
                "Omit --config to use gh-scaffold.yml when present".into(),
            ],
            Self::OutputFailed { .. } => vec!["Check that stdout is writable".into()],
            Self::StoreLockError => vec![
                "The template store is locked".into(),
                "Try again in a moment".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateMissing { .. } | Self::ConfigNotFound { .. } => ErrorCategory::NotFound,
            Self::ConfigParse { .. } => ErrorCategory::Configuration,
            Self::FilesystemError { .. } | Self::OutputFailed { .. } | Self::StoreLockError => {
                ErrorCategory::Internal
            }
        }
    }
}
