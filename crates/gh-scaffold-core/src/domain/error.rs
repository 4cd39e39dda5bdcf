// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so reports can carry them)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("invalid {field} '{value}' (expected one of: {expected})")]
    InvalidValue {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("invalid package glob '{pattern}': {reason}")]
    InvalidGlob { pattern: String, reason: String },

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    #[error("Unknown target key: {0}")]
    UnknownTargetKey(String),

    #[error("no template mapped for {key}")]
    TemplateNotMapped { key: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidValue {
                field, expected, ..
            } => vec![
                format!("Valid values for {field}: {expected}"),
                "Check gh-scaffold.yml and the command-line flags".into(),
            ],
            Self::InvalidGlob { pattern, .. } => vec![
                format!("Fix the glob pattern '{pattern}' under scope.packagesGlobs"),
                "Patterns are relative to the repository root, e.g. packages/*".into(),
            ],
            Self::UnknownTargetKey(key) => vec![
                format!("'{key}' is not a known target key"),
                "Run: gh-scaffold scan to see every key".into(),
            ],
            Self::TemplateNotMapped { key } => vec![
                format!("No template is registered for {key}"),
                "Provide a custom templates directory with --templates".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidValue { .. } | Self::InvalidGlob { .. } => ErrorCategory::Validation,
            Self::UnknownTargetKey(_) | Self::TemplateNotMapped { .. } => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
}
