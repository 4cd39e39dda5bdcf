//! Core domain layer for gh-scaffold.
//!
//! Pure logic only: the target catalog, configuration model and merge,
//! managed-block markers, content generation, the per-file reconciliation
//! decision and the reports handed back to callers. All I/O goes through
//! the ports in `crate::application`.
//!
//! - **No I/O**: no filesystem or network calls
//! - **Static tables**: the catalog and template maps are plain data
//! - **Synchronous**: every function here returns immediately

pub mod catalog;
pub mod config;
pub mod content;
pub mod error;
pub mod markers;
pub mod reconcile;
pub mod report;
pub mod templates;
pub mod value_objects;

pub use catalog::{CATALOG, TargetDescriptor};
pub use config::{
    Behavior, Contacts, Funding, GithubSponsors, Ownership, OwnershipRule, ScaffoldConfig, Scope,
};
pub use error::{DomainError, ErrorCategory};
pub use reconcile::{Action, FileState};
pub use report::{
    ApplyResult, DoctorReport, FileDiff, FileStatus, RepoMeta, ScanResult, format_scan_report,
};
pub use value_objects::{IssueTemplateFormat, LicenseChoice, PresetTier, ScopeMode};
