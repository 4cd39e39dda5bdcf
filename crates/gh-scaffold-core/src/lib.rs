//! gh-scaffold Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for gh-scaffold,
//! which scaffolds GitHub community-health files (CONTRIBUTING, SECURITY,
//! issue templates, CODEOWNERS, ...) into repositories.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         gh-scaffold-cli (CLI)           │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (ScaffoldService: scan/apply/doctor)   │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, TemplateStore, ConfigLoader│
//! │   RepoDetector, PackageLocator)         │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    gh-scaffold-adapters (Infrastructure)│
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (catalog, markers, config, reconcile)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use gh_scaffold_core::application::{ApplyOptions, ScaffoldService};
//!
//! let service = ScaffoldService::new(filesystem, store, config_loader, detector, locator);
//! let options = ApplyOptions {
//!     dry_run: true,
//!     diff: true,
//!     ..ApplyOptions::new("./my-repo")
//! };
//! let result = service.apply(&options, &mut std::io::stdout())?;
//! println!("{}", result.summary);
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApplyOptions, ScaffoldService, TemplatesDir,
        ports::{ConfigLoader, Filesystem, LoadedConfig, PackageLocator, RepoDetector, TemplateStore},
    };
    pub use crate::domain::{
        ApplyResult, DoctorReport, FileDiff, IssueTemplateFormat, LicenseChoice, PresetTier,
        RepoMeta, ScaffoldConfig, ScanResult, ScopeMode,
    };
    pub use crate::error::{ScaffoldError, ScaffoldResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
