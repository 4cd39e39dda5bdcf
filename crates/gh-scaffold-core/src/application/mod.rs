//! Application layer for gh-scaffold.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (`ScaffoldService`)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer sequences the domain layer and the ports. Rules
//! about which file gets written and how live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{ApplyOptions, ScaffoldService, TemplatesDir};

// Re-export port traits (for adapter implementation)
pub use ports::{ConfigLoader, Filesystem, LoadedConfig, PackageLocator, RepoDetector, TemplateStore};

pub use error::ApplicationError;
