//! Infrastructure adapters for gh-scaffold.
//!
//! This crate implements the ports defined in
//! `gh_scaffold_core::application::ports`. It contains all external
//! dependencies and I/O operations.

pub mod builtin_templates;
pub mod config_loader;
pub mod detector;
pub mod filesystem;
pub mod package_locator;
pub mod template_store;

// Re-export commonly used adapters
pub use config_loader::{YamlConfigLoader, default_config_yaml};
pub use detector::ManifestDetector;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use package_locator::GlobPackageLocator;
pub use template_store::InMemoryStore;

use gh_scaffold_core::{application::ScaffoldService, error::ScaffoldResult};

/// A service wired to the local filesystem and the built-in templates.
pub fn local_service() -> ScaffoldResult<ScaffoldService> {
    Ok(ScaffoldService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(InMemoryStore::with_builtin()?),
        Box::new(YamlConfigLoader::new()),
        Box::new(ManifestDetector::new()),
        Box::new(GlobPackageLocator::new()),
    ))
}
