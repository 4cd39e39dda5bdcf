//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `gh-scaffold-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::{RepoMeta, ScaffoldConfig};
use crate::error::ScaffoldResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `gh_scaffold_adapters::LocalFilesystem` (production)
/// - `gh_scaffold_adapters::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Read a UTF-8 file.
    fn read_to_string(&self, path: &Path) -> ScaffoldResult<String>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()>;
}

/// Port for the built-in template set.
///
/// Implemented by `gh_scaffold_adapters::InMemoryStore`, which embeds the
/// templates at compile time. Custom template directories bypass the store
/// and are read through [`Filesystem`].
#[cfg_attr(test, mockall::automock)]
pub trait TemplateStore: Send + Sync {
    /// Raw text of the template called `name`, e.g. `ISSUE_TEMPLATE/config.yml`.
    fn read(&self, name: &str) -> ScaffoldResult<String>;
}

/// Configuration as loaded for one repository root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedConfig {
    /// File the overlay came from, if any.
    pub path: Option<PathBuf>,
    /// Defaults merged with the overlay.
    pub config: ScaffoldConfig,
}

/// Port for reading `gh-scaffold.yml`.
#[cfg_attr(test, mockall::automock)]
pub trait ConfigLoader: Send + Sync {
    /// Load the configuration for `repo_root`.
    ///
    /// With `explicit` set, only that file is considered and it must exist.
    /// Otherwise the first existing well-known candidate is used, and the
    /// defaults alone when there is none.
    fn load<'a>(
        &self,
        repo_root: &Path,
        explicit: Option<&'a Path>,
    ) -> ScaffoldResult<LoadedConfig>;
}

/// Port for best-effort repository metadata detection.
#[cfg_attr(test, mockall::automock)]
pub trait RepoDetector: Send + Sync {
    /// Never fails: unreadable or absent manifests leave fields empty.
    fn detect(&self, repo_root: &Path) -> RepoMeta;
}

/// Port for discovering package roots inside a workspace.
#[cfg_attr(test, mockall::automock)]
pub trait PackageLocator: Send + Sync {
    /// Directories under `repo_root` matching any of `globs`, sorted and
    /// deduplicated. Returned paths are absolute (joined onto `repo_root`).
    fn locate(&self, repo_root: &Path, globs: &[String]) -> ScaffoldResult<Vec<PathBuf>>;
}
