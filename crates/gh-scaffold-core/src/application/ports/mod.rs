//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `gh-scaffold-adapters`
//! implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `TemplateStore`: Built-in template retrieval
//!   - `ConfigLoader`: `gh-scaffold.yml` discovery and parsing
//!   - `RepoDetector`: Repository metadata from manifests and git config
//!   - `PackageLocator`: Workspace package discovery
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{
    ConfigLoader, Filesystem, LoadedConfig, PackageLocator, RepoDetector, TemplateStore,
};
