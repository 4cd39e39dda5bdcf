//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "scan a repository" or "apply the scaffold".

pub mod scaffold_service;

pub use scaffold_service::{ApplyOptions, ScaffoldService, TemplatesDir};
