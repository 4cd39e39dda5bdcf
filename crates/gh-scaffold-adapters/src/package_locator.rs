//! Workspace package discovery with `globset` over a `walkdir` traversal.

use std::path::{Path, PathBuf};

use gh_scaffold_core::{application::PackageLocator, domain::DomainError, error::ScaffoldResult};
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use tracing::{debug, instrument};
use walkdir::{DirEntry, WalkDir};

/// Directories never descended into while looking for packages.
const IGNORED_DIRS: [&str; 4] = [".git", "node_modules", "target", "dist"];

/// Depth limit for patterns containing `**`.
const RECURSIVE_DEPTH: usize = 6;

/// Finds package directories on the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobPackageLocator;

impl GlobPackageLocator {
    pub fn new() -> Self {
        Self
    }
}

impl PackageLocator for GlobPackageLocator {
    #[instrument(skip_all, fields(repo = %repo_root.display()))]
    fn locate(&self, repo_root: &Path, globs: &[String]) -> ScaffoldResult<Vec<PathBuf>> {
        let patterns: Vec<&str> = globs
            .iter()
            .map(String::as_str)
            .map(normalize)
            .filter(|g| !g.is_empty())
            .collect();
        if patterns.is_empty() {
            return Ok(Vec::new());
        }

        let set = build_globset(&patterns)?;
        let max_depth = patterns.iter().map(|p| depth_of(p)).max().unwrap_or(1);

        let mut found: Vec<PathBuf> = WalkDir::new(repo_root)
            .min_depth(1)
            .max_depth(max_depth)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !is_ignored(entry))
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_dir())
            .filter(|entry| {
                entry
                    .path()
                    .strip_prefix(repo_root)
                    .is_ok_and(|rel| set.is_match(rel))
            })
            .map(DirEntry::into_path)
            .collect();

        found.sort();
        found.dedup();
        debug!(count = found.len(), "Packages located");
        Ok(found)
    }
}

/// `*` stays inside one path segment; `**` crosses segments.
fn build_globset(patterns: &[&str]) -> ScaffoldResult<GlobSet> {
    let invalid = |pattern: &str, e: globset::Error| DomainError::InvalidGlob {
        pattern: pattern.to_string(),
        reason: e.kind().to_string(),
    };

    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = GlobBuilder::new(pattern)
            .literal_separator(true)
            .build()
            .map_err(|e| invalid(pattern, e))?;
        builder.add(glob);
    }
    Ok(builder.build().map_err(|e| invalid(&patterns.join(", "), e))?)
}

/// Strip `./` and trailing slashes; npm-style `packages/*/` is common.
fn normalize(glob: &str) -> &str {
    glob.trim().trim_start_matches("./").trim_end_matches('/')
}

fn depth_of(pattern: &str) -> usize {
    if pattern.contains("**") {
        RECURSIVE_DEPTH
    } else {
        pattern.split('/').count()
    }
}

fn is_ignored(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| IGNORED_DIRS.contains(&name))
}
