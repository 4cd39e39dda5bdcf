//! Reports returned to callers: scan results, apply results, doctor findings.
//!
//! All of them are built fresh per invocation and never persisted.

use std::path::PathBuf;

use serde::Serialize;
use similar::TextDiff;

use crate::domain::catalog::CATALOG;

// ── Repository metadata ──────────────────────────────────────────────────────

/// Best-effort facts about a repository. Absent inputs leave fields empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `owner/repo` parsed from the origin remote.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_repo: Option<String>,
    pub is_monorepo: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub workspace_globs: Vec<String>,
}

// ── Scan ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileStatus {
    pub key: String,
    pub exists: bool,
    /// Resolved path relative to the repository root.
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    pub repo_path: PathBuf,
    pub config_path: Option<PathBuf>,
    pub meta: RepoMeta,
    /// One entry per catalog descriptor, in catalog order.
    pub files: Vec<FileStatus>,
    /// Keys whose file does not exist.
    pub missing: Vec<String>,
}

impl ScanResult {
    pub fn file(&self, key: &str) -> Option<&FileStatus> {
        self.files.iter().find(|f| f.key == key)
    }

    /// Missing keys flagged as essential in the catalog.
    pub fn missing_essentials(&self) -> Vec<&str> {
        CATALOG
            .iter()
            .filter(|d| d.essential)
            .map(|d| d.key)
            .filter(|k| self.missing.iter().any(|m| m == k))
            .collect()
    }
}

/// Human-readable scan report.
pub fn format_scan_report(scan: &ScanResult) -> String {
    let mut lines = vec![format!("gh-scaffold scan: {}", scan.repo_path.display())];
    if let Some(config) = &scan.config_path {
        lines.push(format!("config: {}", config.display()));
    }
    lines.push(String::new());

    for file in &scan.files {
        let mark = if file.exists { '✓' } else { '✗' };
        lines.push(format!("{mark} {:<22} {}", file.key, file.path));
    }
    lines.push(String::new());

    let essentials = scan.missing_essentials();
    if essentials.is_empty() {
        lines.push("Missing essentials: none".into());
    } else {
        lines.push(format!("Missing essentials: {}", essentials.join(", ")));
    }

    lines.join("\n") + "\n"
}

// ── Apply ────────────────────────────────────────────────────────────────────

/// Unified diff for one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileDiff {
    pub path: String,
    pub patch: String,
}

impl FileDiff {
    /// Line diff from `old` to `new`, headed `a/<path>` / `b/<path>`.
    pub fn compute(path: &str, old: &str, new: &str) -> Self {
        let patch = TextDiff::from_lines(old, new)
            .unified_diff()
            .context_radius(3)
            .header(&format!("a/{path}"), &format!("b/{path}"))
            .to_string();

        Self {
            path: path.to_string(),
            patch,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.patch.is_empty()
    }

    fn prefixed(self, prefix: &str) -> Self {
        Self {
            path: join_rel(prefix, &self.path),
            patch: self.patch,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ApplyResult {
    pub summary: String,
    pub written: Vec<String>,
    pub skipped: Vec<String>,
    pub warnings: Vec<String>,
    pub diffs: Vec<FileDiff>,
}

impl ApplyResult {
    /// Fold a per-root result into this aggregate.
    ///
    /// Paths get `root_rel/` prepended; warnings get a `[root_rel] ` prefix.
    /// An empty `root_rel` means the invocation root and changes nothing.
    pub fn absorb(&mut self, root_rel: &str, other: ApplyResult) {
        self.written
            .extend(other.written.iter().map(|p| join_rel(root_rel, p)));
        self.skipped
            .extend(other.skipped.iter().map(|p| join_rel(root_rel, p)));
        self.warnings.extend(other.warnings.into_iter().map(|w| {
            if root_rel.is_empty() {
                w
            } else {
                format!("[{root_rel}] {w}")
            }
        }));
        self.diffs
            .extend(other.diffs.into_iter().map(|d| d.prefixed(root_rel)));
    }
}

fn join_rel(prefix: &str, path: &str) -> String {
    if prefix.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", prefix.trim_end_matches('/'), path)
    }
}

// ── Doctor ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DoctorReport {
    /// `path: description` per problem found.
    pub problems: Vec<String>,
}

impl DoctorReport {
    pub fn is_ok(&self) -> bool {
        self.problems.is_empty()
    }
}
