//! Best-effort repository metadata detection.
//!
//! Sources, in order: `package.json`, `Cargo.toml`, `.git/config`. The
//! first manifest that names the project wins for `name`/`description`;
//! workspace globs from every manifest are collected. Nothing here fails:
//! a manifest that cannot be read or parsed is logged and ignored.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use gh_scaffold_core::{application::RepoDetector, domain::RepoMeta};
use regex::Regex;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument};

/// Why a manifest was ignored. Only ever logged.
#[derive(Debug, Error)]
enum ManifestError {
    #[error("cannot read {file}: {source}")]
    Io {
        file: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {file}: {source}")]
    Json {
        file: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid TOML in {file}: {source}")]
    Toml {
        file: &'static str,
        #[source]
        source: toml::de::Error,
    },
}

// ── package.json ─────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PackageJson {
    name: Option<String>,
    description: Option<String>,
    workspaces: Option<NpmWorkspaces>,
}

/// `"workspaces": [...]` or `"workspaces": { "packages": [...] }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NpmWorkspaces {
    List(Vec<String>),
    Object {
        #[serde(default)]
        packages: Vec<String>,
    },
}

impl NpmWorkspaces {
    fn into_globs(self) -> Vec<String> {
        match self {
            Self::List(globs) | Self::Object { packages: globs } => globs,
        }
    }
}

// ── Cargo.toml ───────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CargoManifest {
    package: Option<CargoPackage>,
    workspace: Option<CargoWorkspace>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CargoPackage {
    name: Option<toml::Value>,
    description: Option<toml::Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CargoWorkspace {
    members: Vec<String>,
}

/// `name.workspace = true` and friends are tables; only plain strings count.
fn toml_str(value: Option<toml::Value>) -> Option<String> {
    match value {
        Some(toml::Value::String(s)) => Some(s),
        _ => None,
    }
}

// ── Detector ─────────────────────────────────────────────────────────────────

/// Reads manifests and git config straight from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManifestDetector;

impl ManifestDetector {
    pub fn new() -> Self {
        Self
    }

    fn read(repo_root: &Path, file: &'static str) -> Result<Option<String>, ManifestError> {
        let path = repo_root.join(file);
        if !path.is_file() {
            return Ok(None);
        }
        fs::read_to_string(&path)
            .map(Some)
            .map_err(|source| ManifestError::Io { file, source })
    }

    fn package_json(repo_root: &Path, meta: &mut RepoMeta) -> Result<(), ManifestError> {
        const FILE: &str = "package.json";
        let Some(text) = Self::read(repo_root, FILE)? else {
            return Ok(());
        };
        let pkg: PackageJson = serde_json::from_str(&text)
            .map_err(|source| ManifestError::Json { file: FILE, source })?;

        meta.name = meta.name.take().or(pkg.name);
        meta.description = meta.description.take().or(pkg.description);
        if let Some(workspaces) = pkg.workspaces {
            meta.is_monorepo = true;
            meta.workspace_globs.extend(workspaces.into_globs());
        }
        Ok(())
    }

    fn cargo_toml(repo_root: &Path, meta: &mut RepoMeta) -> Result<(), ManifestError> {
        const FILE: &str = "Cargo.toml";
        let Some(text) = Self::read(repo_root, FILE)? else {
            return Ok(());
        };
        let manifest: CargoManifest =
            toml::from_str(&text).map_err(|source| ManifestError::Toml { file: FILE, source })?;

        if let Some(package) = manifest.package {
            meta.name = meta.name.take().or(toml_str(package.name));
            meta.description = meta.description.take().or(toml_str(package.description));
        }
        if let Some(workspace) = manifest.workspace {
            meta.is_monorepo = true;
            meta.workspace_globs.extend(workspace.members);
        }
        Ok(())
    }

    fn git_origin(repo_root: &Path, meta: &mut RepoMeta) -> Result<(), ManifestError> {
        let Some(text) = Self::read(repo_root, ".git/config")? else {
            return Ok(());
        };
        meta.owner_repo = origin_url(&text).and_then(|url| owner_repo(&url));
        Ok(())
    }
}

impl RepoDetector for ManifestDetector {
    #[instrument(skip_all, fields(repo = %repo_root.display()))]
    fn detect(&self, repo_root: &Path) -> RepoMeta {
        let mut meta = RepoMeta::default();

        let steps: [fn(&Path, &mut RepoMeta) -> Result<(), ManifestError>; 3] =
            [Self::package_json, Self::cargo_toml, Self::git_origin];
        for step in steps {
            if let Err(e) = step(repo_root, &mut meta) {
                debug!(error = %e, "Ignoring unreadable manifest");
            }
        }

        let mut seen = std::collections::HashSet::new();
        meta.workspace_globs.retain(|glob| seen.insert(glob.clone()));

        debug!(?meta, "Repository metadata detected");
        meta
    }
}

/// `url` of the `[remote "origin"]` section.
fn origin_url(git_config: &str) -> Option<String> {
    let mut in_origin = false;
    for line in git_config.lines().map(str::trim) {
        if line.starts_with('[') {
            in_origin = line == r#"[remote "origin"]"#;
            continue;
        }
        if !in_origin {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            if key.trim() == "url" {
                return Some(value.trim().to_string());
            }
        }
    }
    None
}

/// `owner/repo` from an https, ssh or scp-style GitHub URL.
fn owner_repo(url: &str) -> Option<String> {
    static GITHUB_URL: OnceLock<Regex> = OnceLock::new();
    let re = GITHUB_URL.get_or_init(|| {
        Regex::new(r"github\.com[:/]([^/\s]+)/([^/\s]+?)(?:\.git)?/?$")
            .expect("GitHub URL pattern is valid")
    });

    let caps = re.captures(url)?;
    Some(format!("{}/{}", &caps[1], &caps[2]))
}
