//! CLI preferences.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. It only
//! covers how the CLI presents output; what gets scaffolded lives in
//! `gh-scaffold.yml` and is owned by the core crate.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`GH_SCAFFOLD_OUTPUT__NO_COLOR=true`)
//! 3. Preferences file (`--prefs`, or `config.toml` in the user config dir)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Prefix for environment overrides; nested keys are separated by `__`.
const ENV_PREFIX: &str = "GH_SCAFFOLD";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`.
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    /// Load preferences: defaults, then the file, then the environment.
    ///
    /// A missing file is not an error; a malformed one is.
    pub fn load(prefs_file: Option<&Path>) -> anyhow::Result<Self> {
        let path = prefs_file.map_or_else(Self::config_path, Path::to_path_buf);

        Config::builder()
            .add_source(Config::try_from(&Self::default()).context("encoding defaults")?)
            .add_source(File::from(path.as_path()).format(FileFormat::Toml).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("reading preferences from {}", path.display()))?
            .try_deserialize()
            .context("invalid preferences")
    }

    /// Path to the default preferences file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.gh-scaffold.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "gh-scaffold", "gh-scaffold")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".gh-scaffold.toml"))
    }
}
