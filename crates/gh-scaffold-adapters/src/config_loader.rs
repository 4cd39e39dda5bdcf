//! `gh-scaffold.yml` discovery and parsing.
//!
//! The overlay is looked up in a fixed candidate order unless a path is
//! given explicitly. The result is always the defaults merged with the
//! overlay, so callers never see a partially filled configuration.

use std::fs;
use std::path::{Path, PathBuf};

use gh_scaffold_core::{
    application::{ApplicationError, ConfigLoader, LoadedConfig},
    domain::ScaffoldConfig,
    error::{Context, ScaffoldError, ScaffoldResult},
};
use tracing::{debug, instrument};

use crate::filesystem::map_io_error;

/// Candidate config files, relative to the repository root, in priority order.
pub const CONFIG_CANDIDATES: [&str; 4] = [
    "gh-scaffold.yml",
    "gh-scaffold.yaml",
    ".github/gh-scaffold.yml",
    ".github/gh-scaffold.yaml",
];

const CONFIG_HEADER: &str = "\
# gh-scaffold configuration
# See `gh-scaffold apply --help` for the flags that override these values.
";

/// Reads YAML configuration from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlConfigLoader;

impl YamlConfigLoader {
    pub fn new() -> Self {
        Self
    }

    /// First existing candidate under `repo_root`.
    pub fn find(repo_root: &Path) -> Option<PathBuf> {
        CONFIG_CANDIDATES
            .iter()
            .map(|candidate| repo_root.join(candidate))
            .find(|path| path.is_file())
    }

    /// Parse one overlay. Empty and comment-only files are an empty overlay.
    pub fn parse(path: &Path, text: &str) -> ScaffoldResult<ScaffoldConfig> {
        let parse_error = |e: serde_yaml::Error| ApplicationError::ConfigParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        };

        let value: serde_yaml::Value = serde_yaml::from_str(text).map_err(parse_error)?;
        if value.is_null() {
            return Ok(ScaffoldConfig::default());
        }

        Ok(serde_yaml::from_value(value).map_err(parse_error)?)
    }
}

impl ConfigLoader for YamlConfigLoader {
    #[instrument(skip_all, fields(repo = %repo_root.display()))]
    fn load<'a>(
        &self,
        repo_root: &Path,
        explicit: Option<&'a Path>,
    ) -> ScaffoldResult<LoadedConfig> {
        let defaults = ScaffoldConfig::defaults();

        let path = match explicit {
            Some(path) => {
                let path = if path.is_absolute() {
                    path.to_path_buf()
                } else {
                    repo_root.join(path)
                };
                if path.is_dir() {
                    return Err(ScaffoldError::Configuration {
                        message: format!("{} is a directory, not a config file", path.display()),
                    });
                }
                if !path.is_file() {
                    return Err(ApplicationError::ConfigNotFound { path }.into());
                }
                Some(path)
            }
            None => Self::find(repo_root),
        };

        let Some(path) = path else {
            debug!("No config file, using defaults");
            return Ok(LoadedConfig {
                path: None,
                config: defaults,
            });
        };

        let text = fs::read_to_string(&path).map_err(|e| map_io_error(&path, e, "read config"))?;
        let overlay = Self::parse(&path, &text)?;
        debug!(path = %path.display(), "Config loaded");

        Ok(LoadedConfig {
            config: defaults.merge(&overlay),
            path: Some(path),
        })
    }
}

/// Starter `gh-scaffold.yml`: the defaults serialised as YAML.
pub fn default_config_yaml() -> ScaffoldResult<String> {
    let body = serde_yaml::to_string(&ScaffoldConfig::defaults())
        .context("serialising default configuration")?;
    Ok(format!("{CONFIG_HEADER}{body}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gh_scaffold_core::domain::{IssueTemplateFormat, PresetTier, ScopeMode};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, text: &str) -> PathBuf {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn defaults_when_no_file_exists() {
        let temp = TempDir::new().unwrap();
        let loaded = YamlConfigLoader.load(temp.path(), None).unwrap();

        assert_eq!(loaded.path, None);
        assert_eq!(loaded.config, ScaffoldConfig::defaults());
    }

    #[test]
    fn root_candidate_wins_over_dot_github() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), ".github/gh-scaffold.yml", "preset: strict\n");
        let root = write(temp.path(), "gh-scaffold.yaml", "preset: minimal\n");

        let loaded = YamlConfigLoader.load(temp.path(), None).unwrap();
        assert_eq!(loaded.path, Some(root));
        assert_eq!(loaded.config.preset(), PresetTier::Minimal);
    }

    #[test]
    fn overlay_is_merged_onto_defaults() {
        let temp = TempDir::new().unwrap();
        write(
            temp.path(),
            "gh-scaffold.yml",
            "issueTemplates: forms\ncontacts:\n  securityEmail: sec@acme.dev\nscope:\n  mode: all\n",
        );

        let config = YamlConfigLoader.load(temp.path(), None).unwrap().config;
        assert_eq!(config.issue_templates(), IssueTemplateFormat::Forms);
        assert_eq!(config.scope_mode(), ScopeMode::All);
        assert_eq!(config.preset(), PresetTier::Standard);
        assert_eq!(config.packages_globs(), ["packages/*", "apps/*"]);
        assert_eq!(config.contacts.security_email.as_deref(), Some("sec@acme.dev"));
    }

    #[test]
    fn explicit_path_is_relative_to_root() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "gh-scaffold.yml", "preset: minimal\n");
        write(temp.path(), "conf/scaffold.yml", "preset: strict\n");

        let loaded = YamlConfigLoader
            .load(temp.path(), Some(Path::new("conf/scaffold.yml")))
            .unwrap();
        assert_eq!(loaded.config.preset(), PresetTier::Strict);
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let temp = TempDir::new().unwrap();
        let err = YamlConfigLoader
            .load(temp.path(), Some(Path::new("nope.yml")))
            .unwrap_err();

        assert!(matches!(
            err,
            ScaffoldError::Application(ApplicationError::ConfigNotFound { .. })
        ));
    }

    #[test]
    fn explicit_directory_is_a_configuration_error() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join(".github")).unwrap();

        let err = YamlConfigLoader
            .load(temp.path(), Some(Path::new(".github")))
            .unwrap_err();
        assert!(matches!(err, ScaffoldError::Configuration { .. }));
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "gh-scaffold.yml", "preset: [unclosed\n");

        let err = YamlConfigLoader.load(temp.path(), None).unwrap_err();
        assert!(matches!(
            err,
            ScaffoldError::Application(ApplicationError::ConfigParse { .. })
        ));
    }

    #[test]
    fn unknown_preset_is_a_parse_error() {
        let err = YamlConfigLoader::parse(Path::new("x.yml"), "preset: huge\n").unwrap_err();
        assert!(err.to_string().contains("x.yml"));
    }

    #[test]
    fn comment_only_file_is_empty_overlay() {
        let overlay = YamlConfigLoader::parse(Path::new("x.yml"), "# nothing yet\n").unwrap();
        assert_eq!(overlay, ScaffoldConfig::default());
    }

    #[test]
    fn starter_config_parses_back_to_defaults() {
        let text = default_config_yaml().unwrap();
        assert!(text.starts_with("# gh-scaffold configuration\n"));
        assert!(text.contains("preset: standard"));

        let parsed = YamlConfigLoader::parse(Path::new("gh-scaffold.yml"), &text).unwrap();
        assert_eq!(ScaffoldConfig::defaults().merge(&parsed), ScaffoldConfig::defaults());
    }
}
