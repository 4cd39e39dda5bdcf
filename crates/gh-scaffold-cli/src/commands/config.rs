//! `gh-scaffold config`: inspect configuration.

use std::path::Path;

use gh_scaffold_adapters::YamlConfigLoader;
use gh_scaffold_core::application::ConfigLoader;

use crate::{
    cli::{ConfigCommands, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    prefs_file: Option<&Path>,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Show(repo) => {
            let root = super::repo_root(&repo)?;
            let loaded = YamlConfigLoader.load(&root, repo.config.as_deref())?;

            if output.format() == OutputFormat::Json {
                output.json(&loaded.config)?;
            } else {
                let yaml = serde_yaml::to_string(&loaded.config).map_err(|e| {
                    CliError::ConfigError {
                        message: format!("Failed to serialise config: {e}"),
                        source: Some(Box::new(e)),
                    }
                })?;
                output.header(&format!("# source: {}", describe(loaded.path.as_deref())))?;
                output.data(&yaml)?;
            }
        }

        ConfigCommands::Path(repo) => {
            let root = super::repo_root(&repo)?;
            let loaded = YamlConfigLoader.load(&root, repo.config.as_deref())?;
            output.data(&describe(loaded.path.as_deref()))?;
        }

        ConfigCommands::Prefs => {
            let path = prefs_file.map_or_else(AppConfig::config_path, Path::to_path_buf);
            output.header(&format!("# {}", path.display()))?;
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise preferences: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.data(&serialised)?;
        }
    }

    Ok(())
}

fn describe(path: Option<&Path>) -> String {
    match path {
        Some(path) => path.display().to_string(),
        None => "(none, using defaults)".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_names_the_file_or_defaults() {
        assert_eq!(describe(Some(Path::new("gh-scaffold.yml"))), "gh-scaffold.yml");
        assert_eq!(describe(None), "(none, using defaults)");
    }
}
